use clap::Parser;
use std::path::PathBuf;

use embsubmit::{CutParams, DEFAULT_SUBMIT_TOOL, SubmitConfig};

#[derive(Parser)]
#[command(
    name = "embsubmit",
    version,
    about = "Submit embedding efficiency jobs via star-submit-template, one per mu/mc list pair"
)]
pub struct CliArgs {
    /// The xml job template for star-submit-template
    #[arg(long, default_value = "submit/submit_efficiency_assessment.xml")]
    pub submitscript: PathBuf,

    /// Directory searched recursively for mu<N>.list and mc<N>.list files
    #[arg(long, default_value = "list/auau200_pion")]
    pub listdir: PathBuf,

    /// Production tag associated with the data embedded into
    #[arg(long, default_value = "P18ih")]
    pub production: String,

    /// Output directory name (appended to outputroot/production)
    #[arg(long, default_value = "emb/AuAu_200_production_2014")]
    pub outputtag: String,

    /// Production library
    #[arg(long, default_value = "SL19c")]
    pub library: String,

    /// Root directory for all output and logs
    #[arg(long, default_value = "/gpfs01/star/pwg/nelsey")]
    pub outputroot: PathBuf,

    /// DCA cut for reconstructed tracks
    #[arg(long, default_value = "3.0")]
    pub dca: String,

    /// Number of reconstructed hits in track reco
    #[arg(long, default_value = "15")]
    pub nhit: String,

    /// Fraction of reconstructed hits out of possible hits in track reco
    #[arg(long, default_value = "0.52")]
    pub nhitfrac: String,

    /// Submission tool to invoke
    #[arg(long, default_value = DEFAULT_SUBMIT_TOOL)]
    pub tool: String,

    /// Print the submit commands without running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> SubmitConfig {
        SubmitConfig {
            submit_script: self.submitscript.clone(),
            list_dir: self.listdir.clone(),
            production: self.production.clone(),
            output_tag: self.outputtag.clone(),
            library: self.library.clone(),
            output_root: self.outputroot.clone(),
            cuts: CutParams {
                dca: self.dca.clone(),
                nhit: self.nhit.clone(),
                nhitfrac: self.nhitfrac.clone(),
            },
            tool: self.tool.clone(),
            dry_run: self.dry_run,
        }
    }
}
