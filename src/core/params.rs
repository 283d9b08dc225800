use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default external submission tool
pub const DEFAULT_SUBMIT_TOOL: &str = "star-submit-template";

/// Track-quality cuts, passed through to the job unvalidated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutParams {
    pub dca: String,
    pub nhit: String,
    pub nhitfrac: String,
}

impl CutParams {
    /// Directory name encoding the cut values
    pub fn dir_name(&self) -> String {
        format!(
            "dca_{}_nhit_{}_nhitfrac_{}",
            self.dca, self.nhit, self.nhitfrac
        )
    }
}

impl Default for CutParams {
    fn default() -> Self {
        Self {
            dca: "3.0".to_string(),
            nhit: "15".to_string(),
            nhitfrac: "0.52".to_string(),
        }
    }
}

/// Run-wide configuration, built once from the command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Job template for the submission tool, relative to the working directory
    pub submit_script: PathBuf,
    /// Root directory searched for mu/mc file lists
    pub list_dir: PathBuf,
    pub production: String,
    /// Output directory name, appended to `output_root/production`
    pub output_tag: String,
    pub library: String,
    pub output_root: PathBuf,
    pub cuts: CutParams,
    pub tool: String,
    /// If true, log commands instead of running them
    pub dry_run: bool,
}

impl SubmitConfig {
    /// Template path resolved against `cwd`; absolute paths are kept as-is
    pub fn template_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.submit_script)
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            submit_script: PathBuf::from("submit/submit_efficiency_assessment.xml"),
            list_dir: PathBuf::from("list/auau200_pion"),
            production: "P18ih".to_string(),
            output_tag: "emb/AuAu_200_production_2014".to_string(),
            library: "SL19c".to_string(),
            output_root: PathBuf::from("/gpfs01/star/pwg/nelsey"),
            cuts: CutParams::default(),
            tool: DEFAULT_SUBMIT_TOOL.to_string(),
            dry_run: false,
        }
    }
}

/// Parameters of one submitted job. Rendered as the `-entities` argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobParameters {
    pub library: String,
    pub mu_list: PathBuf,
    pub mc_list: PathBuf,
    pub log_dir: PathBuf,
    pub out_dir: PathBuf,
    pub cuts: CutParams,
}

impl JobParameters {
    pub fn entities(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for JobParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lib={},mulist={},mclist={},log={},out={},dca={},nhit={},nhitfrac={}",
            self.library,
            self.mu_list.display(),
            self.mc_list.display(),
            self.log_dir.display(),
            self.out_dir.display(),
            self.cuts.dca,
            self.cuts.nhit,
            self.cuts.nhitfrac,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_render_in_fixed_order() {
        let params = JobParameters {
            library: "SL19c".to_string(),
            mu_list: PathBuf::from("/a/mu1.list"),
            mc_list: PathBuf::from("/a/mc1.list"),
            log_dir: PathBuf::from("/L"),
            out_dir: PathBuf::from("/O"),
            cuts: CutParams::default(),
        };
        assert_eq!(
            params.entities(),
            "lib=SL19c,mulist=/a/mu1.list,mclist=/a/mc1.list,log=/L,out=/O,dca=3.0,nhit=15,nhitfrac=0.52"
        );
    }

    #[test]
    fn cut_values_pass_through_unvalidated() {
        let cuts = CutParams {
            dca: "abc".to_string(),
            nhit: "".to_string(),
            nhitfrac: "1e-3".to_string(),
        };
        assert_eq!(cuts.dir_name(), "dca_abc_nhit__nhitfrac_1e-3");
    }

    #[test]
    fn template_path_resolution() {
        let mut config = SubmitConfig::default();
        assert_eq!(
            config.template_path(Path::new("/work")),
            PathBuf::from("/work/submit/submit_efficiency_assessment.xml")
        );

        config.submit_script = PathBuf::from("/abs/job.xml");
        assert_eq!(
            config.template_path(Path::new("/work")),
            PathBuf::from("/abs/job.xml")
        );
    }
}
