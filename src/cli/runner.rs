use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use embsubmit::{BatchReport, DryRunLauncher, Error, ProcessLauncher, submit_all};

use super::args::CliArgs;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let config = args.to_config();
    let cwd = std::env::current_dir()?;

    let result = if config.dry_run {
        submit_all(&config, &cwd, &mut DryRunLauncher)
    } else {
        submit_all(&config, &cwd, &mut ProcessLauncher)
    };

    let report = match result {
        Ok(report) => report,
        Err(Error::TemplateMissing { path }) => {
            warn!("Submission template does not exist: {:?}", path);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    summarize(&report);

    if let Some(path) = &args.report {
        report.write_json(path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

fn summarize(report: &BatchReport) {
    info!("Submission complete!");
    info!("Submitted: {}", report.submitted);
    if report.dry_run > 0 {
        info!("Dry run: {}", report.dry_run);
    }
    info!("Failed: {}", report.failed);
    if !report.unmatched.is_empty() {
        warn!("Unmatched list files: {}", report.unmatched.len());
    }
}
