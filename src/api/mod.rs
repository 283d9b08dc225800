//! High-level library API: run the whole discovery, pairing and submission
//! pipeline for a `SubmitConfig`, and collect the outcome in a `BatchReport`.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::classify::{ListClassifier, ListPair};
use crate::core::layout::OutputLayout;
use crate::core::params::{JobParameters, SubmitConfig};
use crate::error::{Error, Result};
use crate::io::launcher::{Launcher, SubmitCommand};
use crate::io::lister::list_all_files;
use crate::types::JobStatus;

/// One submission attempt
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub mu_list: PathBuf,
    pub mc_list: PathBuf,
    pub command: String,
    pub outcome: JobStatus,
}

/// Summary of a submission run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub config: SubmitConfig,
    pub template: PathBuf,
    pub log_dir: PathBuf,
    pub out_dir: PathBuf,
    pub submitted: usize,
    pub failed: usize,
    pub dry_run: usize,
    /// List files left over when the mu and mc counts differ
    pub unmatched: Vec<PathBuf>,
    pub jobs: Vec<JobRecord>,
}

impl BatchReport {
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Submit one job per mu/mc list pair found under `config.list_dir`.
///
/// Relative paths in `config` are resolved against `cwd`. Returns
/// `Error::TemplateMissing` before touching the filesystem if the template
/// does not exist. Tool failures are recorded in the report and never abort
/// the run; directory walk and creation errors do.
pub fn submit_all<L: Launcher>(
    config: &SubmitConfig,
    cwd: &Path,
    launcher: &mut L,
) -> Result<BatchReport> {
    let started_at = Utc::now();

    let template = config.template_path(cwd);
    if !template.is_file() {
        return Err(Error::TemplateMissing { path: template });
    }

    let layout = OutputLayout::new(
        &cwd.join(&config.output_root),
        &config.production,
        &config.output_tag,
        &config.cuts,
    );
    layout.prepare()?;

    let files = list_all_files(&cwd.join(&config.list_dir))?;
    let classifier = ListClassifier::new()?;
    let pairing = classifier.classify(files).pair();

    info!("Submitting jobs - parameters");
    info!("Number of jobs: {}", pairing.pairs.len());
    info!("Library: {}", config.library);
    info!("DCA: {}", config.cuts.dca);
    info!("nhit: {}", config.cuts.nhit);
    info!("nhitfrac: {}", config.cuts.nhitfrac);
    info!("Log directory: {:?}", layout.log_dir);
    info!("Output directory: {:?}", layout.out_dir);

    let mut report = BatchReport {
        started_at,
        config: config.clone(),
        template: template.clone(),
        log_dir: layout.log_dir.clone(),
        out_dir: layout.out_dir.clone(),
        submitted: 0,
        failed: 0,
        dry_run: 0,
        unmatched: pairing.unmatched,
        jobs: Vec::with_capacity(pairing.pairs.len()),
    };

    for ListPair { mu_list, mc_list } in pairing.pairs {
        let params = JobParameters {
            library: config.library.clone(),
            mu_list,
            mc_list,
            log_dir: layout.log_dir.clone(),
            out_dir: layout.out_dir.clone(),
            cuts: config.cuts.clone(),
        };
        let command = SubmitCommand::new(&config.tool, &template, params.entities());

        info!("Submitting job");
        info!("muDst file list: {:?}", params.mu_list);
        info!("minimc file list: {:?}", params.mc_list);
        info!("Submit command: {}", command);

        let outcome = match launcher.launch(&command) {
            Ok(outcome) if outcome.dry_run => JobStatus::DryRun,
            Ok(outcome) if outcome.success() => JobStatus::Submitted,
            Ok(outcome) => JobStatus::Failed { code: outcome.code },
            Err(e) => JobStatus::NotStarted {
                reason: e.to_string(),
            },
        };

        if outcome.is_failure() {
            warn!("Job submission failure: {} ({:?})", outcome, params.mu_list);
            report.failed += 1;
        } else if outcome == JobStatus::DryRun {
            report.dry_run += 1;
        } else {
            report.submitted += 1;
        }

        report.jobs.push(JobRecord {
            mu_list: params.mu_list,
            mc_list: params.mc_list,
            command: command.to_string(),
            outcome,
        });
    }

    Ok(report)
}
