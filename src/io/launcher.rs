//! Invocation of the external submission tool.
//!
//! `SubmitCommand` is the `<tool> -template <file> -entities <k=v,...>` call for
//! one job. A `Launcher` runs it and reports the exit status; `ProcessLauncher`
//! spawns the real tool and blocks until it exits, `DryRunLauncher` only logs.
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCommand {
    pub program: String,
    pub template: PathBuf,
    pub entities: String,
}

impl SubmitCommand {
    pub fn new(program: impl Into<String>, template: impl Into<PathBuf>, entities: String) -> Self {
        Self {
            program: program.into(),
            template: template.into(),
            entities,
        }
    }

    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-template".into(),
            self.template.clone().into_os_string(),
            "-entities".into(),
            self.entities.clone().into(),
        ]
    }
}

impl fmt::Display for SubmitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -template {} -entities {}",
            self.program,
            self.template.display(),
            self.entities
        )
    }
}

/// Exit status of one tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// None when the process was terminated by a signal
    pub code: Option<i32>,
    pub dry_run: bool,
}

impl LaunchOutcome {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            dry_run: false,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait Launcher {
    /// Run `command` to completion. `Err` means the tool could not be started.
    fn launch(&mut self, command: &SubmitCommand) -> Result<LaunchOutcome>;
}

#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, command: &SubmitCommand) -> Result<LaunchOutcome> {
        let status = Command::new(&command.program)
            .args(command.args())
            .status()
            .map_err(|source| Error::Spawn {
                program: command.program.clone(),
                source,
            })?;
        Ok(LaunchOutcome {
            code: status.code(),
            dry_run: false,
        })
    }
}

#[derive(Debug, Default)]
pub struct DryRunLauncher;

impl Launcher for DryRunLauncher {
    fn launch(&mut self, command: &SubmitCommand) -> Result<LaunchOutcome> {
        info!("Dry run, not executing: {}", command);
        Ok(LaunchOutcome {
            code: Some(0),
            dry_run: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(program: &str) -> SubmitCommand {
        SubmitCommand::new(program, "/work/job.xml", "lib=SL19c,dca=3.0".to_string())
    }

    #[test]
    fn command_line_rendering() {
        let cmd = command("star-submit-template");
        assert_eq!(
            cmd.to_string(),
            "star-submit-template -template /work/job.xml -entities lib=SL19c,dca=3.0"
        );
        assert_eq!(
            cmd.args(),
            vec![
                OsString::from("-template"),
                OsString::from("/work/job.xml"),
                OsString::from("-entities"),
                OsString::from("lib=SL19c,dca=3.0"),
            ]
        );
    }

    #[test]
    fn dry_run_never_fails() {
        let outcome = DryRunLauncher.launch(&command("does-not-exist")).unwrap();
        assert!(outcome.success());
        assert!(outcome.dry_run);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = ProcessLauncher
            .launch(&command("embsubmit-no-such-tool-4f1c"))
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn process_exit_codes_are_reported() {
        assert_eq!(
            ProcessLauncher.launch(&command("true")).unwrap(),
            LaunchOutcome::exited(0)
        );
        let failed = ProcessLauncher.launch(&command("false")).unwrap();
        assert!(!failed.success());
        assert_eq!(failed.code, Some(1));
    }
}
