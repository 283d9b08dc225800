//! Filesystem and process I/O: recursive discovery of input lists (`lister`)
//! and invocation of the external submission tool (`launcher`).
pub mod lister;
pub use lister::list_all_files;

pub mod launcher;
pub use launcher::{DryRunLauncher, LaunchOutcome, Launcher, ProcessLauncher, SubmitCommand};
