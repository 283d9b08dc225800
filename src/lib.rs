#![doc = r#"
embsubmit: batch submission helper for embedding-efficiency jobs.

Walks a directory of input file lists, pairs every detector-data list
(`mu<N>.list`) with a simulated-data list (`mc<N>.list`) by sorted position, and
hands each pair to `star-submit-template` as one cluster job. Job output and logs
land under a directory derived from the production, output tag and track cuts.

Quick start
-----------
```rust,no_run
use std::path::Path;
use embsubmit::{submit_all, ProcessLauncher, SubmitConfig};

fn main() -> embsubmit::Result<()> {
    let config = SubmitConfig {
        list_dir: "list/auau200_pion".into(),
        output_root: "/scratch/emb".into(),
        ..SubmitConfig::default()
    };

    let report = submit_all(&config, Path::new("/home/user/analysis"), &mut ProcessLauncher)?;
    println!("submitted={} failed={}", report.submitted, report.failed);
    Ok(())
}
```

Plugging in a launcher
----------------------
Anything implementing [`Launcher`] can stand in for the real tool, e.g. to
submit through a wrapper script or to record commands in tests.
[`DryRunLauncher`] logs each command without running it.

Error handling
--------------
Failed submissions are recorded in the [`BatchReport`] and never stop the run.
A missing template yields [`Error::TemplateMissing`] before anything is created;
directory walk and creation errors are returned as-is.

Useful modules
--------------
- [`api`]: the end-to-end pipeline and its report.
- [`core`]: configuration, list classification/pairing, output layout.
- [`io`]: directory listing and tool invocation.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::classify::{ClassifiedLists, ListClassifier, ListPair, Pairing};
pub use crate::core::layout::OutputLayout;
pub use crate::core::params::{CutParams, DEFAULT_SUBMIT_TOOL, JobParameters, SubmitConfig};
pub use crate::error::{Error, Result};
pub use crate::types::{JobStatus, ListKind};

pub use crate::io::{
    DryRunLauncher, LaunchOutcome, Launcher, ProcessLauncher, SubmitCommand, list_all_files,
};

pub use crate::api::{BatchReport, JobRecord, submit_all};
