//! Command Line Interface (CLI) layer for embsubmit.
//!
//! `args` maps the command-line flags onto a `SubmitConfig`; `runner` sets up
//! logging, picks the launcher, and turns the advisory failures (missing
//! template, failed submissions) into warnings rather than an error exit.
//!
//! To drive submissions from another program, use `embsubmit::submit_all`.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
