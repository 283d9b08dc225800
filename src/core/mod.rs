//! Core building blocks: run configuration and job parameters, list
//! classification and pairing, and the output directory layout. These are
//! consumed by the high-level `api` module.
pub mod classify;
pub mod layout;
pub mod params;
