//! Output directory layout: `<root>/<production>/<tag>/<cuts>/{log,out}`.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::params::CutParams;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub base: PathBuf,
    pub log_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(output_root: &Path, production: &str, output_tag: &str, cuts: &CutParams) -> Self {
        let base = output_root
            .join(production)
            .join(output_tag)
            .join(cuts.dir_name());
        Self {
            log_dir: base.join("log"),
            out_dir: base.join("out"),
            base,
        }
    }

    /// Create both directories and any missing ancestors. Existing directories are left alone.
    pub fn prepare(&self) -> Result<()> {
        for dir in [&self.log_dir, &self.out_dir] {
            if !dir.is_dir() {
                debug!("Creating directory: {:?}", dir);
            }
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn layout_paths_encode_cuts() {
        let layout = OutputLayout::new(
            Path::new("/out"),
            "P18ih",
            "emb/AuAu_200_production_2014",
            &CutParams::default(),
        );
        let base = PathBuf::from("/out/P18ih/emb/AuAu_200_production_2014/dca_3.0_nhit_15_nhitfrac_0.52");
        assert_eq!(layout.base, base);
        assert_eq!(layout.log_dir, base.join("log"));
        assert_eq!(layout.out_dir, base.join("out"));
    }

    #[test]
    fn prepare_is_idempotent() {
        let root = TempDir::new().unwrap();
        let layout = OutputLayout::new(root.path(), "P18ih", "tag", &CutParams::default());

        layout.prepare().unwrap();
        assert!(layout.log_dir.is_dir());
        assert!(layout.out_dir.is_dir());

        fs::write(layout.out_dir.join("keep.root"), b"x").unwrap();
        layout.prepare().unwrap();
        assert!(layout.out_dir.join("keep.root").exists());
    }

    #[test]
    fn prepare_fails_when_path_is_a_file() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("P18ih"), b"not a dir").unwrap();
        let layout = OutputLayout::new(root.path(), "P18ih", "tag", &CutParams::default());
        assert!(layout.prepare().is_err());
    }
}
