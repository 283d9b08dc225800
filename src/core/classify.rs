//! Sorting discovered files into mu/mc lists and pairing them positionally.
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::ListKind;

/// Matches paths against the mu and mc list patterns. Mu is tested first.
pub struct ListClassifier {
    mu: Regex,
    mc: Regex,
}

impl ListClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            mu: Regex::new(ListKind::Mu.pattern())?,
            mc: Regex::new(ListKind::Mc.pattern())?,
        })
    }

    /// Kind of list `path` is, or None if it matches neither pattern
    pub fn kind_of(&self, path: &Path) -> Option<ListKind> {
        let s = path.to_string_lossy();
        if self.mu.is_match(&s) {
            Some(ListKind::Mu)
        } else if self.mc.is_match(&s) {
            Some(ListKind::Mc)
        } else {
            None
        }
    }

    pub fn classify<I>(&self, paths: I) -> ClassifiedLists
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut lists = ClassifiedLists::default();
        for path in paths {
            match self.kind_of(&path) {
                Some(ListKind::Mu) => lists.mu.push(path),
                Some(ListKind::Mc) => lists.mc.push(path),
                None => {}
            }
        }
        sort_paths(&mut lists.mu);
        sort_paths(&mut lists.mc);
        lists
    }
}

// Bytewise on the full path, not component-wise like PathBuf's Ord
fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLists {
    pub mu: Vec<PathBuf>,
    pub mc: Vec<PathBuf>,
}

impl ClassifiedLists {
    pub fn is_balanced(&self) -> bool {
        self.mu.len() == self.mc.len()
    }

    /// Zip mu and mc lists positionally. A length mismatch is logged and the
    /// surplus entries of the longer list are returned as unmatched.
    pub fn pair(self) -> Pairing {
        if !self.is_balanced() {
            warn!(
                "Different number of {} and {} list files: {} {}, {} {}",
                ListKind::Mu,
                ListKind::Mc,
                self.mu.len(),
                ListKind::Mu,
                self.mc.len(),
                ListKind::Mc
            );
        }

        let n = self.mu.len().min(self.mc.len());
        let mut mu = self.mu;
        let mut mc = self.mc;
        let mut unmatched = mu.split_off(n);
        unmatched.extend(mc.split_off(n));
        for path in &unmatched {
            debug!("Dropping unmatched list: {:?}", path);
        }

        Pairing {
            pairs: mu
                .into_iter()
                .zip(mc)
                .map(|(mu_list, mc_list)| ListPair { mu_list, mc_list })
                .collect(),
            unmatched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPair {
    pub mu_list: PathBuf,
    pub mc_list: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    pub pairs: Vec<ListPair>,
    pub unmatched: Vec<PathBuf>,
}
