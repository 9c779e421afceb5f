//! Record of table sources that have already been merged.

use std::collections::HashSet;
use std::env::current_dir;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Set of claimed source paths, compared case-insensitively.
///
/// A path is claimed at most once for the lifetime of the ledger. Claims are
/// never released, including for sources that later failed to read.
#[derive(Debug, Default)]
pub struct MergeLedger {
    claimed: Mutex<HashSet<String>>,
}

impl MergeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path`, returning `true` only for the first caller.
    ///
    /// The check and the insert happen under one lock, so two threads racing
    /// on the same path never both see `true`.
    pub fn try_claim(&self, path: impl AsRef<Path>) -> bool {
        let folded = fold(path.as_ref());
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(folded)
    }

    pub fn is_claimed(&self, path: impl AsRef<Path>) -> bool {
        let folded = fold(path.as_ref());
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&folded)
    }

    pub fn len(&self) -> usize {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn fold(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

/// Absolute form of `path` with `.` and `..` folded away lexically.
///
/// The filesystem is not consulted, so symlinks are not resolved and the
/// path need not exist. If the working directory is unavailable a relative
/// path is returned folded but otherwise unchanged.
pub fn normalize_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match current_dir() {
            Ok(dir) => dir.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }
    normalized
}
