pub mod backend;
pub mod commands;
pub mod parser;
pub mod repository;

pub use backend::VcsKind;
pub use repository::Repository;

use crate::error::{LastGreenError, Result};
use std::path::Path;

/// Upper bound on how many ancestors are inspected while locating a repository.
pub const MAX_ANCESTOR_DEPTH: usize = 256;

/// Detects which backend, if any, owns `dir` itself (not its ancestors).
pub fn detect_vcs(dir: &Path) -> Option<VcsKind> {
    VcsKind::ALL
        .into_iter()
        .find(|kind| dir.join(kind.marker()).is_dir())
}

/// Discovers the repository owning `start_path`, walking up to the filesystem root.
pub fn discover_repository(start_path: &Path) -> Result<Repository> {
    let start = start_path.canonicalize().map_err(|e| {
        log::debug!("can't resolve {}: {}", start_path.display(), e);
        LastGreenError::RepositoryNotFound {
            path: start_path.to_path_buf(),
        }
    })?;

    for dir in start.ancestors().take(MAX_ANCESTOR_DEPTH) {
        log::debug!("looking for a repository in {}", dir.display());
        if let Some(kind) = detect_vcs(dir) {
            log::debug!("found {} repository at {}", kind, dir.display());
            return Ok(Repository::new(kind, dir.to_path_buf()));
        }
    }

    Err(LastGreenError::RepositoryNotFound {
        path: start_path.to_path_buf(),
    })
}
