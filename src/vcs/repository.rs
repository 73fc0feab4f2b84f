use crate::error::{LastGreenError, Result};
use crate::vcs::backend::VcsKind;
use crate::vcs::commands::{display_command, CommandError, CommandRunner, SystemRunner};
use crate::vcs::parser::parse_revisions;
use std::path::{Path, PathBuf};

/// A located repository: one backend bound to its root directory.
///
/// Every operation runs in `root` and mutates the same working tree, so callers
/// must not interleave operations from several processes.
#[derive(Debug, Clone)]
pub struct Repository<R = SystemRunner> {
    kind: VcsKind,
    root: PathBuf,
    runner: R,
}

impl Repository<SystemRunner> {
    pub fn new(kind: VcsKind, root: PathBuf) -> Self {
        Self::with_runner(kind, root, SystemRunner)
    }
}

impl<R: CommandRunner> Repository<R> {
    pub fn with_runner(kind: VcsKind, root: PathBuf, runner: R) -> Self {
        Self { kind, root, runner }
    }

    pub fn kind(&self) -> VcsKind {
        self.kind
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists the revision history, newest first.
    pub fn history(&self) -> Result<Vec<String>> {
        let args = owned(self.kind.log_args());
        let output = self
            .runner
            .run(&self.root, self.kind.program(), &args)
            .map_err(|source| LastGreenError::LogFailed {
                command: display_command(self.kind.program(), &args),
                source,
            })?;

        let revisions = parse_revisions(self.kind, &output);
        log::debug!("{} log yielded {} revisions", self.kind, revisions.len());
        Ok(revisions)
    }

    /// Brings the working tree to `commit`.
    pub fn checkout(&self, commit: &str) -> Result<()> {
        let mut args = owned(self.kind.checkout_args());
        args.push(commit.to_string());

        self.runner
            .run(&self.root, self.kind.program(), &args)
            .map_err(|source| {
                log::warn!("{} could not check out {}", self.kind, commit);
                LastGreenError::CheckoutFailed {
                    commit: commit.to_string(),
                    source,
                }
            })?;
        Ok(())
    }

    /// Runs the build command in the repository root.
    ///
    /// The raw [`CommandError`] is returned so callers can tell a failing build
    /// from one that could not run at all.
    pub fn build(
        &self,
        program: &str,
        args: &[String],
    ) -> std::result::Result<String, CommandError> {
        self.runner.run(&self.root, program, args)
    }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
