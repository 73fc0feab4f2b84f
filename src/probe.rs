use crate::bisect::{bisect, Bisection, Probe, Verdict};
use crate::error::{LastGreenError, Result};
use crate::vcs::commands::{display_command, CommandRunner};
use crate::vcs::Repository;

/// The command that decides whether a checked out revision is good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn display(&self) -> String {
        display_command(&self.program, &self.args)
    }
}

/// Checks out a revision and runs the build against it.
pub struct BuildProbe<'r, R> {
    repo: &'r Repository<R>,
    build: BuildCommand,
}

impl<'r, R: CommandRunner> BuildProbe<'r, R> {
    pub fn new(repo: &'r Repository<R>, build: BuildCommand) -> Self {
        Self { repo, build }
    }
}

impl<R: CommandRunner> Probe for BuildProbe<'_, R> {
    fn test(&mut self, commit: &str) -> Result<Verdict> {
        self.repo.checkout(commit)?;

        match self.repo.build(&self.build.program, &self.build.args) {
            Ok(_) => Ok(Verdict::Pass),
            Err(e) if e.is_exit_status() => {
                log::debug!("build of {} failed: {}", commit, e);
                Ok(Verdict::Fail)
            }
            Err(source) => {
                log::warn!("build of {} could not run", commit);
                Err(LastGreenError::BuildFailed {
                    command: self.build.display(),
                    source,
                })
            }
        }
    }
}

/// Reads the repository history and searches it for the last passing revision.
pub fn find_last_passing<R: CommandRunner>(
    repo: &Repository<R>,
    build: BuildCommand,
) -> Result<Bisection> {
    let history = repo.history()?;
    log::info!(
        "searching {} {} revisions with `{}`",
        history.len(),
        repo.kind(),
        build.display()
    );
    bisect(&history, BuildProbe::new(repo, build))
}
