use crate::probe::BuildCommand;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lastgreen",
    version,
    about = "Find the last commit/revision that still builds",
    long_about = "Walks the history of the git, Mercurial or Bazaar repository containing the \
                  current directory, checking out revisions and running BUILD_COMMAND until it \
                  finds the newest revision that passes below the newest one that fails.\n\n\
                  Exit codes: 2 usage, 3 no repository, 4 log failure, 5 checkout or build \
                  could not run, 6 no failing revision, 7 no passing revision."
)]
pub struct Args {
    /// Build command followed by its arguments; it must exit zero when a revision is good
    #[arg(
        value_name = "BUILD_COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,

    /// Directory to start looking for a repository from (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "DIR", env = "LASTGREEN_REPO")]
    pub repo_path: Option<PathBuf>,

    /// Print the result and probe trace as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Args {
    /// Splits the trailing command line into program and arguments.
    pub fn build(&self) -> Option<BuildCommand> {
        let (program, args) = self.command.split_first()?;
        Some(BuildCommand::new(program.clone(), args.to_vec()))
    }
}
