use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Failure of an external command, split by whether the process actually ran.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("`{command}` exited with {status}\n{stderr}")]
    Exited {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{command}` could not be run: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl CommandError {
    /// True when the process ran to completion and reported a non-zero exit.
    pub fn is_exit_status(&self) -> bool {
        matches!(self, CommandError::Exited { .. })
    }
}

/// Runs a program in a working directory and captures its standard output.
pub trait CommandRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<String, CommandError>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<String, CommandError> {
        let command = display_command(program, args);
        log::debug!("running `{}` in {}", command, dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| CommandError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CommandError::Exited {
                command,
                status: output.status,
                stderr: stderr.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<String, CommandError> {
        (**self).run(dir, program, args)
    }
}

pub fn display_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
