use crate::error::Error;
use std::process::Command;

/// Result of running an accepted command. A non-zero exit from the child is
/// not an error of this component; it becomes the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub signaled: bool,
}

pub trait CommandExecutor {
    fn run(&self, command: &str) -> Result<ExecutionOutcome, Error>;
}

/// Runs the command through `sh -c` with inherited stdio so interactive
/// tools behave normally. No timeout, no output capture.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn run(&self, command: &str) -> Result<ExecutionOutcome, Error> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(Error::Spawn)?;

        Ok(match status.code() {
            Some(exit_code) => ExecutionOutcome {
                exit_code,
                signaled: false,
            },
            // Killed by a signal; report failure without inventing the signal number
            None => ExecutionOutcome {
                exit_code: 1,
                signaled: true,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_exit_code_passes_through() {
        let outcome = ShellExecutor.run("exit 42").unwrap();
        assert_eq!(outcome.exit_code, 42);
        assert!(!outcome.signaled);
    }

    #[test]
    fn test_successful_command() {
        let outcome = ShellExecutor.run("true").unwrap();
        assert_eq!(outcome.exit_code, 0);
        assert!(!outcome.signaled);
    }

    #[test]
    fn test_nonzero_child_is_not_an_error() {
        assert!(ShellExecutor.run("false").is_ok());
    }
}
