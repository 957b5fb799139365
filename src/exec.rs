//!
//! Synchronous subprocess execution with stdin injection. One call spawns the
//! tool, writes the source text to its stdin, closes the stream, and reaps
//! the child before returning. No timeout is applied here; callers that need
//! one must wrap the invocation.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn `{bin}`: {source}")]
    Spawn {
        bin: String,
        source: std::io::Error,
    },
    #[error("failed to write to stdin of `{bin}`: {source}")]
    Stdin {
        bin: String,
        source: std::io::Error,
    },
    #[error("failed to wait for `{bin}`: {source}")]
    Wait {
        bin: String,
        source: std::io::Error,
    },
    #[error("`{bin}` exited with status {code}: {stderr}")]
    Failed {
        bin: String,
        code: i32,
        stderr: String,
    },
}

/// Captured result of one tool invocation.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// Run a command, feeding `input` to its stdin and capturing stdout, stderr
/// and the exit status.
pub fn run_with_stdin(cmd: &mut Command, input: &[u8]) -> Result<ExecOutput, ExecError> {
    let bin = cmd.get_program().to_string_lossy().into_owned();

    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExecError::Spawn {
            bin: bin.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // The tool may exit before draining stdin.
        if let Err(source) = stdin.write_all(input)
            && source.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(ExecError::Stdin {
                bin: bin.clone(),
                source,
            });
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|source| ExecError::Wait {
            bin: bin.clone(),
            source,
        })?;

    Ok(ExecOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code().unwrap_or(-1),
    })
}

/// Exit-status policy for external checkers: 0 is clean, 1 with an empty
/// stderr is the "ran fine, found issues" convention, anything else is a
/// failure.
pub fn check_status(bin: &str, output: ExecOutput) -> Result<ExecOutput, ExecError> {
    match output.code {
        0 => Ok(output),
        1 if output.stderr.is_empty() => Ok(output),
        code => Err(ExecError::Failed {
            bin: bin.to_string(),
            code,
            stderr: output.stderr,
        }),
    }
}

/// Prepend a site-packages contribution to the inherited PYTHONPATH value.
/// `None` means the variable should be left untouched.
pub fn compose_python_path(contribution: Option<&str>, inherited: Option<&str>) -> Option<String> {
    contribution.map(|contribution| match inherited {
        Some(inherited) if !inherited.is_empty() => format!("{contribution}:{inherited}"),
        _ => contribution.to_string(),
    })
}
