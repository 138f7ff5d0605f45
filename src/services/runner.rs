use crate::domain::models::Invocation;
use std::process::{Command, Stdio};

/// Outcome of one finished tool process. `code` is `None` when the process
/// was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    pub code: Option<i32>,
}

impl ToolExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait ToolRunner {
    /// Runs the invocation to completion. `Err` means the process could not
    /// be launched at all.
    fn run(&self, invocation: &Invocation) -> std::io::Result<ToolExit>;
}

/// Spawns real processes, blocking until each exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    /// Capture tool output into the log instead of inheriting stdio, so
    /// stdout stays a single JSON document.
    pub capture: bool,
}

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<ToolExit> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);

        if !self.capture {
            let status = cmd.status()?;
            return Ok(ToolExit {
                code: status.code(),
            });
        }

        let out = cmd.stdin(Stdio::null()).output()?;
        for line in String::from_utf8_lossy(&out.stdout).lines() {
            tracing::debug!(
                target: "packwright::tool",
                program = %invocation.program,
                "{}",
                line
            );
        }
        for line in String::from_utf8_lossy(&out.stderr).lines() {
            tracing::debug!(
                target: "packwright::tool",
                program = %invocation.program,
                stream = "stderr",
                "{}",
                line
            );
        }
        Ok(ToolExit {
            code: out.status.code(),
        })
    }
}
