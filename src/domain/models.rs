use crate::cli::Target;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One external tool call: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| {
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("\"{}\"", part)
                } else {
                    part.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stage {
    Tool {
        tag: String,
        invocation: Invocation,
        failure_message: String,
    },
    Icons {
        tag: String,
        source: PathBuf,
        res_dir: PathBuf,
        buckets: Vec<String>,
        file_name: String,
        failure_message: String,
    },
}

impl Stage {
    pub fn tag(&self) -> &str {
        match self {
            Stage::Tool { tag, .. } | Stage::Icons { tag, .. } => tag,
        }
    }

    pub fn failure_message(&self) -> &str {
        match self {
            Stage::Tool {
                failure_message, ..
            }
            | Stage::Icons {
                failure_message, ..
            } => failure_message,
        }
    }

    /// Single-line human rendering used by `plan`.
    pub fn describe(&self) -> String {
        match self {
            Stage::Tool { invocation, .. } => invocation.command_line(),
            Stage::Icons {
                source,
                res_dir,
                buckets,
                file_name,
                ..
            } => format!(
                "copy {} -> {}/{{{}}}/{}",
                source.display(),
                res_dir.display(),
                buckets.join(","),
                file_name
            ),
        }
    }
}

/// Ordered stages for one target plus what to print once they all pass.
#[derive(Debug, Clone, Serialize)]
pub struct Pipeline {
    pub target: Target,
    pub project_dir: PathBuf,
    pub stages: Vec<Stage>,
    pub success_lines: Vec<String>,
    pub artifact: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IconCopy {
    pub bucket: String,
    pub path: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub tag: String,
    pub status: String,
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<IconCopy>,
}

impl StageReport {
    pub fn ok(tag: &str, exit_code: Option<i32>) -> Self {
        Self {
            tag: tag.to_string(),
            status: "ok".to_string(),
            exit_code,
            error: None,
            icons: vec![],
        }
    }

    pub fn failed(tag: &str, exit_code: Option<i32>, error: String) -> Self {
        Self {
            tag: tag.to_string(),
            status: "failed".to_string(),
            exit_code,
            error: Some(error),
            icons: vec![],
        }
    }

    pub fn skipped(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            status: "skipped".to_string(),
            exit_code: None,
            error: None,
            icons: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub target: Target,
    pub ok: bool,
    pub stages: Vec<StageReport>,
    pub artifact: Option<String>,
    /// Exactly the lines text mode prints.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub project_dir: String,
    pub checks: Vec<CheckItem>,
}
