use crate::domain::models::{Invocation, Pipeline, PipelineReport, Stage, StageReport};
use crate::services::icons::install_launcher_icons;
use crate::services::runner::{ToolExit, ToolRunner};

/// Every variant means the same thing to the pipeline: the step did not
/// succeed and nothing after it runs. The variants keep the cause for logs
/// and `--json` reports.
#[derive(thiserror::Error, Debug)]
pub enum PackError {
    #[error("{tag}: `{program}` exited with status {code}")]
    ToolExit {
        tag: String,
        program: String,
        code: i32,
    },
    #[error("{tag}: `{program}` terminated without an exit status")]
    ToolKilled { tag: String, program: String },
    #[error("{tag}: could not launch `{program}`: {source}")]
    Launch {
        tag: String,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tag}: icon copy failed: {source}")]
    Icons {
        tag: String,
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PackError::ToolExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Runs one tool and turns anything but exit status 0 into a `PackError`.
pub fn run_tool(
    tag: &str,
    invocation: &Invocation,
    runner: &dyn ToolRunner,
) -> Result<ToolExit, PackError> {
    tracing::info!(stage = tag, "running {}", invocation.program);
    tracing::debug!(
        stage = tag,
        cwd = %invocation.cwd.display(),
        "{}",
        invocation.command_line()
    );
    let exit = runner.run(invocation).map_err(|source| PackError::Launch {
        tag: tag.to_string(),
        program: invocation.program.clone(),
        source,
    })?;
    match exit.code {
        _ if exit.success() => Ok(exit),
        Some(code) => Err(PackError::ToolExit {
            tag: tag.to_string(),
            program: invocation.program.clone(),
            code,
        }),
        None => Err(PackError::ToolKilled {
            tag: tag.to_string(),
            program: invocation.program.clone(),
        }),
    }
}

fn run_stage(stage: &Stage, runner: &dyn ToolRunner) -> Result<StageReport, PackError> {
    match stage {
        Stage::Tool {
            tag, invocation, ..
        } => {
            let exit = run_tool(tag, invocation, runner)?;
            Ok(StageReport::ok(tag, exit.code))
        }
        Stage::Icons {
            tag,
            source,
            res_dir,
            buckets,
            file_name,
            ..
        } => {
            tracing::info!(stage = %tag, "installing launcher icons");
            let icons = install_launcher_icons(source, res_dir, buckets, file_name).map_err(
                |source| PackError::Icons {
                    tag: tag.clone(),
                    source,
                },
            )?;
            let mut report = StageReport::ok(tag, None);
            report.icons = icons;
            Ok(report)
        }
    }
}

/// Runs stages in order and stops at the first failure. Stages after the
/// failure are reported as skipped; nothing already produced is removed.
pub fn execute(pipeline: &Pipeline, runner: &dyn ToolRunner) -> PipelineReport {
    let mut stages = Vec::with_capacity(pipeline.stages.len());
    let mut failure: Option<String> = None;

    for stage in &pipeline.stages {
        if failure.is_some() {
            stages.push(StageReport::skipped(stage.tag()));
            continue;
        }
        match run_stage(stage, runner) {
            Ok(report) => stages.push(report),
            Err(err) => {
                tracing::warn!(stage = stage.tag(), "{}", err);
                stages.push(StageReport::failed(
                    stage.tag(),
                    err.exit_code(),
                    err.to_string(),
                ));
                failure = Some(stage.failure_message().to_string());
            }
        }
    }

    let ok = failure.is_none();
    let lines = match failure {
        None => pipeline.success_lines.clone(),
        Some(message) => vec![message],
    };
    PipelineReport {
        target: pipeline.target,
        ok,
        stages,
        artifact: if ok { pipeline.artifact.clone() } else { None },
        lines,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeRunner;
    use super::*;
    use crate::cli::Target;
    use std::path::PathBuf;

    fn tool(tag: &str, arg: &str) -> Stage {
        Stage::Tool {
            tag: tag.to_string(),
            invocation: Invocation {
                program: "tool".to_string(),
                args: vec![arg.to_string()],
                cwd: PathBuf::from("."),
            },
            failure_message: format!("{} FAILED", tag),
        }
    }

    fn pipeline(stages: Vec<Stage>) -> Pipeline {
        Pipeline {
            target: Target::Android,
            project_dir: PathBuf::from("."),
            stages,
            success_lines: vec!["all done".to_string()],
            artifact: Some("out.bin".to_string()),
        }
    }

    #[test]
    fn all_stages_pass() {
        let runner = FakeRunner::default();
        let report = execute(&pipeline(vec![tool("A", "a"), tool("B", "b")]), &runner);
        assert!(report.ok);
        assert_eq!(report.lines, vec!["all done"]);
        assert_eq!(report.artifact.as_deref(), Some("out.bin"));
        assert_eq!(runner.command_lines(), vec!["tool a", "tool b"]);
    }

    #[test]
    fn first_failure_halts_and_reports_its_message() {
        let runner = FakeRunner::failing("tool b", Some(2));
        let report = execute(
            &pipeline(vec![tool("A", "a"), tool("B", "b"), tool("C", "c")]),
            &runner,
        );
        assert!(!report.ok);
        assert_eq!(report.lines, vec!["B FAILED"]);
        assert_eq!(report.artifact, None);
        assert_eq!(runner.command_lines(), vec!["tool a", "tool b"]);
        let statuses: Vec<_> = report.stages.iter().map(|s| s.status.as_str()).collect();
        assert_eq!(statuses, vec!["ok", "failed", "skipped"]);
        assert_eq!(report.stages[1].exit_code, Some(2));
    }

    #[test]
    fn signal_death_counts_as_failure() {
        let runner = FakeRunner::failing("tool a", None);
        let report = execute(&pipeline(vec![tool("A", "a")]), &runner);
        assert!(!report.ok);
        assert_eq!(report.stages[0].exit_code, None);
        assert!(report.stages[0]
            .error
            .as_deref()
            .unwrap_or_default()
            .contains("without an exit status"));
    }

    #[test]
    fn launch_failure_counts_as_failure() {
        let runner = FakeRunner {
            unlaunchable: vec!["tool".to_string()],
            ..FakeRunner::default()
        };
        let err = run_tool(
            "A",
            &Invocation {
                program: "tool".to_string(),
                args: vec![],
                cwd: PathBuf::from("."),
            },
            &runner,
        )
        .expect_err("launch");
        assert!(matches!(err, PackError::Launch { .. }));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn icon_failure_stops_later_tools() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let icons = Stage::Icons {
            tag: "ICONS".to_string(),
            source: tmp.path().join("missing.png"),
            res_dir: tmp.path().join("res"),
            buckets: vec!["mipmap-mdpi".to_string()],
            file_name: "ic_launcher.png".to_string(),
            failure_message: "ICONS FAILED".to_string(),
        };
        let runner = FakeRunner::default();
        let report = execute(&pipeline(vec![tool("A", "a"), icons, tool("B", "b")]), &runner);
        assert_eq!(report.lines, vec!["ICONS FAILED"]);
        assert_eq!(runner.command_lines(), vec!["tool a"]);
    }
}
