use crate::cli::Target;
use crate::domain::constants::{INSTALLER_FAILED, INSTALLER_SUCCESS, TAG_INSTALLER};
use crate::domain::models::{Pipeline, Stage};
use crate::services::config::{tool_invocation, ConfigError, Workspace};

pub fn installer_pipeline(ws: &Workspace) -> Result<Pipeline, ConfigError> {
    let cfg = &ws.config.windows;
    let args = [
        cfg.quiet_flag.clone(),
        cfg.script.to_string_lossy().to_string(),
    ];
    let stage = Stage::Tool {
        tag: TAG_INSTALLER.to_string(),
        invocation: tool_invocation("windows.compiler", &cfg.compiler, args, &ws.root)?,
        failure_message: INSTALLER_FAILED.to_string(),
    };

    Ok(Pipeline {
        target: Target::Windows,
        project_dir: ws.root.clone(),
        stages: vec![stage],
        success_lines: vec![
            INSTALLER_SUCCESS.to_string(),
            format!("Installer location: {}", cfg.output),
        ],
        artifact: Some(cfg.output.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config::Config;
    use crate::services::pipeline::execute;
    use crate::services::pipeline::testing::FakeRunner;
    use std::path::PathBuf;

    fn workspace() -> Workspace {
        Workspace {
            config: Config::default(),
            root: PathBuf::from("/work"),
        }
    }

    #[test]
    fn compiles_with_quiet_progress_flag() {
        let runner = FakeRunner::default();
        let report = execute(&installer_pipeline(&workspace()).expect("pipeline"), &runner);
        assert_eq!(runner.command_lines(), vec!["ISCC /Qp installer.iss"]);
        assert_eq!(
            report.lines,
            vec![
                "Installer created successfully!".to_string(),
                r"Installer location: installer\SAS_Installer.exe".to_string(),
            ]
        );
    }

    #[test]
    fn any_nonzero_exit_prints_only_the_generic_message() {
        for code in [1, 2, 255] {
            let runner = FakeRunner::failing("ISCC", Some(code));
            let report = execute(&installer_pipeline(&workspace()).expect("pipeline"), &runner);
            assert!(!report.ok);
            assert_eq!(report.lines, vec![INSTALLER_FAILED]);
        }
    }

    #[test]
    fn compiler_path_with_spaces_is_one_program() {
        let mut ws = workspace();
        ws.config.windows.compiler =
            vec![r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe".to_string()];
        let pipeline = installer_pipeline(&ws).expect("pipeline");
        let Stage::Tool { invocation, .. } = &pipeline.stages[0] else {
            panic!("expected tool stage");
        };
        assert_eq!(invocation.program, r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe");
        assert_eq!(invocation.args, vec!["/Qp", "installer.iss"]);
    }
}
