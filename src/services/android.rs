use crate::cli::Target;
use crate::domain::constants::{
    BUILD_FAILED, CREATE_FAILED, DENSITY_BUCKETS, ICONS_FAILED, LAUNCHER_ICON_NAME,
    PACKAGE_FAILED, TAG_BUILD, TAG_CREATE, TAG_ICONS, TAG_PACKAGE,
};
use crate::domain::models::{Pipeline, Stage};
use crate::services::config::{tool_invocation, ConfigError, Workspace};

fn tool_stage(
    ws: &Workspace,
    tag: &str,
    args: &[&str],
    failure: &str,
) -> Result<Stage, ConfigError> {
    Ok(Stage::Tool {
        tag: tag.to_string(),
        invocation: tool_invocation(
            "android.tool",
            &ws.config.android.tool,
            args.iter().copied(),
            &ws.root,
        )?,
        failure_message: failure.to_string(),
    })
}

/// create (non-interactive) → launcher icons → build → package → APK path.
pub fn android_pipeline(ws: &Workspace) -> Result<Pipeline, ConfigError> {
    let cfg = &ws.config.android;
    let apk = ws.resolve(&cfg.apk);
    let stages = vec![
        tool_stage(
            ws,
            TAG_CREATE,
            &["create", "android", "--no-input"],
            CREATE_FAILED,
        )?,
        Stage::Icons {
            tag: TAG_ICONS.to_string(),
            source: ws.resolve(&cfg.icon),
            res_dir: ws.resolve(&cfg.res_dir),
            buckets: DENSITY_BUCKETS.iter().map(|b| b.to_string()).collect(),
            file_name: LAUNCHER_ICON_NAME.to_string(),
            failure_message: ICONS_FAILED.to_string(),
        },
        tool_stage(ws, TAG_BUILD, &["build", "android"], BUILD_FAILED)?,
        tool_stage(ws, TAG_PACKAGE, &["package", "android"], PACKAGE_FAILED)?,
    ];

    Ok(Pipeline {
        target: Target::Android,
        project_dir: ws.root.clone(),
        stages,
        success_lines: vec![format!("APK: {}", apk.display())],
        artifact: Some(apk.to_string_lossy().to_string()),
    })
}
