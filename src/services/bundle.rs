use crate::cli::Target;
use crate::domain::constants::{
    BUNDLE_FAILED, DEPENDENCY_INSTALL_FAILED, TAG_BUNDLE, TAG_DEPENDENCIES,
};
use crate::domain::models::{Pipeline, Stage};
use crate::services::config::{tool_invocation, ConfigError, MacosConfig, Workspace};
use std::path::Path;

/// Directory name inside the bundle: the last component of the source.
fn bundle_dest(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}

/// `--add-data` mappings in bundle order: templates, static, database.
/// Sources are passed through as configured; nothing checks they exist.
pub fn data_mappings(cfg: &MacosConfig) -> [String; 3] {
    [
        format!("{}:{}", cfg.templates, bundle_dest(&cfg.templates)),
        format!("{}:{}", cfg.static_dir, bundle_dest(&cfg.static_dir)),
        format!("{}:.", cfg.database),
    ]
}

fn bundler_args(cfg: &MacosConfig) -> Vec<String> {
    let mut args = vec![cfg.entry.clone(), "--name".to_string(), cfg.name.clone()];
    for mapping in data_mappings(cfg) {
        args.push("--add-data".to_string());
        args.push(mapping);
    }
    args.push("--windowed".to_string());
    args.push("--clean".to_string());
    args
}

pub fn bundle_pipeline(ws: &Workspace) -> Result<Pipeline, ConfigError> {
    let cfg = &ws.config.macos;
    let install = std::iter::once("install".to_string()).chain(cfg.dependencies.iter().cloned());
    let bundle = ws.resolve(&cfg.bundle);

    let stages = vec![
        Stage::Tool {
            tag: TAG_DEPENDENCIES.to_string(),
            invocation: tool_invocation("macos.installer", &cfg.installer, install, &ws.root)?,
            failure_message: DEPENDENCY_INSTALL_FAILED.to_string(),
        },
        Stage::Tool {
            tag: TAG_BUNDLE.to_string(),
            invocation: tool_invocation(
                "macos.bundler",
                &cfg.bundler,
                bundler_args(cfg),
                &ws.root,
            )?,
            failure_message: BUNDLE_FAILED.to_string(),
        },
    ];

    Ok(Pipeline {
        target: Target::Macos,
        project_dir: ws.root.clone(),
        stages,
        success_lines: vec![format!("Bundle: {}", bundle.display())],
        artifact: Some(bundle.to_string_lossy().to_string()),
    })
}
