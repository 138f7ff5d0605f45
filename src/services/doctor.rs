use crate::cli::Target;
use crate::domain::models::{CheckItem, DoctorReport};
use crate::services::config::Workspace;
use std::path::Path;

fn tool_check(name: &str, command: &[String], ws: &Workspace) -> CheckItem {
    let Some(program) = command.first().filter(|p| !p.trim().is_empty()) else {
        return CheckItem {
            name: name.to_string(),
            status: "not_configured".to_string(),
            detail: None,
        };
    };
    // Programs given as a path are checked on disk, bare names on PATH.
    let found = if program.contains('/') || program.contains('\\') {
        let p = ws.resolve(Path::new(program));
        p.is_file().then(|| p.to_string_lossy().to_string())
    } else {
        which::which(program)
            .ok()
            .map(|p| p.to_string_lossy().to_string())
    };
    CheckItem {
        name: name.to_string(),
        status: if found.is_some() { "ok" } else { "missing" }.to_string(),
        detail: Some(found.unwrap_or_else(|| program.clone())),
    }
}

fn path_check(name: &str, path: &Path, ws: &Workspace) -> CheckItem {
    let p = ws.resolve(path);
    CheckItem {
        name: name.to_string(),
        status: if p.exists() { "ok" } else { "missing" }.to_string(),
        detail: Some(p.to_string_lossy().to_string()),
    }
}

fn target_checks(target: Target, ws: &Workspace) -> Vec<CheckItem> {
    let cfg = &ws.config;
    match target {
        Target::Android => vec![
            tool_check("android.tool", &cfg.android.tool, ws),
            path_check("android.icon", &cfg.android.icon, ws),
        ],
        Target::Windows => vec![
            tool_check("windows.compiler", &cfg.windows.compiler, ws),
            path_check("windows.script", &cfg.windows.script, ws),
        ],
        Target::Macos => vec![
            tool_check("macos.installer", &cfg.macos.installer, ws),
            tool_check("macos.bundler", &cfg.macos.bundler, ws),
            path_check("macos.entry", Path::new(&cfg.macos.entry), ws),
            path_check("macos.templates", Path::new(&cfg.macos.templates), ws),
            path_check("macos.static", Path::new(&cfg.macos.static_dir), ws),
            path_check("macos.database", Path::new(&cfg.macos.database), ws),
        ],
    }
}

pub fn doctor(ws: &Workspace, target: Option<Target>) -> DoctorReport {
    let targets: Vec<Target> = match target {
        Some(t) => vec![t],
        None => Target::ALL.to_vec(),
    };
    let mut checks = vec![CheckItem {
        name: "project_dir".to_string(),
        status: if ws.root.is_dir() { "ok" } else { "missing" }.to_string(),
        detail: None,
    }];
    for t in targets {
        checks.extend(target_checks(t, ws));
    }

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    DoctorReport {
        overall,
        project_dir: ws.root.to_string_lossy().to_string(),
        checks,
    }
}
