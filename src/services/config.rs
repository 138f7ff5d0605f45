use crate::domain::models::Invocation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("`{0}` must name a program")]
    EmptyCommand(&'static str),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub android: AndroidConfig,
    pub windows: WindowsConfig,
    pub macos: MacosConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AndroidConfig {
    /// Packaging tool command; `create|build|package android` is appended.
    pub tool: Vec<String>,
    pub icon: PathBuf,
    /// Android `res/` directory of the generated project.
    pub res_dir: PathBuf,
    pub apk: PathBuf,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            tool: vec!["briefcase".to_string()],
            icon: PathBuf::from("static/logo.png"),
            res_dir: PathBuf::from("build/sas/android/gradle/app/src/main/res"),
            apk: PathBuf::from(
                "build/sas/android/gradle/app/build/outputs/apk/debug/app-debug.apk",
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowsConfig {
    pub compiler: Vec<String>,
    pub script: PathBuf,
    pub quiet_flag: String,
    /// Printed verbatim on success.
    pub output: String,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            compiler: vec!["ISCC".to_string()],
            script: PathBuf::from("installer.iss"),
            quiet_flag: "/Qp".to_string(),
            output: r"installer\SAS_Installer.exe".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MacosConfig {
    pub installer: Vec<String>,
    pub dependencies: Vec<String>,
    pub bundler: Vec<String>,
    pub entry: String,
    pub name: String,
    pub templates: String,
    #[serde(rename = "static")]
    pub static_dir: String,
    pub database: String,
    pub bundle: PathBuf,
}

impl Default for MacosConfig {
    fn default() -> Self {
        Self {
            installer: vec!["pip3".to_string()],
            dependencies: vec![
                "pyinstaller".to_string(),
                "flask".to_string(),
                "pillow".to_string(),
            ],
            bundler: vec!["pyinstaller".to_string()],
            entry: "app.py".to_string(),
            name: "SAS".to_string(),
            templates: "templates".to_string(),
            static_dir: "static".to_string(),
            database: "sas.db".to_string(),
            bundle: PathBuf::from("dist/SAS.app"),
        }
    }
}

/// Effective configuration plus the directory every path resolves against.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub config: Config,
    pub root: PathBuf,
}

impl Workspace {
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file absent, using defaults");
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `--project-dir` wins; otherwise the directory holding the config file.
pub fn project_root(config_path: &Path, project_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let raw = match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => return Ok(std::env::current_dir()?),
        },
    };
    if raw.is_absolute() {
        return Ok(raw);
    }
    Ok(std::env::current_dir()?.join(raw))
}

pub fn open_workspace(
    config_path: &Path,
    project_dir: Option<&Path>,
) -> anyhow::Result<Workspace> {
    let config = load_config(config_path)?;
    let root = project_root(config_path, project_dir)?;
    tracing::info!(root = %root.display(), "workspace opened");
    Ok(Workspace { config, root })
}

pub fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, toml::to_string_pretty(&Config::default())?)?;
    Ok(())
}

/// Builds an invocation from a configured command (program + leading args)
/// followed by pipeline-specific arguments.
pub fn tool_invocation<I, S>(
    field: &'static str,
    command: &[String],
    extra: I,
    cwd: &Path,
) -> Result<Invocation, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (program, lead) = command
        .split_first()
        .filter(|(p, _)| !p.trim().is_empty())
        .ok_or(ConfigError::EmptyCommand(field))?;
    let mut args = lead.to_vec();
    args.extend(extra.into_iter().map(Into::into));
    Ok(Invocation {
        program: program.clone(),
        args,
        cwd: cwd.to_path_buf(),
    })
}
