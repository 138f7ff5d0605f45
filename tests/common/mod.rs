#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ICON_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 7, 7];

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
    pub bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create fake tool dir");

        let project = make_fixture_project(tmp.path());

        Self {
            _tmp: tmp,
            home,
            project,
            bin,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("packwright");
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env_remove("PACKWRIGHT_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, body: &str) {
        fs::write(self.project.join("packwright.toml"), body).expect("write config");
    }

    pub fn tool_log(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.bin.join(format!("{}.log", name)))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Writes an executable shell script that appends its arguments to
    /// `<bin>/<name>.log` and exits with the code of the first rule whose
    /// pattern appears in its argument list (0 otherwise).
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, rules: &[(&str, i32)]) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        let log = self.bin.join(format!("{}.log", name));
        let mut script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\ncase \"$*\" in\n",
            log.display()
        );
        for (pattern, code) in rules {
            script.push_str(&format!("  *\"{}\"*) exit {} ;;\n", pattern, code));
        }
        script.push_str("esac\nexit 0\n");
        fs::write(&path, script).expect("write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
        path
    }
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let project = base.join("project");
    fs::create_dir_all(project.join("static")).expect("create static");
    fs::create_dir_all(project.join("templates")).expect("create templates");
    fs::write(project.join("static/logo.png"), ICON_BYTES).expect("write icon");
    fs::write(project.join("templates/index.html"), "<html></html>\n").expect("write template");
    fs::write(project.join("app.py"), "print('sas')\n").expect("write entry point");
    fs::write(project.join("sas.db"), b"SQLite format 3\0").expect("write database");
    fs::write(
        project.join("installer.iss"),
        "[Setup]\nAppName=SAS\nOutputDir=installer\nOutputBaseFilename=SAS_Installer\n",
    )
    .expect("write installer script");
    project
}
