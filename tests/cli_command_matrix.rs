use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("packwright");
    cmd.env("HOME", home.path())
        .current_dir(home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    // top-level
    run_help(&home, &[]);

    // pipelines
    run_help(&home, &["android"]);
    run_help(&home, &["windows"]);
    run_help(&home, &["macos"]);
    run_help(&home, &["plan"]);

    // admin
    run_help(&home, &["doctor"]);
    run_help(&home, &["config"]);
    run_help(&home, &["config", "show"]);
    run_help(&home, &["config", "init"]);
}
