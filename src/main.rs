use clap::Parser;

mod cli;
mod commands;
mod domain;
mod logging;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use logging::init_logging;
pub use services::android::android_pipeline;
pub use services::bundle::bundle_pipeline;
pub use services::config::{open_workspace, write_default_config, Workspace};
pub use services::doctor::doctor;
pub use services::installer::installer_pipeline;
pub use services::output::{print_one, print_report};
pub use services::pipeline::execute;
pub use services::runner::ProcessRunner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if handle_config_commands(&cli)? {
        return Ok(());
    }

    let ws = open_workspace(&cli.config, cli.project_dir.as_deref())?;

    if handle_doctor_command(&cli, &ws)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &ws)?;

    Ok(())
}
