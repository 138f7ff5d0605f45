use crate::*;

fn build_pipeline(target: Target, ws: &Workspace) -> anyhow::Result<Pipeline> {
    let pipeline = match target {
        Target::Android => android_pipeline(ws)?,
        Target::Windows => installer_pipeline(ws)?,
        Target::Macos => bundle_pipeline(ws)?,
    };
    Ok(pipeline)
}

fn run_target(cli: &Cli, target: Target, ws: &Workspace) -> anyhow::Result<()> {
    let pipeline = build_pipeline(target, ws)?;
    let runner = ProcessRunner { capture: cli.json };
    let report = execute(&pipeline, &runner);
    print_report(cli.json, &report)?;
    if !report.ok {
        std::process::exit(1);
    }
    tracing::info!(pipeline = target.as_str(), "pipeline finished");
    Ok(())
}

pub fn handle_runtime_commands(cli: &Cli, ws: &Workspace) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Android => run_target(cli, Target::Android, ws)?,
        Commands::Windows => run_target(cli, Target::Windows, ws)?,
        Commands::Macos => run_target(cli, Target::Macos, ws)?,
        Commands::Plan { target } => {
            let pipeline = build_pipeline(*target, ws)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &pipeline
                    })?
                );
            } else {
                println!("plan for {}", pipeline.target.as_str());
                for stage in &pipeline.stages {
                    println!("{}\t{}", stage.tag(), stage.describe());
                }
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}
