use crate::*;

pub fn handle_config_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Init { force } => {
            write_default_config(&cli.config, *force)?;
            print_one(cli.json, true, cli.config.to_string_lossy(), |p| {
                format!("wrote {}", p)
            })?;
        }
        ConfigCommands::Show => {
            let ws = open_workspace(&cli.config, cli.project_dir.as_deref())?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: serde_json::json!({
                            "project_dir": ws.root,
                            "config": ws.config,
                        })
                    })?
                );
            } else {
                println!("# project_dir = {}", ws.root.display());
                print!("{}", toml::to_string_pretty(&ws.config)?);
            }
        }
    }

    Ok(true)
}

pub fn handle_doctor_command(cli: &Cli, ws: &Workspace) -> anyhow::Result<bool> {
    let Commands::Doctor { target } = &cli.command else {
        return Ok(false);
    };

    let report = doctor(ws, *target);
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.overall == "ok",
                data: &report
            })?
        );
    } else {
        println!("doctor: {}", report.overall);
        for c in &report.checks {
            match &c.detail {
                Some(d) => println!("{}\t{}\t{}", c.name, c.status, d),
                None => println!("{}\t{}", c.name, c.status),
            }
        }
    }

    Ok(true)
}
