use crate::domain::models::{JsonOut, PipelineReport};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Text mode prints the report's lines and nothing else.
pub fn print_report(json: bool, report: &PipelineReport) -> anyhow::Result<()> {
    print_one(json, report.ok, report, |r| r.lines.join("\n"))
}
