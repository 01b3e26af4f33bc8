//! Status command implementation

use colored::Colorize;
use serde_json::json;

use flagpatch_core::MarkerState;

use crate::context::PatchContext;
use crate::error::Result;

/// Print each flag's state in the resolved header.
pub fn run_status(ctx: &PatchContext, json: bool) -> Result<()> {
    let statuses = ctx.patcher()?.status(&ctx.header)?;

    if json {
        let output = json!({
            "path": ctx.header.as_str(),
            "markers": statuses,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Header Status".bold());
    println!();
    println!("{}:   {}", "Path".dimmed(), ctx.header.as_str());
    println!();

    for status in &statuses {
        let state = match status.state {
            MarkerState::Enabled => status.state.to_string().green(),
            MarkerState::Disabled => status.state.to_string().yellow(),
            MarkerState::Mixed => status.state.to_string().magenta(),
            MarkerState::Missing => status.state.to_string().red(),
        };
        println!("  {} {}", format!("{:<20}", status.name).cyan(), state);
    }

    Ok(())
}
