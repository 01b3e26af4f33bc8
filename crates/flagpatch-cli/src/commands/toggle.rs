//! Enable and disable commands

use colored::Colorize;

use flagpatch_core::{Direction, PatchReport};

use crate::context::PatchContext;
use crate::error::Result;

/// Run `enable` or `disable` against the resolved header.
pub fn run_toggle(ctx: &PatchContext, direction: Direction, dry_run: bool, json: bool) -> Result<()> {
    let report = ctx
        .patcher()?
        .direction(direction)
        .dry_run(dry_run)
        .apply(&ctx.header)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if dry_run {
        print_dry_run(&report);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &PatchReport) {
    let count = report.plan.changes.len();
    if report.written {
        let verb = match report.plan.direction {
            Direction::Enable => "Enabled",
            Direction::Disable => "Disabled",
        };
        println!(
            "{} {} flag line{} in {}",
            verb.green().bold(),
            count,
            if count == 1 { "" } else { "s" },
            report.path.yellow()
        );
    } else {
        println!(
            "{} {} already {}d",
            "OK".green().bold(),
            report.path.yellow(),
            report.plan.direction
        );
    }
}

fn print_dry_run(report: &PatchReport) {
    if report.plan.is_noop() {
        println!(
            "{} No changes needed. {} is already {}d.",
            "OK".green().bold(),
            report.path.yellow(),
            report.plan.direction
        );
        return;
    }

    for line in report.plan.diff(&report.path).lines() {
        let styled = if line.starts_with("+++") || line.starts_with("---") {
            line.bold()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with("@@") {
            line.cyan()
        } else {
            line.normal()
        };
        println!("{}", styled);
    }

    println!();
    println!(
        "Run {} to apply these changes.",
        format!("flagpatch {}", report.plan.direction).cyan()
    );
}
