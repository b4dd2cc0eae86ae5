use crate::commands::{print_json, write_json_file, Context};
use crate::util::read_input;
use anyhow::Result;
use clap::Args;
use leadscan_core::parse_lead_lines;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct LeadsArgs {
    /// Input file, one lead per line; stdin when omitted or `-`
    pub input: Option<PathBuf>,
    /// Write the lead report as JSON to this file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn parse_leads(ctx: &Context<'_>, args: LeadsArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let report = parse_lead_lines(ctx.extractor, &text);
    debug!(total = report.total, parsed = report.parsed, "lead lines parsed");

    if let Some(path) = &args.out {
        write_json_file(path, &report)?;
        debug!(path = %path.display(), "lead report written");
    }

    if ctx.json {
        return print_json(&report);
    }

    for lead in &report.leads {
        println!("{}\t{}", lead.phone, lead.line);
    }
    println!("parsed {}/{} lines", report.parsed, report.total);
    Ok(())
}
