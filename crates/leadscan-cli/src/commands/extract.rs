use crate::commands::{print_json, Context};
use crate::util::read_input;
use anyhow::Result;
use clap::Args;
use leadscan_core::collect_numbers;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input file; stdin when omitted or `-`
    pub input: Option<PathBuf>,
    /// Print only the deduplicated list of valid numbers
    #[arg(long)]
    pub numbers_only: bool,
}

pub fn extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;

    if args.numbers_only {
        let numbers = collect_numbers(ctx.extractor, &text);
        debug!(count = numbers.len(), "numbers collected");
        if ctx.json {
            return print_json(&numbers);
        }
        for number in numbers {
            println!("{}", number);
        }
        return Ok(());
    }

    let matches = ctx.extractor.extract(&text);
    debug!(
        count = matches.len(),
        normalized = matches.iter().filter(|m| m.normalized.is_some()).count(),
        "matches extracted"
    );

    if ctx.json {
        return print_json(&matches);
    }

    if matches.is_empty() {
        println!("no phone numbers found");
        return Ok(());
    }

    for item in matches {
        println!(
            "{}\t{}\t{}",
            item.normalized.as_deref().unwrap_or("-"),
            item.position,
            item.raw
        );
    }
    Ok(())
}
