use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use leadscan_config::AppConfig;
use leadscan_core::NumberingPlan;

#[derive(Debug, Args)]
pub struct RegionsArgs {
    /// Only show regions using this calling code
    #[arg(long)]
    pub calling_code: Option<String>,
}

pub fn list_regions(config: &AppConfig, json: bool, args: RegionsArgs) -> Result<()> {
    let wanted = args
        .calling_code
        .as_deref()
        .map(|code| code.trim().trim_start_matches('+'));
    let plans: Vec<&NumberingPlan> = config
        .plans
        .iter()
        .filter(|plan| wanted.is_none_or(|code| plan.calling_code() == code))
        .collect();

    if json {
        return print_json(&plans);
    }

    if plans.is_empty() {
        println!("no regions");
        return Ok(());
    }

    for plan in plans {
        let lengths: Vec<String> = plan.lengths().iter().map(|len| len.to_string()).collect();
        let marker = if plan.region() == &config.default_region {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}\t+{}\ttrunk {}\tlengths {}{}",
            plan.region(),
            plan.calling_code(),
            plan.trunk_prefix().unwrap_or("-"),
            lengths.join(","),
            marker
        );
    }
    Ok(())
}
