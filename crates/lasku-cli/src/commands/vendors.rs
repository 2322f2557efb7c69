//! Vendors command - list the rule registry.

use clap::Args;

use lasku_core::extract::vendors;
use lasku_core::ApproverMode;

/// Arguments for the vendors command.
#[derive(Args)]
pub struct VendorsArgs {
    /// Only vendors routed through a manager approver
    #[arg(long)]
    manager_only: bool,
}

pub fn run(args: VendorsArgs) -> anyhow::Result<()> {
    for rule in vendors::all() {
        if args.manager_only && rule.approver_mode != ApproverMode::Manager {
            continue;
        }
        let routing = match rule.approver_mode {
            ApproverMode::Manager => "manager",
            ApproverMode::None => "-",
        };
        println!("{:<9} {:<10} {}", rule.vendor_id, routing, rule.display_name);
    }
    Ok(())
}
