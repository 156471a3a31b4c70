//! Approval console executable
//!
//! Each subcommand opens one of the four views: dashboard, create,
//! approvals (plus approve/reject) and history.

use anyhow::Context;
use chrono::Utc;
use clap::{Arg, Command};
use hitl_core::views::{ApprovalsView, Dashboard, HistoryView, ReviewAction, ReviewDialog, StatusFilter, WorkflowForm};
use hitl_core::{HitlConfig, HttpBackend, ResourceStore};
use hitl_types::{RiskLevel, WorkflowType};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with INFO as default if RUST_LOG not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("hitl-console")
        .version("1.0.0")
        .about("Human-in-the-loop workflow approval console")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("hitl.json"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("dashboard").about("Show workflow counts and quick actions"))
        .subcommand(
            Command::new("create")
                .about("Create a new workflow")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .value_name("NAME")
                        .required(true)
                        .help("Workflow name"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .value_name("TEXT")
                        .required(true)
                        .help("What this workflow does"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("TYPE")
                        .default_value("other")
                        .help("deployment, email_campaign, financial_transaction, code_review or other"),
                )
                .arg(
                    Arg::new("risk")
                        .long("risk")
                        .value_name("LEVEL")
                        .default_value("medium")
                        .help("low, medium or high"),
                ),
        )
        .subcommand(Command::new("approvals").about("List workflows awaiting review"))
        .subcommand(
            Command::new("approve")
                .about("Approve a pending item")
                .arg(
                    Arg::new("id")
                        .value_name("APPROVAL_ID")
                        .required(true)
                        .help("Id of the pending approval"),
                )
                .arg(
                    Arg::new("feedback")
                        .long("feedback")
                        .value_name("TEXT")
                        .help("Optional comment (defaults to 'Approved')"),
                ),
        )
        .subcommand(
            Command::new("reject")
                .about("Reject a pending item")
                .arg(
                    Arg::new("id")
                        .value_name("APPROVAL_ID")
                        .required(true)
                        .help("Id of the pending approval"),
                )
                .arg(
                    Arg::new("feedback")
                        .long("feedback")
                        .value_name("TEXT")
                        .help("Reason for rejection (required)"),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("Show the full workflow history")
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_name("FILTER")
                        .default_value("all")
                        .help("all, pending_approval, approved or rejected"),
                ),
        )
        .get_matches();

    // Load configuration; a missing file falls back to the defaults
    let config_path = matches.get_one::<String>("config").unwrap();
    let config = if Path::new(config_path).exists() {
        HitlConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path))?
    } else {
        log::info!("Config file {} not found, using defaults", config_path);
        HitlConfig::default()
    };
    log::debug!("Using backend at {}", config.api_root());

    let reviewer = config.reviewer.display_name.clone();
    let mut store = ResourceStore::new(HttpBackend::new(&config));

    match matches.subcommand() {
        Some(("dashboard", _)) => {
            let dashboard = Dashboard::load(&mut store).await;
            print!("{}", dashboard.render());
        }
        Some(("create", sub)) => {
            let form = WorkflowForm {
                name: sub.get_one::<String>("name").unwrap().clone(),
                description: sub.get_one::<String>("description").unwrap().clone(),
                kind: sub
                    .get_one::<String>("type")
                    .unwrap()
                    .parse::<WorkflowType>()
                    .map_err(anyhow::Error::msg)?,
                risk_level: sub
                    .get_one::<String>("risk")
                    .unwrap()
                    .parse::<RiskLevel>()
                    .map_err(anyhow::Error::msg)?,
            };

            let submitted = form.submit(&mut store).await?;
            println!("Workflow created successfully!");
            println!(
                "  {} ({}, {} risk) -> id {}",
                submitted.workflow.name,
                submitted.workflow.kind.label(),
                submitted.workflow.risk_level.wire_name(),
                submitted.workflow.id
            );
            println!("Next: run `{}` to review pending items", submitted.next.command());
        }
        Some(("approvals", _)) => {
            let view = ApprovalsView::load(&mut store).await?;
            print!("{}", view.render(Utc::now()));
        }
        Some(("approve", sub)) => {
            decide(&mut store, &reviewer, sub, ReviewAction::Approve).await?;
        }
        Some(("reject", sub)) => {
            decide(&mut store, &reviewer, sub, ReviewAction::Reject).await?;
        }
        Some(("history", sub)) => {
            let filter = sub
                .get_one::<String>("status")
                .unwrap()
                .parse::<StatusFilter>()
                .map_err(anyhow::Error::msg)?;

            let mut view = HistoryView::load(&mut store).await;
            view.set_filter(filter);
            print!("{}", view.render(Utc::now()));
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

/// Shared approve/reject path: find the pending item, run the dialog,
/// then show the refreshed pending list
async fn decide(
    store: &mut ResourceStore<HttpBackend>,
    reviewer: &str,
    sub: &clap::ArgMatches,
    action: ReviewAction,
) -> anyhow::Result<()> {
    let id = sub.get_one::<String>("id").unwrap();

    let view = ApprovalsView::load(store).await?;
    let approval = view
        .find(id)
        .cloned()
        .with_context(|| format!("No pending approval with id {}", id))?;

    let mut dialog = ReviewDialog::open(approval, action);
    println!("{}", dialog.render_summary());

    if let Some(feedback) = sub.get_one::<String>("feedback") {
        dialog.set_feedback(feedback.clone());
    }

    let message = dialog.confirm(store, reviewer).await?;
    println!("{}", message);

    // Show the server's new state; the decision already invalidated the
    // cached pending list
    let view = ApprovalsView::load(store).await?;
    print!("{}", view.render(Utc::now()));
    Ok(())
}
