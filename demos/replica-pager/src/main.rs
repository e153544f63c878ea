//! Print one page of a deployment's replicas.
//!
//! ```text
//! replica-pager [--snapshot FILE] [--app NAME] [--deployment NAME] [--log FILTER] [KEY=VALUE ...]
//! ```
//!
//! `KEY` is a filter field (`replica_id`, `state`) or a page key (`pageNo`,
//! `pageSize`); pairs are applied in order, exactly as a UI would report them.
//! Without `--snapshot` a synthetic deployment is used.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use servedash_core::ReplicaSelection;
use servedash_model::{
    Application, ApplicationStatus, Deployment, DeploymentStatus, DeploymentSummary, PageKey,
    Replica, ReplicaField, ReplicaState, SelectionConfig, ServeSnapshot,
};
use servedash_observe::{DEFAULT_DIRECTIVES, LoggerConfig, LoggerLevel, init_logger};

const DEMO_APP: &str = "demo";
const DEMO_DEPLOYMENT: &str = "Model";

/// Print one page of a deployment's replicas
#[derive(Debug, Parser)]
#[command(name = "replica-pager", version)]
struct Args {
    /// Serve snapshot JSON; a synthetic deployment is used when omitted
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Application name
    #[arg(long, default_value = DEMO_APP)]
    app: String,

    /// Deployment name inside the application
    #[arg(long, default_value = DEMO_DEPLOYMENT)]
    deployment: String,

    /// Log filter directive
    #[arg(long, env = "SERVEDASH_LOG", default_value = DEFAULT_DIRECTIVES)]
    log: String,

    /// Filter or page changes, applied in order
    #[arg(value_name = "KEY=VALUE", value_parser = parse_action)]
    actions: Vec<Action>,
}

/// One `KEY=VALUE` change reported by the list UI.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Action {
    key: String,
    value: String,
}

fn parse_action(raw: &str) -> Result<Action, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    Ok(Action {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = LoggerConfig {
        level: LoggerLevel::new(&args.log)?,
        ..Default::default()
    };
    init_logger(&cfg)?;

    let snapshot = match &args.snapshot {
        Some(path) => load_snapshot(path)?,
        None => demo_snapshot(),
    };

    let (application, deployment) = snapshot.deployment(&args.app, &args.deployment)?;

    let summary = DeploymentSummary::new(application, deployment);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let mut selection = ReplicaSelection::for_deployment(deployment, SelectionConfig::default());
    info!(
        app = application.display_name(),
        deployment = deployment.name.as_str(),
        replicas = deployment.replica_count(),
        "selection ready"
    );
    println!(
        "id options: {:?}",
        selection.replica_filter_options(ReplicaField::ReplicaId)
    );
    println!(
        "state options: {:?}",
        selection.replica_filter_options(ReplicaField::State)
    );

    for action in &args.actions {
        apply(&mut selection, action)?;
    }

    let page = selection.view();
    println!(
        "page {}/{} ({} matching, prev={}, next={})",
        page.constrained_page,
        page.max_page,
        page.total_items,
        page.has_prev(),
        page.has_next()
    );
    for replica in &page.items {
        println!(
            "{:<16} {:<18} started_ms={}",
            replica.replica_id,
            replica.state,
            replica.start_time_ms()
        );
    }

    Ok(())
}

fn apply(selection: &mut ReplicaSelection, action: &Action) -> anyhow::Result<()> {
    let Action { key, value } = action;
    if let Ok(page_key) = key.parse::<PageKey>() {
        selection.set_page(page_key, value);
        return Ok(());
    }
    let field = key
        .parse::<ReplicaField>()
        .with_context(|| format!("unsupported action key `{key}`"))?;
    selection.set_replica_filter(field, value);
    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<ServeSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let snapshot =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(snapshot)
}

fn demo_snapshot() -> ServeSnapshot {
    let states = [
        ReplicaState::Running,
        ReplicaState::Running,
        ReplicaState::Starting,
        ReplicaState::Running,
        ReplicaState::Recovering,
        ReplicaState::Stopping,
    ];
    let replicas = (0..23)
        .map(|i| {
            Replica::new(
                format!("{DEMO_DEPLOYMENT}#{i:04x}"),
                states[i % states.len()],
                1_700_000_000.0 + i as f64,
            )
        })
        .collect();

    let deployment = Deployment {
        name: DEMO_DEPLOYMENT.to_string(),
        status: DeploymentStatus::Healthy,
        message: String::new(),
        deployment_config: Some(serde_json::json!({ "num_replicas": 23 })),
        replicas,
    };
    let application = Application {
        name: DEMO_APP.to_string(),
        route_prefix: Some("/".to_string()),
        status: ApplicationStatus::Running,
        last_deployed_time_s: 1_700_000_000.0,
        deployments: BTreeMap::from([(DEMO_DEPLOYMENT.to_string(), deployment)]),
    };

    ServeSnapshot {
        applications: BTreeMap::from([(DEMO_APP.to_string(), application)]),
    }
}
