use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use flowboard_config::DeploymentStatus;
use flowboard_routes::{RouteParams, RouteTable};
use flowboard_trigger::{DeploymentTrigger, TriggerDescriber};

mod load;

/// Flowboard - describe automation triggers the way the dashboard shows them
#[derive(Parser)]
#[command(name = "flowboard")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.flowboard)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Describe a deployment trigger
  Describe {
    /// Path to the trigger file (trigger, event trigger or automation JSON)
    trigger_file: PathBuf,

    /// Deployment catalog (default: <data-dir>/deployments.json)
    #[arg(long)]
    deployments: Option<PathBuf>,

    /// Override the status derived from the trigger's events
    #[arg(long, value_enum)]
    status: Option<StatusArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// List, match or build dashboard routes
  Routes {
    /// Find the page that renders a URL path
    #[arg(long = "match", conflicts_with = "build")]
    match_path: Option<String>,

    /// Build a concrete path from a route template
    #[arg(long)]
    build: Option<String>,

    /// Route parameter for --build, as key=value
    #[arg(long = "param", value_parser = parse_param, requires = "build")]
    params: Vec<(String, String)>,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
  Text,
  Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
  NotReady,
  Ready,
  Disabled,
}

impl From<StatusArg> for DeploymentStatus {
  fn from(status: StatusArg) -> Self {
    match status {
      StatusArg::NotReady => DeploymentStatus::NotReady,
      StatusArg::Ready => DeploymentStatus::Ready,
      StatusArg::Disabled => DeploymentStatus::Disabled,
    }
  }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
  let (key, value) = s
    .split_once('=')
    .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
  if key.is_empty() {
    return Err(format!("empty parameter name in '{}'", s));
  }
  Ok((key.to_string(), value.to_string()))
}

fn init_tracing() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .with_target(false)
    .compact()
    .try_init()
    .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
  init_tracing().ok();
  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Describe {
      trigger_file,
      deployments,
      status,
      format,
    }) => {
      let data_dir = resolve_data_dir(cli.data_dir)?;
      let mut stdout = std::io::stdout().lock();
      describe(
        &mut stdout,
        &trigger_file,
        deployments,
        &data_dir,
        status,
        format,
      )?;
    }
    Some(Commands::Routes {
      match_path,
      build,
      params,
    }) => {
      routes(match_path, build, params)?;
    }
    None => {
      println!("flowboard - use --help to see available commands");
    }
  }

  Ok(())
}

/// Only commands that read data files need the data directory.
fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
  match explicit {
    Some(dir) => Ok(dir),
    None => Ok(
      dirs::home_dir()
        .context("could not determine home directory")?
        .join(".flowboard"),
    ),
  }
}

fn describe(
  out: &mut impl Write,
  trigger_file: &Path,
  deployments: Option<PathBuf>,
  data_dir: &Path,
  status: Option<StatusArg>,
  format: OutputFormat,
) -> Result<()> {
  let trigger = load::read_trigger(trigger_file)?;
  let deployment_trigger = DeploymentTrigger::from_trigger(&trigger)
    .with_context(|| format!("cannot describe {}", trigger_file.display()))?;

  // An explicit catalog must exist; the default one may not.
  let catalog = match deployments {
    Some(path) => load::read_catalog(&path, true)?,
    None => load::read_catalog(&data_dir.join("deployments.json"), false)?,
  };

  let ids = deployment_trigger.deployment_ids();
  let resolved = load::resolve_deployments(&ids, &catalog);
  tracing::info!(
    referenced = ids.len(),
    resolved = resolved.len(),
    "resolved trigger deployments"
  );

  let describer = TriggerDescriber::new(RouteTable::dashboard());
  let description = match status {
    Some(status) => describer.describe_with_status(
      deployment_trigger.event(),
      &resolved,
      Some(DeploymentStatus::from(status)),
    ),
    None => describer.describe(deployment_trigger.event(), &resolved),
  };

  match format {
    OutputFormat::Text => writeln!(out, "{}", description)?,
    OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&description)?)?,
  }

  Ok(())
}

fn routes(
  match_path: Option<String>,
  build: Option<String>,
  params: Vec<(String, String)>,
) -> Result<()> {
  let table = RouteTable::dashboard();

  if let Some(path) = match_path {
    let matched = table
      .match_path(&path)
      .with_context(|| format!("no route matches '{}'", path))?;
    println!("{}", serde_json::to_string_pretty(&matched)?);
    return Ok(());
  }

  if let Some(template) = build {
    let params: RouteParams = params.into_iter().collect();
    let path = table.build(&template, &params)?;
    println!("{}", path);
    return Ok(());
  }

  for route in table.routes() {
    println!("{:<32} {}", route.path, route.page.title());
  }

  Ok(())
}
