//! Loading triggers and deployment catalogs from JSON files.

use std::path::Path;

use anyhow::{Context, Result, bail};

use flowboard_config::{Deployment, EventTrigger, Trigger};

/// Parse a trigger document.
///
/// Accepts a tagged trigger, a bare event trigger without `type`, or an
/// automation object carrying the trigger under `trigger`.
pub fn parse_trigger(content: &str) -> Result<Trigger> {
  let mut value: serde_json::Value =
    serde_json::from_str(content).context("trigger file is not valid JSON")?;

  if let Some(inner) = value.get_mut("trigger").map(serde_json::Value::take) {
    value = inner;
  }

  if !value.is_object() {
    bail!("trigger must be a JSON object");
  }

  if value.get("type").is_some() {
    serde_json::from_value(value).context("failed to parse trigger")
  } else {
    let event: EventTrigger =
      serde_json::from_value(value).context("failed to parse event trigger")?;
    Ok(Trigger::Event(event))
  }
}

pub fn read_trigger(path: &Path) -> Result<Trigger> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read trigger file: {}", path.display()))?;
  parse_trigger(&content).with_context(|| format!("invalid trigger file: {}", path.display()))
}

/// Read a deployment catalog (a JSON array of deployments).
///
/// When `required` is false a missing file is an empty catalog.
pub fn read_catalog(path: &Path, required: bool) -> Result<Vec<Deployment>> {
  if !required && !path.exists() {
    tracing::debug!(path = %path.display(), "no deployment catalog, using empty catalog");
    return Ok(Vec::new());
  }

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read deployment catalog: {}", path.display()))?;
  serde_json::from_str(&content)
    .with_context(|| format!("failed to parse deployment catalog: {}", path.display()))
}

/// Resolve ids against the catalog in id order, skipping unknown ids.
pub fn resolve_deployments(ids: &[&str], catalog: &[Deployment]) -> Vec<Deployment> {
  ids
    .iter()
    .filter_map(|id| {
      let found = catalog.iter().find(|d| d.id == *id).cloned();
      if found.is_none() {
        tracing::warn!(deployment_id = %id, "deployment not found in catalog");
      }
      found
    })
    .collect()
}
