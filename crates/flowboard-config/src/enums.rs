use serde::{Deserialize, Serialize};

use crate::resource::DEPLOYMENT_RESOURCE_PREFIX;

/// How an event trigger evaluates its events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
  /// Fires when a matching event occurs.
  #[default]
  Reactive,
  /// Fires when an expected event does not occur within a window.
  Proactive,
  /// Fires on a metric query; not produced by deployment triggers.
  Metric,
}

/// Readiness status of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
  #[serde(alias = "NOT_READY", alias = "not-ready")]
  NotReady,
  #[serde(alias = "READY")]
  Ready,
  #[serde(alias = "DISABLED")]
  Disabled,
}

impl DeploymentStatus {
  pub const ALL: [DeploymentStatus; 3] = [
    DeploymentStatus::NotReady,
    DeploymentStatus::Ready,
    DeploymentStatus::Disabled,
  ];

  /// Suffix used in event names, e.g. `not-ready`.
  pub fn event_suffix(self) -> &'static str {
    match self {
      DeploymentStatus::NotReady => "not-ready",
      DeploymentStatus::Ready => "ready",
      DeploymentStatus::Disabled => "disabled",
    }
  }

  /// Full event name, e.g. `prefect.deployment.not-ready`.
  pub fn event_name(self) -> String {
    format!("{}{}", DEPLOYMENT_RESOURCE_PREFIX, self.event_suffix())
  }

  /// Parse a deployment status event name.
  ///
  /// Returns `None` for events that are not deployment status events.
  pub fn from_event(event: &str) -> Option<Self> {
    let suffix = event.strip_prefix(DEPLOYMENT_RESOURCE_PREFIX)?;
    Self::ALL
      .into_iter()
      .find(|status| status.event_suffix() == suffix)
  }
}

/// How many child triggers of a compound trigger must fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Require {
  Count(u32),
  Mode(RequireMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequireMode {
  Any,
  All,
}
