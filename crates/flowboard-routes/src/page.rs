use serde::{Deserialize, Serialize};

/// A page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
  Index,
  Automations,
  Blocks,
  ConcurrencyLimits,
  Dashboard,
  Events,
  Notifications,
  Settings,
  Variables,
  WorkPools,
  Deployments,
  Flows,
  Runs,
  Deployment,
  Flow,
  FlowRun,
}

impl Page {
  /// Human readable page title.
  pub fn title(self) -> &'static str {
    match self {
      Page::Index => "Home",
      Page::Automations => "Automations",
      Page::Blocks => "Blocks",
      Page::ConcurrencyLimits => "Concurrency Limits",
      Page::Dashboard => "Dashboard",
      Page::Events => "Events",
      Page::Notifications => "Notifications",
      Page::Settings => "Settings",
      Page::Variables => "Variables",
      Page::WorkPools => "Work Pools",
      Page::Deployments => "Deployments",
      Page::Flows => "Flows",
      Page::Runs => "Runs",
      Page::Deployment => "Deployment",
      Page::Flow => "Flow",
      Page::FlowRun => "Flow Run",
    }
  }
}
