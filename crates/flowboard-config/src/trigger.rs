use serde::{Deserialize, Serialize};

use crate::enums::{Posture, Require};
use crate::resource::{
  ANY_DEPLOYMENT, DEPLOYMENT_RESOURCE_PREFIX, LabelValue, RESOURCE_ID_LABEL, RelatedSpecification,
  ResourceSpecification,
};

/// An automation trigger as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
  Event(EventTrigger),
  Compound(CompoundTrigger),
  Sequence(SequenceTrigger),
}

impl Trigger {
  /// The event trigger, if this is one.
  pub fn as_event(&self) -> Option<&EventTrigger> {
    match self {
      Trigger::Event(trigger) => Some(trigger),
      Trigger::Compound(_) | Trigger::Sequence(_) => None,
    }
  }
}

/// A trigger that fires on events matching a resource pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTrigger {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,

  /// Labels the event's resource must match
  #[serde(rename = "match", default)]
  pub match_spec: ResourceSpecification,

  /// Labels one of the event's related resources must match
  #[serde(default)]
  pub match_related: RelatedSpecification,

  /// Events that must be seen before this trigger starts watching
  #[serde(default)]
  pub after: Vec<String>,

  /// Events this trigger is watching for
  #[serde(default)]
  pub expect: Vec<String>,

  /// Labels used to evaluate the trigger separately per resource
  #[serde(default)]
  pub for_each: Vec<String>,

  #[serde(default)]
  pub posture: Posture,

  #[serde(default = "default_threshold")]
  pub threshold: u32,

  /// Evaluation window in seconds
  #[serde(default)]
  pub within: f64,
}

fn default_threshold() -> u32 {
  1
}

impl Default for EventTrigger {
  fn default() -> Self {
    Self {
      id: None,
      match_spec: ResourceSpecification::default(),
      match_related: RelatedSpecification::default(),
      after: Vec::new(),
      expect: Vec::new(),
      for_each: Vec::new(),
      posture: Posture::default(),
      threshold: default_threshold(),
      within: 0.0,
    }
  }
}

impl EventTrigger {
  /// Whether the trigger matches every deployment via the wildcard id.
  pub fn is_any_deployment(&self) -> bool {
    matches!(
      self.match_spec.get(RESOURCE_ID_LABEL),
      Some(LabelValue::One(id)) if id == ANY_DEPLOYMENT
    )
  }

  /// Whether any matched resource id refers to deployments.
  pub fn targets_deployments(&self) -> bool {
    self
      .match_spec
      .values(RESOURCE_ID_LABEL)
      .any(|id| id.starts_with(DEPLOYMENT_RESOURCE_PREFIX))
  }

  /// Deployment ids named explicitly in the match criterion.
  ///
  /// Ids keep their declaration order; duplicates and wildcards are dropped.
  pub fn deployment_ids(&self) -> Vec<&str> {
    let mut ids: Vec<&str> = Vec::new();
    for id in self
      .match_spec
      .values(RESOURCE_ID_LABEL)
      .filter_map(|id| id.strip_prefix(DEPLOYMENT_RESOURCE_PREFIX))
    {
      if id.is_empty() || id.contains('*') || ids.contains(&id) {
        continue;
      }
      ids.push(id);
    }
    ids
  }
}

/// A trigger that fires when some number of child triggers fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundTrigger {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub triggers: Vec<Trigger>,
  pub require: Require,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub within: Option<f64>,
}

/// A trigger that fires when its child triggers fire in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceTrigger {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub triggers: Vec<Trigger>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub within: Option<f64>,
}
