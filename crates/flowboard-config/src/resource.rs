use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label holding a resource's identifier.
pub const RESOURCE_ID_LABEL: &str = "prefect.resource.id";

/// Prefix shared by all deployment resource ids and deployment events.
pub const DEPLOYMENT_RESOURCE_PREFIX: &str = "prefect.deployment.";

/// Resource id pattern that matches every deployment.
pub const ANY_DEPLOYMENT: &str = "prefect.deployment.*";

/// A label value in a resource specification: one pattern or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelValue {
  One(String),
  Many(Vec<String>),
}

impl LabelValue {
  /// Iterate the patterns in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    let values: &[String] = match self {
      LabelValue::One(value) => std::slice::from_ref(value),
      LabelValue::Many(values) => values,
    };
    values.iter().map(String::as_str)
  }
}

/// Label patterns a resource must match, keyed by label name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSpecification(BTreeMap<String, LabelValue>);

impl ResourceSpecification {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert, mostly useful for fixtures.
  pub fn with(mut self, label: impl Into<String>, value: LabelValue) -> Self {
    self.0.insert(label.into(), value);
    self
  }

  pub fn get(&self, label: &str) -> Option<&LabelValue> {
    self.0.get(label)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Patterns for a label, empty when the label is absent.
  pub fn values<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a str> + use<'a> {
    self.0.get(label).into_iter().flat_map(LabelValue::iter)
  }
}

/// Related-resource filters: a single specification or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedSpecification {
  One(ResourceSpecification),
  Many(Vec<ResourceSpecification>),
}

impl Default for RelatedSpecification {
  fn default() -> Self {
    RelatedSpecification::One(ResourceSpecification::default())
  }
}
