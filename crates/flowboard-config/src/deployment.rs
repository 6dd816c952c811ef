use serde::{Deserialize, Serialize};

use crate::enums::DeploymentStatus;

/// A deployment as referenced by trigger descriptions.
///
/// Only the fields the dashboard renders are kept; unknown fields in server
/// payloads are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<DeploymentStatus>,
}

impl Deployment {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      status: None,
    }
  }
}
