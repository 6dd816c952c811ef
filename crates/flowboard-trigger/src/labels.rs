use flowboard_config::{DeploymentStatus, Posture};

/// Connective used between the subject and the status.
///
/// Metric triggers have no deployment wording and render nothing.
pub fn posture_label(posture: Posture) -> Option<&'static str> {
  match posture {
    Posture::Proactive => Some("stays in"),
    Posture::Reactive => Some("enters"),
    Posture::Metric => None,
  }
}

pub fn status_label(status: DeploymentStatus) -> &'static str {
  match status {
    DeploymentStatus::NotReady => "not ready",
    DeploymentStatus::Ready => "ready",
    DeploymentStatus::Disabled => "disabled",
  }
}

/// `"1 deployment"`, `"3 deployments"`, `"0 deployments"`.
pub fn pluralize(count: usize, noun: &str) -> String {
  if count == 1 {
    format!("{} {}", count, noun)
  } else {
    format!("{} {}s", count, noun)
  }
}
