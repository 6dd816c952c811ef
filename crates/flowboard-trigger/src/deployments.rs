use flowboard_config::{Deployment, DeploymentStatus, EventTrigger, Posture, Trigger};
use flowboard_routes::{DEPLOYMENT_ROUTE, LinkResolver, RouteParams};

use crate::duration::{DurationFormatter, HumanDuration};
use crate::error::TriggerError;
use crate::labels::{pluralize, posture_label, status_label};
use crate::segment::{Description, Link, Segment};

/// An event trigger that watches deployment status events.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentTrigger<'a> {
  event: &'a EventTrigger,
}

impl<'a> DeploymentTrigger<'a> {
  /// Accept only event triggers whose match criterion targets deployments.
  pub fn from_trigger(trigger: &'a Trigger) -> Result<Self, TriggerError> {
    match trigger {
      Trigger::Event(event) => Self::from_event(event),
      Trigger::Compound(_) => Err(TriggerError::Unsupported(
        "compound triggers have no deployment description".to_string(),
      )),
      Trigger::Sequence(_) => Err(TriggerError::Unsupported(
        "sequence triggers have no deployment description".to_string(),
      )),
    }
  }

  pub fn from_event(event: &'a EventTrigger) -> Result<Self, TriggerError> {
    if !event.targets_deployments() {
      return Err(TriggerError::Unsupported(
        "event trigger does not match deployment resources".to_string(),
      ));
    }
    if event.posture == Posture::Metric {
      return Err(TriggerError::InvalidConfig(
        "deployment triggers cannot use the metric posture".to_string(),
      ));
    }
    Ok(Self { event })
  }

  pub fn event(&self) -> &'a EventTrigger {
    self.event
  }

  pub fn is_any_deployment(&self) -> bool {
    self.event.is_any_deployment()
  }

  /// Deployment ids to resolve; empty when the trigger matches any deployment.
  pub fn deployment_ids(&self) -> Vec<&'a str> {
    if self.is_any_deployment() {
      return Vec::new();
    }
    self.event.deployment_ids()
  }

  pub fn status(&self) -> Option<DeploymentStatus> {
    derive_status(self.event)
  }
}

/// Status a deployment trigger is watching, read from its events.
///
/// Reactive triggers name the status in `expect`. Proactive triggers name it
/// in `after`, or list every other status in `expect`.
pub fn derive_status(trigger: &EventTrigger) -> Option<DeploymentStatus> {
  let first_status =
    |events: &[String]| events.iter().find_map(|e| DeploymentStatus::from_event(e));

  match trigger.posture {
    Posture::Reactive => first_status(trigger.expect.as_slice()),
    Posture::Proactive => first_status(trigger.after.as_slice()).or_else(|| {
      let expected: Vec<DeploymentStatus> = trigger
        .expect
        .iter()
        .filter_map(|e| DeploymentStatus::from_event(e))
        .collect();
      let missing: Vec<DeploymentStatus> = DeploymentStatus::ALL
        .into_iter()
        .filter(|status| !expected.contains(status))
        .collect();
      match missing.as_slice() {
        [status] => Some(*status),
        _ => None,
      }
    }),
    Posture::Metric => None,
  }
}

/// Status shared by every deployment in the list.
///
/// `None` when the list is empty, any deployment has no status, or the
/// statuses disagree.
pub fn aggregate_status(deployments: &[Deployment]) -> Option<DeploymentStatus> {
  let (first, rest) = deployments.split_first()?;
  let status = first.status?;
  rest
    .iter()
    .all(|deployment| deployment.status == Some(status))
    .then_some(status)
}

/// Renders deployment triggers with the host's link and duration formatting.
#[derive(Debug, Clone)]
pub struct TriggerDescriber<L, D = HumanDuration> {
  links: L,
  durations: D,
}

impl<L: LinkResolver> TriggerDescriber<L> {
  pub fn new(links: L) -> Self {
    Self {
      links,
      durations: HumanDuration,
    }
  }
}

impl<L: LinkResolver, D: DurationFormatter> TriggerDescriber<L, D> {
  pub fn with_durations<D2: DurationFormatter>(self, durations: D2) -> TriggerDescriber<L, D2> {
    TriggerDescriber {
      links: self.links,
      durations,
    }
  }

  /// Describe a trigger, deriving the watched status from its events.
  ///
  /// Triggers whose events name no status fall back to the status shared by
  /// the listed deployments.
  pub fn describe(&self, trigger: &EventTrigger, deployments: &[Deployment]) -> Description {
    let status = derive_status(trigger).or_else(|| {
      if trigger.is_any_deployment() {
        None
      } else {
        aggregate_status(deployments)
      }
    });
    self.describe_with_status(trigger, deployments, status)
  }

  /// Describe a trigger with an explicit status; `None` omits the status.
  ///
  /// Wildcard triggers ignore `deployments` entirely.
  pub fn describe_with_status(
    &self,
    trigger: &EventTrigger,
    deployments: &[Deployment],
    status: Option<DeploymentStatus>,
  ) -> Description {
    let mut description = Description::new();
    description.push_text("When");

    if trigger.is_any_deployment() {
      description.push_text("any deployment");
    } else {
      self.push_deployments(&mut description, deployments);
    }

    match posture_label(trigger.posture) {
      Some(label) => description.push_text(label),
      None => tracing::debug!(posture = ?trigger.posture, "no label for trigger posture"),
    }

    match status {
      Some(status) => description.push_text(status_label(status)),
      None => tracing::debug!("trigger status unknown, omitting status label"),
    }

    if trigger.posture == Posture::Proactive {
      let within = self.durations.format_seconds(trigger.within);
      description.push_text(format!("for {}", within));
    }

    description
  }

  fn push_deployments(&self, description: &mut Description, deployments: &[Deployment]) {
    description.push_text(pluralize(deployments.len(), "deployment"));

    for (i, deployment) in deployments.iter().enumerate() {
      if i > 0 {
        description.push_text("or");
      }
      description.push(self.deployment_link(deployment));
    }
  }

  fn deployment_link(&self, deployment: &Deployment) -> Segment {
    let mut params = RouteParams::new();
    params.insert("id".to_string(), deployment.id.clone());

    match self.links.resolve(DEPLOYMENT_ROUTE, &params) {
      Some(href) => Segment::Link(Link {
        label: deployment.name.clone(),
        to: DEPLOYMENT_ROUTE.to_string(),
        params,
        href,
      }),
      None => {
        tracing::debug!(deployment_id = %deployment.id, "rendering deployment without link");
        Segment::text(deployment.name.clone())
      }
    }
  }
}
