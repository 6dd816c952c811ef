//! Integration tests for deployment trigger descriptions.

use flowboard_config::{Deployment, DeploymentStatus, EventTrigger, Posture, Trigger};
use flowboard_routes::RouteTable;
use flowboard_trigger::{DeploymentTrigger, Segment, TriggerDescriber};

fn trigger(value: serde_json::Value) -> EventTrigger {
  serde_json::from_value(value).expect("valid event trigger")
}

fn deployments() -> Vec<Deployment> {
  vec![
    Deployment::new("d-1", "nightly-etl"),
    Deployment::new("d-2", "hourly-sync"),
  ]
}

fn describer() -> TriggerDescriber<RouteTable> {
  TriggerDescriber::new(RouteTable::dashboard())
}

#[test]
fn test_any_deployment_ignores_supplied_list() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": "prefect.deployment.*" },
    "posture": "Reactive",
    "expect": ["prefect.deployment.not-ready"]
  }));

  let description = describer().describe(&trigger, &deployments());

  assert_eq!(
    description.to_string(),
    "When any deployment enters not ready"
  );
  assert_eq!(description.links().count(), 0);
}

#[test]
fn test_two_deployments_joined_by_or() {
  let trigger = trigger(serde_json::json!({
    "match": {
      "prefect.resource.id": ["prefect.deployment.d-1", "prefect.deployment.d-2"]
    },
    "posture": "Proactive",
    "after": ["prefect.deployment.ready"],
    "within": 300
  }));

  let description = describer().describe(&trigger, &deployments());

  assert_eq!(
    description.to_string(),
    "When 2 deployments nightly-etl or hourly-sync stays in ready for 5 minutes"
  );

  let hrefs: Vec<&str> = description.links().map(|l| l.href.as_str()).collect();
  assert_eq!(
    hrefs,
    vec!["/deployments/deployment/d-1", "/deployments/deployment/d-2"]
  );

  let ors = description
    .segments()
    .iter()
    .filter(|s| s.as_str() == "or")
    .count();
  assert_eq!(ors, 1);
  assert!(matches!(description.segments()[4], Segment::Link(_)));
}

#[test]
fn test_reactive_never_renders_duration() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": "prefect.deployment.*" },
    "posture": "Reactive",
    "expect": ["prefect.deployment.ready"],
    "within": 300
  }));

  let rendered = describer().describe(&trigger, &[]).to_string();
  assert_eq!(rendered, "When any deployment enters ready");
  assert!(!rendered.contains("for"));
}

#[test]
fn test_posture_connectives() {
  for (posture, connective) in [
    (Posture::Proactive, "stays in"),
    (Posture::Reactive, "enters"),
  ] {
    let trigger = EventTrigger {
      posture,
      ..trigger(serde_json::json!({
        "match": { "prefect.resource.id": "prefect.deployment.*" }
      }))
    };
    let rendered = describer()
      .describe_with_status(&trigger, &[], Some(DeploymentStatus::Ready))
      .to_string();
    assert!(
      rendered.starts_with(&format!("When any deployment {} ready", connective)),
      "{}",
      rendered
    );
  }
}

#[test]
fn test_status_labels_in_sentences() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": "prefect.deployment.*" }
  }));

  for (status, label) in [
    (DeploymentStatus::NotReady, "not ready"),
    (DeploymentStatus::Ready, "ready"),
    (DeploymentStatus::Disabled, "disabled"),
  ] {
    let rendered = describer()
      .describe_with_status(&trigger, &[], Some(status))
      .to_string();
    assert_eq!(rendered, format!("When any deployment enters {}", label));
  }
}

#[test]
fn test_rendering_is_idempotent() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": ["prefect.deployment.d-1"] },
    "posture": "Proactive",
    "expect": ["prefect.deployment.ready", "prefect.deployment.disabled"],
    "within": 5400
  }));

  let describer = describer();
  let first = describer.describe(&trigger, &deployments()[..1]);
  let second = describer.describe(&trigger, &deployments()[..1]);

  assert_eq!(first, second);
  assert_eq!(
    first.to_string(),
    "When 1 deployment nightly-etl stays in not ready for 1 hour, 30 minutes"
  );
}

#[test]
fn test_empty_deployment_list() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": ["prefect.deployment.gone"] },
    "expect": ["prefect.deployment.disabled"]
  }));

  let description = describer().describe(&trigger, &[]);

  assert_eq!(
    description.to_string(),
    "When 0 deployments enters disabled"
  );
  assert_eq!(description.links().count(), 0);
}

#[test]
fn test_unknown_status_is_omitted() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": "prefect.deployment.*" },
    "expect": ["prefect.deployment.archived"]
  }));

  assert_eq!(
    describer().describe(&trigger, &[]).to_string(),
    "When any deployment enters"
  );
}

#[test]
fn test_describes_server_automation_trigger() {
  let trigger: Trigger = serde_json::from_value(serde_json::json!({
    "type": "event",
    "id": "2c1a",
    "match": { "prefect.resource.id": ["prefect.deployment.d-2"] },
    "match_related": {},
    "after": ["prefect.deployment.not-ready"],
    "expect": ["prefect.deployment.ready", "prefect.deployment.disabled"],
    "for_each": ["prefect.resource.id"],
    "posture": "Proactive",
    "threshold": 1,
    "within": 60.0
  }))
  .unwrap();

  let deployment_trigger = DeploymentTrigger::from_trigger(&trigger).unwrap();
  let catalog = deployments();
  let resolved: Vec<Deployment> = deployment_trigger
    .deployment_ids()
    .into_iter()
    .filter_map(|id| catalog.iter().find(|d| d.id == id).cloned())
    .collect();

  let description = describer().describe(deployment_trigger.event(), &resolved);
  assert_eq!(
    description.to_string(),
    "When 1 deployment hourly-sync stays in not ready for 1 minute"
  );

  let json = serde_json::to_value(&description).unwrap();
  assert_eq!(json[2]["kind"], "link");
  assert_eq!(json[2]["params"]["id"], "d-2");
}

fn with_status(id: &str, name: &str, status: DeploymentStatus) -> Deployment {
  Deployment {
    status: Some(status),
    ..Deployment::new(id, name)
  }
}

#[test]
fn test_status_falls_back_to_shared_deployment_status() {
  let trigger = trigger(serde_json::json!({
    "match": {
      "prefect.resource.id": ["prefect.deployment.d-1", "prefect.deployment.d-2"]
    },
    "posture": "Proactive",
    "within": 300
  }));
  let deployments = vec![
    with_status("d-1", "etl", DeploymentStatus::Disabled),
    with_status("d-2", "sync", DeploymentStatus::Disabled),
  ];

  assert_eq!(
    describer().describe(&trigger, &deployments).to_string(),
    "When 2 deployments etl or sync stays in disabled for 5 minutes"
  );
}

#[test]
fn test_trigger_events_win_over_deployment_status() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": ["prefect.deployment.d-1"] },
    "expect": ["prefect.deployment.ready"]
  }));
  let deployments = vec![with_status("d-1", "etl", DeploymentStatus::Disabled)];

  assert_eq!(
    describer().describe(&trigger, &deployments).to_string(),
    "When 1 deployment etl enters ready"
  );
}

#[test]
fn test_mixed_deployment_statuses_are_omitted() {
  let trigger = trigger(serde_json::json!({
    "match": {
      "prefect.resource.id": ["prefect.deployment.d-1", "prefect.deployment.d-2"]
    }
  }));
  let deployments = vec![
    with_status("d-1", "etl", DeploymentStatus::Ready),
    with_status("d-2", "sync", DeploymentStatus::NotReady),
  ];

  assert_eq!(
    describer().describe(&trigger, &deployments).to_string(),
    "When 2 deployments etl or sync enters"
  );
}

#[test]
fn test_wildcard_ignores_deployment_status() {
  let trigger = trigger(serde_json::json!({
    "match": { "prefect.resource.id": "prefect.deployment.*" }
  }));
  let deployments = vec![with_status("d-1", "etl", DeploymentStatus::Ready)];

  assert_eq!(
    describer().describe(&trigger, &deployments).to_string(),
    "When any deployment enters"
  );
}
