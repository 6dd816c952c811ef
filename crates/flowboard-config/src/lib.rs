//! Flowboard Config
//!
//! This crate contains the serializable automation types that Flowboard renders.
//! These types mirror the payloads the orchestration server returns for
//! automations and deployments, and they are read-only inputs to the
//! description renderer.
//!
//! Payloads can be loaded from:
//! - JSON files (via CLI with `flowboard describe trigger.json`)
//! - API responses fetched by the host application
//!
//! Nothing in this crate fetches or persists data; it only defines shapes and
//! a few lookups over them.

mod deployment;
mod enums;
mod resource;
mod trigger;

pub use deployment::Deployment;
pub use enums::{DeploymentStatus, Posture, Require, RequireMode};
pub use resource::{
  ANY_DEPLOYMENT, DEPLOYMENT_RESOURCE_PREFIX, LabelValue, RESOURCE_ID_LABEL,
  RelatedSpecification, ResourceSpecification,
};
pub use trigger::{CompoundTrigger, EventTrigger, SequenceTrigger, Trigger};
