//! Flowboard Trigger
//!
//! Renders automation triggers as sentences made of text and link segments,
//! for example:
//!
//! ```text
//! When 2 deployments nightly-etl or hourly-sync stays in not ready for 5 minutes
//! ```
//!
//! Rendering is pure and total. Links and durations are delegated to
//! [`LinkResolver`](flowboard_routes::LinkResolver) and [`DurationFormatter`]
//! so the host decides how hrefs and time spans look.

mod deployments;
mod duration;
mod error;
mod labels;
mod segment;

pub use deployments::{DeploymentTrigger, TriggerDescriber, aggregate_status, derive_status};
pub use duration::{DurationFormatter, HumanDuration};
pub use error::TriggerError;
pub use labels::{pluralize, posture_label, status_label};
pub use segment::{Description, Link, Segment};
