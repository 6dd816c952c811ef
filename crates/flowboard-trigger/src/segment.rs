use std::fmt;

use flowboard_routes::RouteParams;
use serde::Serialize;

/// A navigable link within a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
  /// Text shown for the link
  pub label: String,
  /// Route template the link targets, e.g. `/deployments/deployment/$id`
  pub to: String,
  /// Parameters for the route template
  pub params: RouteParams,
  /// Concrete path resolved by the host's link resolver
  pub href: String,
}

/// One piece of a rendered description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
  Text { text: String },
  Link(Link),
}

impl Segment {
  pub fn text(text: impl Into<String>) -> Self {
    Segment::Text { text: text.into() }
  }

  /// The visible text of the segment.
  pub fn as_str(&self) -> &str {
    match self {
      Segment::Text { text } => text,
      Segment::Link(link) => &link.label,
    }
  }
}

/// A rendered sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description {
  segments: Vec<Segment>,
}

impl Description {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, segment: Segment) {
    self.segments.push(segment);
  }

  pub fn push_text(&mut self, text: impl Into<String>) {
    self.segments.push(Segment::text(text));
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  pub fn links(&self) -> impl Iterator<Item = &Link> {
    self.segments.iter().filter_map(|segment| match segment {
      Segment::Link(link) => Some(link),
      Segment::Text { .. } => None,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, segment) in self.segments.iter().enumerate() {
      if i > 0 {
        f.write_str(" ")?;
      }
      f.write_str(segment.as_str())?;
    }
    Ok(())
  }
}
