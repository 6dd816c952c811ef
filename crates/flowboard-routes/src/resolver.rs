use crate::table::{RouteParams, RouteTable};

/// Turns a declared link target into a navigable href.
///
/// Renderers only declare the template and its parameters; the host decides
/// what the href looks like (or whether the target exists at all).
pub trait LinkResolver {
  /// Resolve `to` with `params`, or `None` if the target cannot be linked.
  fn resolve(&self, to: &str, params: &RouteParams) -> Option<String>;
}

impl<T: LinkResolver + ?Sized> LinkResolver for &T {
  fn resolve(&self, to: &str, params: &RouteParams) -> Option<String> {
    (**self).resolve(to, params)
  }
}

impl LinkResolver for RouteTable {
  fn resolve(&self, to: &str, params: &RouteParams) -> Option<String> {
    match self.build(to, params) {
      Ok(href) => Some(href),
      Err(e) => {
        tracing::warn!(error = %e, "cannot resolve link target");
        None
      }
    }
  }
}
