use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::RouteError;
use crate::page::Page;

/// Route parameters keyed by name (without the `$` prefix).
pub type RouteParams = BTreeMap<String, String>;

/// Template of the deployment details route.
pub const DEPLOYMENT_ROUTE: &str = "/deployments/deployment/$id";

/// A path template and the page it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
  pub path: &'static str,
  pub page: Page,
}

impl Route {
  pub const fn new(path: &'static str, page: Page) -> Self {
    Self { path, page }
  }

  /// Names of the `$param` segments, in order.
  pub fn params(&self) -> impl Iterator<Item = &'static str> + use<> {
    segments(self.path).filter_map(|segment| segment.strip_prefix('$'))
  }
}

/// A concrete path matched against the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
  pub route: Route,
  pub params: RouteParams,
}

const DASHBOARD_ROUTES: &[Route] = &[
  Route::new("/", Page::Index),
  Route::new("/automations", Page::Automations),
  Route::new("/blocks", Page::Blocks),
  Route::new("/concurrency-limits", Page::ConcurrencyLimits),
  Route::new("/dashboard", Page::Dashboard),
  Route::new("/events", Page::Events),
  Route::new("/notifications", Page::Notifications),
  Route::new("/settings", Page::Settings),
  Route::new("/variables", Page::Variables),
  Route::new("/work-pools", Page::WorkPools),
  Route::new("/deployments", Page::Deployments),
  Route::new("/flows", Page::Flows),
  Route::new("/runs", Page::Runs),
  Route::new(DEPLOYMENT_ROUTE, Page::Deployment),
  Route::new("/flows/flow/$id", Page::Flow),
  Route::new("/runs/flow-run/$id", Page::FlowRun),
];

/// Lookup table from path templates to pages.
#[derive(Debug, Clone)]
pub struct RouteTable {
  routes: Vec<Route>,
  /// Normalized template -> index into `routes`.
  by_path: HashMap<&'static str, usize>,
}

impl Default for RouteTable {
  fn default() -> Self {
    Self::dashboard()
  }
}

impl RouteTable {
  /// Build a table from routes. Later duplicates of a template are ignored.
  pub fn new(routes: impl IntoIterator<Item = Route>) -> Self {
    let mut table = Self {
      routes: Vec::new(),
      by_path: HashMap::new(),
    };

    for route in routes {
      let key = normalize(route.path);
      if table.by_path.contains_key(key) {
        tracing::debug!(path = route.path, "ignoring duplicate route");
        continue;
      }
      table.by_path.insert(key, table.routes.len());
      table.routes.push(route);
    }

    table
  }

  /// The routes served by the dashboard.
  pub fn dashboard() -> Self {
    Self::new(DASHBOARD_ROUTES.iter().copied())
  }

  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  /// Find the route declared with this template.
  pub fn lookup(&self, template: &str) -> Option<&Route> {
    self
      .by_path
      .get(normalize(template))
      .map(|&index| &self.routes[index])
  }

  /// Find the route that renders a concrete URL path.
  ///
  /// Query strings and fragments are ignored, a trailing slash is tolerated
  /// and parameter values are percent-decoded. Static routes win over
  /// parameterized ones.
  pub fn match_path(&self, url: &str) -> Option<RouteMatch> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    if let Some(route) = self.lookup(path).filter(|r| r.params().next().is_none()) {
      return Some(RouteMatch {
        route: *route,
        params: RouteParams::new(),
      });
    }

    let candidate: Vec<&str> = segments(path).collect();
    self.routes.iter().find_map(|route| {
      let template: Vec<&str> = segments(route.path).collect();
      if template.len() != candidate.len() {
        return None;
      }

      let mut params = RouteParams::new();
      for (expected, actual) in template.iter().zip(&candidate) {
        match expected.strip_prefix('$') {
          Some(name) => {
            let value = urlencoding::decode(actual).ok()?;
            if value.is_empty() {
              return None;
            }
            params.insert(name.to_string(), value.into_owned());
          }
          None if expected == actual => {}
          None => return None,
        }
      }

      Some(RouteMatch {
        route: *route,
        params,
      })
    })
  }

  /// Resolve a template into a concrete path.
  ///
  /// Parameter values are percent-encoded. Extra parameters are ignored.
  pub fn build(&self, template: &str, params: &RouteParams) -> Result<String, RouteError> {
    let route = self
      .lookup(template)
      .ok_or_else(|| RouteError::UnknownRoute(template.to_string()))?;

    let mut path = String::new();
    for segment in segments(route.path) {
      path.push('/');
      match segment.strip_prefix('$') {
        Some(name) => {
          let value = params.get(name).ok_or_else(|| RouteError::MissingParam {
            route: route.path.to_string(),
            param: name.to_string(),
          })?;
          if value.is_empty() {
            return Err(RouteError::EmptyParam {
              route: route.path.to_string(),
              param: name.to_string(),
            });
          }
          path.push_str(&urlencoding::encode(value));
        }
        None => path.push_str(segment),
      }
    }

    if path.is_empty() {
      path.push('/');
    }
    Ok(path)
  }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
  path.split('/').filter(|segment| !segment.is_empty())
}

fn normalize(path: &str) -> &str {
  match path.trim_end_matches('/') {
    "" => "/",
    trimmed => trimmed,
  }
}
