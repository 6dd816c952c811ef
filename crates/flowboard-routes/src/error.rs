use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
  #[error("unknown route: {0}")]
  UnknownRoute(String),

  #[error("route '{route}' is missing parameter '{param}'")]
  MissingParam { route: String, param: String },

  #[error("route '{route}' has an empty value for parameter '{param}'")]
  EmptyParam { route: String, param: String },
}
