/// Error type for trigger operations.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
  #[error("unsupported trigger: {0}")]
  Unsupported(String),

  #[error("invalid trigger configuration: {0}")]
  InvalidConfig(String),
}
