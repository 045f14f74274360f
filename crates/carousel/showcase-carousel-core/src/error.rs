use thiserror::Error;

/// Errors raised at the construction/parsing boundary. Navigation itself never
/// fails: blocked requests are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("content set must contain at least one record")]
    EmptyContentSet,
    #[error("content json parse error: {0}")]
    ContentParse(String),
    #[error("config parse error: {0}")]
    ConfigParse(String),
}
