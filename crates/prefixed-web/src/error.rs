use thiserror::Error;

/// Failures setting up the browser host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    #[error("no global `window` in this context")]
    NoWindow,
    #[error("`window` has no document")]
    NoDocument,
    #[error("failed to create the probe element: {0}")]
    ElementCreation(String),
    #[error("probe element is not an HTMLElement")]
    NotHtmlElement,
}
