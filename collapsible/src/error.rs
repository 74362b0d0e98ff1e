//! Error types for binding widgets.

use collapsible_dom::{ElementId, SelectorError};
use thiserror::Error;

use crate::options::OptionsError;

#[derive(Debug, Error)]
pub enum CollapsibleError {
    /// The element is not part of the host document.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

pub type Result<T> = std::result::Result<T, CollapsibleError>;
