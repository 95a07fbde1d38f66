//! Unified error type definition

use thiserror::Error;

/// Modal layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// A session is still open (second `open` while the first caller is waiting)
    #[error("A form session is already open")]
    SessionPending,

    /// The result sender was dropped before the session settled
    #[error("Form session ended without a result")]
    Abandoned,
}

impl ModalError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SessionPending => true,
            Self::Abandoned => false,
        }
    }
}

/// Modal layer Result type alias
pub type ModalResult<T> = std::result::Result<T, ModalError>;
