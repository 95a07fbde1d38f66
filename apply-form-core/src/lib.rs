//! Apply Form Core Library
//!
//! Provides the modal lifecycle logic behind the application form dialog:
//! - Modal lifecycle controller (open / submit / cancel / teardown)
//! - Field validation engine
//! - Keyboard focus trap over an explicit focus registry
//! - Live announcement region for assistive technology
//!
//! This library is rendering-independent; the host (e.g. the terminal UI)
//! drives it with events and reads its state back for display.

pub mod announce;
pub mod config;
pub mod controller;
pub mod error;
pub mod focus;
pub mod host;
pub mod types;
pub mod validation;
pub mod view;

// Re-export common types
pub use announce::{LiveRegion, Politeness};
pub use config::ModalConfig;
pub use controller::{ClickTarget, ModalController, ModalState, PendingResult, SubmitOutcome};
pub use error::{ModalError, ModalResult};
pub use focus::{FocusId, FocusRegistry, FocusTrap, TrapKey, TrapOutcome};
pub use host::HostDocument;
pub use types::{experience_label, ExperienceOption, Field, FormData, EXPERIENCE_OPTIONS};
pub use validation::{validate, FieldErrors};
