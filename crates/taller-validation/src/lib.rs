//! Taller Validation
//!
//! Pure validation and formatting functions for the booking and payment forms.
//! Used by the form orchestrator in `taller-forms` and by the WASM bindings.
//!
//! Every validator returns a [`ValidationResult`] instead of failing: user input
//! errors are values, collected line by line and shown to the user at once.

pub mod card;
pub mod date;
pub mod required;
pub mod result;
pub mod types;

// Re-export all validators
pub use card::*;
pub use date::*;
pub use required::*;
pub use result::*;
pub use types::*;
