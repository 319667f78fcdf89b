//! # taller-forms
//!
//! The booking + simulated payment page: form models, the explicit
//! application state, the submission flow and a declarative maud render of
//! that state.
//!
//! ## Flow
//!
//! ```rust,ignore
//! use taller_forms::{BookingField, Orchestrator, PaymentField, SubmitOutcome};
//!
//! let mut app = Orchestrator::new();
//! app.input_booking(BookingField::Name, "Ana");
//! // ...
//! assert_eq!(app.submit_booking(), SubmitOutcome::Accepted);
//!
//! app.input_payment(PaymentField::CardNumber, "4111111111111111");
//! // ...
//! app.submit_payment();
//! let html = app.render().into_string(); // includes the confirmation overlay
//! app.dismiss_confirmation();
//! ```
//!
//! Validation failures come back as [`SubmitOutcome::Rejected`] holding the
//! message to alert; nothing here panics on user input.

pub mod config;
pub mod form;
pub mod orchestrator;
pub mod render;
pub mod state;

pub use config::{Config, OverlayConfig, PageConfig};
pub use form::{BookingForm, BookingField, PaymentField, PaymentForm, ValidatedPayment};
pub use orchestrator::{Orchestrator, SubmitOutcome};
pub use state::{AppState, BookingSnapshot, ConfirmationState, PaymentGate};

// Validators are part of the public surface
pub use taller_validation as validation;
