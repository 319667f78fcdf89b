// File: src/state.rs
// Purpose: Explicit application state for the booking page

use crate::form::{BookingForm, PaymentForm, ValidatedPayment};
use serde::Serialize;
use taller_validation::format_date;

/// Whether the payment form can be submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PaymentGate {
    /// Initial state, and the state after every completed payment
    #[default]
    Disabled,
    /// Reached by submitting a valid booking
    Enabled,
}

impl PaymentGate {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}

/// Values shown in the confirmation overlay, taken at payment time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSnapshot {
    pub customer_name: String,
    pub service_type: String,
    pub vehicle_description: String,
    /// `dd/mm/yyyy`
    pub formatted_date: String,
    /// Grouped as typed, e.g. `4111 1111 1111 1111`
    pub card_number: String,
}

impl BookingSnapshot {
    pub fn new(booking: &BookingForm, payment: &ValidatedPayment) -> Self {
        Self {
            customer_name: booking.name.clone(),
            service_type: booking.service.clone(),
            vehicle_description: booking.vehicle.clone(),
            formatted_date: format_date(&booking.date),
            card_number: payment.card_number.to_string(),
        }
    }
}

/// What the overlay layer should display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum ConfirmationState {
    #[default]
    None,
    Shown(BookingSnapshot),
}

impl ConfirmationState {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn snapshot(&self) -> Option<&BookingSnapshot> {
        match self {
            Self::Shown(snapshot) => Some(snapshot),
            Self::None => None,
        }
    }
}

/// Everything the page displays, owned by the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub booking: BookingForm,
    pub payment: PaymentForm,
    pub gate: PaymentGate,
    pub confirmation: ConfirmationState,
}

impl AppState {
    /// Clear both forms and lock the payment step. The confirmation is left
    /// alone.
    pub fn reset_forms(&mut self) {
        self.booking = BookingForm::default();
        self.payment = PaymentForm::default();
        self.gate = PaymentGate::Disabled;
    }
}
