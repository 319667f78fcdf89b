// File: src/orchestrator.rs
// Purpose: Submission flow for the booking and payment forms

use crate::config::Config;
use crate::form::{BookingField, PaymentField};
use crate::render;
use crate::state::{AppState, BookingSnapshot, ConfirmationState, PaymentGate};
use maud::Markup;
use taller_validation::{Clock, LocalClock, ValidationResult};
use tracing::{debug, info, warn};

/// Result of a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The step went through
    Accepted,
    /// Validation failed; the message is shown to the user and state is untouched
    Rejected(ValidationResult),
    /// Payment was submitted while still locked; nothing happens
    Ignored,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The alert text, if the submission was rejected
    pub fn alert_message(&self) -> Option<String> {
        match self {
            Self::Rejected(result) => Some(result.message()),
            _ => None,
        }
    }
}

/// Owns the page state and applies input and submit events to it.
///
/// Every handler runs to completion synchronously; the caller renders
/// afterwards with [`Orchestrator::render`].
#[derive(Debug)]
pub struct Orchestrator<C: Clock = LocalClock> {
    state: AppState,
    config: Config,
    clock: C,
}

impl Orchestrator<LocalClock> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_clock(config, LocalClock)
    }
}

impl Default for Orchestrator<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Orchestrator<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            state: AppState::default(),
            config,
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn payment_gate(&self) -> PaymentGate {
        self.state.gate
    }

    /// Input event on a booking field.
    ///
    /// Changing a booking value after payment was unlocked locks it again;
    /// the booking has to be submitted once more.
    pub fn input_booking(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        if self.state.booking.get(field) == value {
            return;
        }

        self.state.booking.set(field, value);

        if self.state.gate.is_enabled() {
            info!(%field, "Booking edited after validation, payment locked");
            self.state.gate = PaymentGate::Disabled;
        }
    }

    /// Input event on a payment field. The card number is reformatted on
    /// every keystroke; the returned value is what the field should display.
    pub fn input_payment(&mut self, field: PaymentField, value: impl Into<String>) -> &str {
        self.state.payment.set(field, value.into())
    }

    /// Submit event on the booking form
    pub fn submit_booking(&mut self) -> SubmitOutcome {
        let result = self.state.booking.validate(&self.clock);
        if !result.is_valid() {
            warn!(errors = result.errors().len(), "Booking rejected");
            return SubmitOutcome::Rejected(result);
        }

        if !self.state.gate.is_enabled() {
            info!("Booking accepted, payment unlocked");
        }
        self.state.gate = PaymentGate::Enabled;
        SubmitOutcome::Accepted
    }

    /// Submit event on the payment form.
    ///
    /// On success the confirmation is shown, both forms are cleared and the
    /// payment step is locked again.
    pub fn submit_payment(&mut self) -> SubmitOutcome {
        if !self.state.gate.is_enabled() {
            debug!("Payment submitted while locked, ignoring");
            return SubmitOutcome::Ignored;
        }

        let payment = match self.state.payment.validated() {
            Ok(payment) => payment,
            Err(result) => {
                warn!(errors = result.errors().len(), "Payment rejected");
                return SubmitOutcome::Rejected(result);
            }
        };

        let snapshot = BookingSnapshot::new(&self.state.booking, &payment);
        info!(
            customer = %snapshot.customer_name,
            date = %snapshot.formatted_date,
            "Simulated payment accepted"
        );

        self.state.confirmation = ConfirmationState::Shown(snapshot);
        self.state.reset_forms();
        SubmitOutcome::Accepted
    }

    /// Dismiss control on the confirmation overlay
    pub fn dismiss_confirmation(&mut self) {
        if self.state.confirmation.is_shown() {
            debug!("Confirmation dismissed");
        }
        self.state.confirmation = ConfirmationState::None;
    }

    /// Full page markup for the current state
    pub fn render(&self) -> Markup {
        render::page(&self.state, &self.config)
    }
}
