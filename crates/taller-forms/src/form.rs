// File: src/form.rs
// Purpose: Booking and payment form models with their named fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taller_validation::{
    format_card_number, validate_appointment_date_with, validate_payment, validate_required,
    CardNumber, Clock, Cvv, FieldSource, ValidationResult, BOOKING_FIELDS,
};

/// Named fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Service,
    Vehicle,
    Date,
}

impl BookingField {
    pub const ALL: [BookingField; 4] = [Self::Name, Self::Service, Self::Vehicle, Self::Date];

    /// The `name` attribute of the input
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Service => "service",
            Self::Vehicle => "vehicle",
            Self::Date => "date",
        }
    }
}

impl FromStr for BookingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown booking field '{}'", s))
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named fields of the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    CardNumber,
    CardHolder,
    Cvv,
}

impl PaymentField {
    pub const ALL: [PaymentField; 3] = [Self::CardNumber, Self::CardHolder, Self::Cvv];

    pub fn name(self) -> &'static str {
        match self {
            Self::CardNumber => "cardNumber",
            Self::CardHolder => "cardHolder",
            Self::Cvv => "cvv",
        }
    }
}

impl FromStr for PaymentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown payment field '{}'", s))
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First step: who, what and when. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub date: String,
}

impl BookingForm {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Service => &self.service,
            BookingField::Vehicle => &self.vehicle,
            BookingField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Service => &mut self.service,
            BookingField::Vehicle => &mut self.vehicle,
            BookingField::Date => &mut self.date,
        };
        *slot = value;
    }

    /// Required fields first; the date is only checked once they are all
    /// present.
    pub fn validate<C: Clock + ?Sized>(&self, clock: &C) -> ValidationResult {
        let required = validate_required(self, BOOKING_FIELDS);
        if !required.is_valid() {
            return required;
        }

        validate_appointment_date_with(&self.date, clock)
    }
}

impl FieldSource for BookingForm {
    fn field_value(&self, name: &str) -> Option<&str> {
        name.parse::<BookingField>().ok().map(|field| self.get(field))
    }
}

/// Second step: simulated card details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_holder: String,
    #[serde(default)]
    pub cvv: String,
}

impl PaymentForm {
    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardNumber => &self.card_number,
            PaymentField::CardHolder => &self.card_holder,
            PaymentField::Cvv => &self.cvv,
        }
    }

    /// Stores `value`, formatting it first when it is the card number.
    /// Returns the value now held by the field.
    pub fn set(&mut self, field: PaymentField, value: String) -> &str {
        let slot = match field {
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::CardHolder => &mut self.card_holder,
            PaymentField::Cvv => &mut self.cvv,
        };
        *slot = match field {
            PaymentField::CardNumber => format_card_number(&value),
            _ => value,
        };
        slot
    }

    pub fn validate(&self) -> ValidationResult {
        validate_payment(self)
    }

    /// Checks the form and, when it passes, returns the typed card details
    pub fn validated(&self) -> Result<ValidatedPayment, ValidationResult> {
        let result = self.validate();
        if !result.is_valid() {
            return Err(result);
        }

        match (
            CardNumber::try_new(self.card_number.clone()),
            Cvv::try_new(self.cvv.clone()),
        ) {
            (Ok(card_number), Ok(cvv)) => Ok(ValidatedPayment {
                card_number,
                card_holder: self.card_holder.clone(),
                cvv,
            }),
            _ => Err(result),
        }
    }
}

impl FieldSource for PaymentForm {
    fn field_value(&self, name: &str) -> Option<&str> {
        name.parse::<PaymentField>().ok().map(|field| self.get(field))
    }
}

/// Payment details that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub card_number: CardNumber,
    pub card_holder: String,
    pub cvv: Cvv,
}
