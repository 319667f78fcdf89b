//! Validated payment types
//!
//! Newtype wrappers built with `nutype`. A value of these types has passed
//! its check at construction time, so the confirmation snapshot can only be
//! assembled from a well-formed card number.

use crate::card::{format_card_number, has_card_length, is_valid_cvv};
use nutype::nutype;

/// Card number, stored in its grouped display form (`4111 1111 1111 1111`).
///
/// Any input is first run through [`format_card_number`]; construction fails
/// unless exactly 16 digits remain.
#[nutype(
    sanitize(with = |raw: String| format_card_number(&raw)),
    validate(predicate = has_card_length),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct CardNumber(String);

impl CardNumber {
    /// Last group of four digits
    pub fn last_four(&self) -> &str {
        let value = self.as_str();
        &value[value.len() - 4..]
    }
}

/// Three-digit card verification value
#[nutype(
    validate(predicate = is_valid_cvv),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Serialize, Deserialize)
)]
pub struct Cvv(String);
