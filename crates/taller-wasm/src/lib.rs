//! Taller WASM
//!
//! WebAssembly bindings for the booking page.
//! The browser forwards input and submit events here; the page state lives in
//! Rust and is rendered back to HTML after every event.

use taller_forms::{BookingField, BookingForm, Config, Orchestrator, PaymentField, PaymentForm, SubmitOutcome};
use taller_validation as validation;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Blocking alert with the validation message.
///
/// Outside a window context (e.g. a worker) the message goes to the console.
fn alert(message: &str) -> Result<(), JsValue> {
    match web_sys::window() {
        Some(window) => window.alert_with_message(message),
        None => {
            web_sys::console::warn_1(&JsValue::from_str(message));
            Ok(())
        }
    }
}

fn to_js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Card number as it should be displayed after a keystroke
///
/// # Example (JavaScript)
/// ```javascript
/// input.addEventListener('input', e => {
///     e.target.value = formatCardNumber(e.target.value);
/// });
/// ```
#[wasm_bindgen(js_name = formatCardNumber)]
pub fn format_card_number_js(raw: &str) -> String {
    validation::format_card_number(raw)
}

/// `YYYY-MM-DD` to `dd/mm/yyyy`
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(date: &str) -> String {
    validation::format_date(date)
}

/// Validate a booking object (`{ name, service, vehicle, date }`)
///
/// # Returns
/// Array of error lines (empty if valid)
#[wasm_bindgen(js_name = validateBooking)]
pub fn validate_booking(form: JsValue) -> Result<JsValue, JsValue> {
    let form: BookingForm = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse booking form: {}", e)))?;

    let errors = form.validate(&validation::LocalClock).into_errors();
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Validate a payment object (`{ cardNumber, cardHolder, cvv }`)
///
/// # Returns
/// Array of error lines (empty if valid)
#[wasm_bindgen(js_name = validatePayment)]
pub fn validate_payment(form: JsValue) -> Result<JsValue, JsValue> {
    let form: PaymentForm = serde_wasm_bindgen::from_value(form)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse payment form: {}", e)))?;

    let errors = form.validate().into_errors();
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// The whole page: both forms, the payment gate and the confirmation overlay
///
/// # Example (JavaScript)
/// ```javascript
/// const app = new TallerApp();
/// root.innerHTML = app.render();
///
/// bookingForm.addEventListener('submit', e => {
///     e.preventDefault();
///     app.submitBooking();
///     root.innerHTML = app.render();
/// });
/// ```
#[wasm_bindgen]
pub struct TallerApp {
    inner: Orchestrator,
}

#[wasm_bindgen]
impl TallerApp {
    /// Create the page state, optionally from `taller.toml` contents
    #[wasm_bindgen(constructor)]
    pub fn new(config_toml: Option<String>) -> Result<TallerApp, JsValue> {
        let config = match config_toml {
            Some(text) => Config::from_toml_str(&text).map_err(|e| to_js_error(format!("{:#}", e)))?,
            None => Config::default(),
        };

        Ok(TallerApp {
            inner: Orchestrator::with_config(config),
        })
    }

    #[wasm_bindgen(js_name = inputBooking)]
    pub fn input_booking(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: BookingField = field.parse().map_err(to_js_error)?;
        self.inner.input_booking(field, value);
        Ok(())
    }

    /// Returns the value the input should now display
    #[wasm_bindgen(js_name = inputPayment)]
    pub fn input_payment(&mut self, field: &str, value: &str) -> Result<String, JsValue> {
        let field: PaymentField = field.parse().map_err(to_js_error)?;
        Ok(self.inner.input_payment(field, value).to_string())
    }

    /// Returns whether the booking was accepted; alerts otherwise
    #[wasm_bindgen(js_name = submitBooking)]
    pub fn submit_booking(&mut self) -> Result<bool, JsValue> {
        report(self.inner.submit_booking())
    }

    /// Returns whether the payment went through; alerts on validation errors
    #[wasm_bindgen(js_name = submitPayment)]
    pub fn submit_payment(&mut self) -> Result<bool, JsValue> {
        report(self.inner.submit_payment())
    }

    pub fn dismiss(&mut self) {
        self.inner.dismiss_confirmation();
    }

    #[wasm_bindgen(js_name = paymentEnabled)]
    pub fn payment_enabled(&self) -> bool {
        self.inner.payment_gate().is_enabled()
    }

    #[wasm_bindgen(js_name = confirmationShown)]
    pub fn confirmation_shown(&self) -> bool {
        self.inner.state().confirmation.is_shown()
    }

    /// Body markup for the current state
    pub fn render(&self) -> String {
        taller_forms::render::body(self.inner.state(), self.inner.config()).into_string()
    }

    /// Full HTML document for the current state
    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self) -> String {
        self.inner.render().into_string()
    }
}

fn report(outcome: SubmitOutcome) -> Result<bool, JsValue> {
    if let Some(message) = outcome.alert_message() {
        alert(&message)?;
    }
    Ok(outcome.is_accepted())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_format_card_number() {
        assert_eq!(format_card_number_js("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number_js("41-11"), "4111");
    }

    #[wasm_bindgen_test]
    fn test_format_date() {
        assert_eq!(format_date_js("2024-03-05"), "05/03/2024");
    }

    #[wasm_bindgen_test]
    fn test_unknown_field_is_error() {
        let mut app = TallerApp::new(None).unwrap();
        assert!(app.input_booking("email", "x").is_err());
        assert!(app.input_payment("pin", "1234").is_err());
    }

    #[wasm_bindgen_test]
    fn test_card_input_is_formatted() {
        let mut app = TallerApp::new(None).unwrap();
        assert_eq!(app.input_payment("cardNumber", "41111111").unwrap(), "4111 1111");
        assert!(app.render().contains(r#"value="4111 1111""#));
    }

    #[wasm_bindgen_test]
    fn test_payment_ignored_while_locked() {
        let mut app = TallerApp::new(None).unwrap();
        assert!(!app.payment_enabled());
        assert!(!app.submit_payment().unwrap());
        assert!(!app.confirmation_shown());
    }

    #[wasm_bindgen_test]
    fn test_invalid_config_is_error() {
        assert!(TallerApp::new(Some("[overlay]\nz_index = \"x\"".to_string())).is_err());
    }
}
