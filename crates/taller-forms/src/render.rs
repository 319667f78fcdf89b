// File: src/render.rs
// Purpose: Declarative maud rendering of the page state

use crate::config::{Config, OverlayConfig};
use crate::state::{AppState, BookingSnapshot, ConfirmationState, PaymentGate};
use crate::form::{BookingForm, PaymentForm};
use maud::{html, Markup, DOCTYPE};
use taller_validation::{mask_card_number, FORMATTED_CARD_LEN};

/// Full HTML document for the current state
pub fn page(state: &AppState, config: &Config) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                title { (config.page.title) }
            }
            body {
                (body(state, config))
            }
        }
    }
}

/// Page body: both forms followed by the confirmation overlay, if any
pub fn body(state: &AppState, config: &Config) -> Markup {
    html! {
        section.formulario {
            (booking_form(&state.booking))
        }
        section.pago {
            (payment_form(&state.payment, state.gate))
        }
        (confirmation(&state.confirmation, &config.overlay))
    }
}

pub fn booking_form(form: &BookingForm) -> Markup {
    html! {
        form novalidate {
            label for="name" { "Nombre del cliente" }
            input #name type="text" name="name" value=(form.name);

            label for="service" { "Tipo de reparación" }
            input #service type="text" name="service" value=(form.service);

            label for="vehicle" { "Descripción del vehículo" }
            input #vehicle type="text" name="vehicle" value=(form.vehicle);

            label for="date" { "Fecha de la cita" }
            input #date type="date" name="date" value=(form.date);

            button type="submit" { "Reservar" }
        }
    }
}

pub fn payment_form(form: &PaymentForm, gate: PaymentGate) -> Markup {
    html! {
        form novalidate {
            label for="cardNumber" { "Número de tarjeta" }
            input #cardNumber type="text" name="cardNumber" inputmode="numeric"
                maxlength=(FORMATTED_CARD_LEN) value=(form.card_number);

            label for="cardHolder" { "Nombre del titular" }
            input #cardHolder type="text" name="cardHolder" value=(form.card_holder);

            label for="cvv" { "CVV" }
            input #cvv type="text" name="cvv" inputmode="numeric" maxlength="3" value=(form.cvv);

            button type="submit" disabled[!gate.is_enabled()] { "Pagar" }
        }
    }
}

/// Overlay for `Shown`, nothing at all for `None`
pub fn confirmation(state: &ConfirmationState, config: &OverlayConfig) -> Markup {
    match state {
        ConfirmationState::None => html! {},
        ConfirmationState::Shown(snapshot) => overlay(snapshot, config),
    }
}

fn overlay(snapshot: &BookingSnapshot, config: &OverlayConfig) -> Markup {
    let backdrop_style = format!(
        "position:fixed;top:0;left:0;width:100%;height:100%;background-color:{};\
         display:flex;justify-content:center;align-items:center;z-index:{}",
        config.backdrop, config.z_index
    );
    let panel_style = format!(
        "background-color:white;padding:20px;border-radius:5px;max-width:{}px;text-align:center",
        config.max_width_px
    );

    let card_number = if config.mask_card_number {
        mask_card_number(&snapshot.card_number)
    } else {
        snapshot.card_number.clone()
    };

    html! {
        div.confirmacion style=(backdrop_style) {
            div.confirmacion-panel style=(panel_style) {
                h2 { (config.heading) }
                p { strong { "Cliente:" } " " (snapshot.customer_name) }
                p { strong { "Servicio:" } " " (snapshot.service_type) }
                p { strong { "Vehículo:" } " " (snapshot.vehicle_description) }
                p { strong { "Fecha:" } " " (snapshot.formatted_date) }
                p { strong { "Tarjeta:" } " " (card_number) }
                button type="button" data-action="dismiss" { (config.dismiss_label) }
            }
        }
    }
}
