//! Checkout route handlers.
//!
//! Each handler moves the shopper's wizard one step and answers with the
//! whole cart modal. Missing fields come back as a message on the same step;
//! out-of-order requests (a stale tab, a double submit) are rejected.

use axum::{Form, extract::State, response::Response};
use tracing::instrument;

use super::cart::{CartModalTemplate, modal_response, refusal};
use crate::checkout::{DeliveryInfo, PaymentSelection};
use crate::error::{Result, add_breadcrumb};
use crate::middleware::Shopper;
use crate::models::spawn_payment;
use crate::state::AppState;

/// Cart -> Delivery.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn delivery(State(state): State<AppState>, shopper: Shopper) -> Result<Response> {
    let mut session = shopper.lock().await;
    let refused = refusal(session.proceed_to_delivery())?;
    Ok(modal_response(&session, state.pricing(), refused))
}

/// Save delivery details and go on to payment.
///
/// The details are kept even when some are missing, so the form comes back
/// filled in.
#[instrument(skip(state, shopper, info), fields(shopper_id = %shopper.id))]
pub async fn payment(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(info): Form<DeliveryInfo>,
) -> Result<Response> {
    let mut session = shopper.lock().await;
    let refused = refusal(session.submit_delivery(info))?;
    Ok(modal_response(&session, state.pricing(), refused))
}

/// One step back.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn back(State(state): State<AppState>, shopper: Shopper) -> Result<Response> {
    let mut session = shopper.lock().await;
    let step = session.back()?;
    tracing::debug!(?step, "Stepped back");
    Ok(modal_response(&session, state.pricing(), None))
}

/// Save the payment selection and start processing it.
///
/// The modal comes back in its processing state and polls
/// `/checkout/status` until the confirmation is ready.
#[instrument(skip(state, shopper, selection), fields(shopper_id = %shopper.id, method = ?selection.method))]
pub async fn pay(
    State(state): State<AppState>,
    shopper: Shopper,
    Form(selection): Form<PaymentSelection>,
) -> Result<Response> {
    let mut session = shopper.lock().await;
    match session.begin_payment(selection, state.pricing()) {
        Ok(ticket) => {
            add_breadcrumb("checkout", "Payment started", None);
            spawn_payment(&shopper.handle, &mut session, state.processor(), ticket);
            Ok(modal_response(&session, state.pricing(), None))
        }
        Err(err) => {
            let refused = refusal(Err(err))?;
            Ok(modal_response(&session, state.pricing(), refused))
        }
    }
}

/// Poll while a payment is processing.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn status(State(state): State<AppState>, shopper: Shopper) -> CartModalTemplate {
    let session = shopper.lock().await;
    CartModalTemplate::new(&session, state.pricing())
}

/// "Continue shopping": clear the cart and close the modal.
#[instrument(skip(state, shopper), fields(shopper_id = %shopper.id))]
pub async fn complete(State(state): State<AppState>, shopper: Shopper) -> Result<Response> {
    let mut session = shopper.lock().await;
    session.complete_order()?;
    tracing::info!("Order completed, cart cleared");
    Ok(modal_response(&session, state.pricing(), None))
}
