//! # Checkout Command
//!
//! Placeholder. The storefront accepts the trigger and answers with a notice;
//! no payment is taken and the cart is left untouched.

use greenify_core::{CartStore, CartSummary};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

pub const CHECKOUT_NOTICE: &str = "Checkout is coming soon!";

/// Response to a checkout trigger.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: Uuid,
    pub message: String,
    /// Cart totals at the moment of the trigger
    pub totals: CartSummary,
}

/// Accepts a checkout trigger.
pub fn checkout(session_id: Uuid, cart: &CartStore) -> CheckoutResponse {
    let totals = cart.summary();
    info!(
        %session_id,
        total_quantity = totals.total_quantity,
        total_cents = totals.total_cost.cents(),
        "checkout requested (not implemented)"
    );

    CheckoutResponse {
        session_id,
        message: CHECKOUT_NOTICE.to_string(),
        totals,
    }
}
