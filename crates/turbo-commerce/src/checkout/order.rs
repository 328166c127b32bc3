//! Order placement.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartItem, CartStorage, PersistedCart};
use crate::checkout::CheckoutForm;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;

/// How long the mock gateway takes to accept an order.
pub const DEFAULT_ORDER_LATENCY: Duration = Duration::from_millis(1500);

/// Customer details attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl CustomerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format the shipping address on a single line.
    pub fn one_line_address(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.address, self.city, self.zip_code, self.country
        )
    }
}

impl From<&CheckoutForm> for CustomerInfo {
    fn from(form: &CheckoutForm) -> Self {
        let form = form.trimmed();
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            address: form.address,
            city: form.city,
            zip_code: form.zip_code,
            country: form.country,
        }
    }
}

/// What gets sent to the order gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<CartItem>,
    pub subtotal: Money,
    pub total_qty: i64,
    pub customer: CustomerInfo,
}

impl OrderRequest {
    pub fn new(items: &[CartItem], customer: CustomerInfo) -> Self {
        Self {
            items: items.to_vec(),
            subtotal: crate::cart::select_subtotal(items),
            total_qty: crate::cart::select_total_qty(items),
            customer,
        }
    }
}

/// A successfully placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub items: Vec<CartItem>,
    pub subtotal: Money,
    pub total_qty: i64,
    pub customer: CustomerInfo,
    pub placed_at: DateTime<Utc>,
}

/// Accepts orders and hands back an order id.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderId, CommerceError>;
}

/// Gateway that accepts every order after a delay.
#[derive(Debug, Clone)]
pub struct MockOrderGateway {
    latency: Duration,
    failure: Option<String>,
}

impl Default for MockOrderGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockOrderGateway {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_ORDER_LATENCY,
            failure: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// A gateway that rejects every order with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            latency: Duration::ZERO,
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderId, CommerceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(reason) = &self.failure {
            return Err(CommerceError::OrderSubmission(reason.clone()));
        }
        let id = OrderId::generate();
        tracing::debug!(order_id = %id, items = order.items.len(), "mock gateway accepted order");
        Ok(id)
    }
}

/// Validate the form, submit the cart and clear it once the gateway accepts.
///
/// Fails with [`CommerceError::EmptyCart`] when there is nothing to buy and
/// with [`CommerceError::Validation`] when the form is incomplete. If the
/// gateway fails the cart is left exactly as it was, so the caller can
/// retry.
pub async fn place_order<S, G>(
    cart: &mut PersistedCart<S>,
    form: &CheckoutForm,
    gateway: &G,
) -> Result<OrderConfirmation, CommerceError>
where
    S: CartStorage,
    G: OrderGateway + ?Sized,
{
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    form.validate()?;

    let request = OrderRequest::new(cart.items(), CustomerInfo::from(form));
    let order_id = match gateway.submit(&request).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "order submission failed");
            return Err(e);
        }
    };

    cart.clear();
    tracing::info!(
        order_id = %order_id,
        subtotal = %request.subtotal,
        total_qty = request.total_qty,
        "order placed"
    );

    Ok(OrderConfirmation {
        order_id,
        items: request.items,
        subtotal: request.subtotal,
        total_qty: request.total_qty,
        customer: request.customer,
        placed_at: Utc::now(),
    })
}
