//! Checkout: the customer form and order placement.

mod form;
mod order;

pub use form::{CheckoutField, CheckoutForm, FieldError, ValidationErrors};
pub use order::{
    place_order, CustomerInfo, MockOrderGateway, OrderConfirmation, OrderGateway, OrderRequest,
    DEFAULT_ORDER_LATENCY,
};
