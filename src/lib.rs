//! Blocking Rust client for the Platega payment-processing API.
//!
//! The SDK exposes typed request/response models and three remote
//! operations: create a transaction, fetch a transaction's status, and
//! fetch a currency-conversion rate for a payment method.

pub mod client;
pub mod error;
pub mod models;

pub use client::PlategaClient;
pub use error::{HttpError, PlategaError, Result};
pub use models::{
    CreateTransactionRequest, CreateTransactionResponse, PaymentDetails, RateResponse,
    TransactionStatusResponse,
};
