//! Transaction creation request models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{PlategaError, Result};

/// Amount and currency of a requested payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub amount: f64,
    /// ISO currency code, e.g. `"RUB"`.
    pub currency: String,
    /// Undeclared fields, forwarded to the wire verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentDetails {
    pub fn new(amount: f64, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
            extra: Map::new(),
        }
    }
}

/// Request body for creating a transaction.
///
/// Serializes with the API's wire names (`return`, `failedUrl`,
/// `paymentDetails`), omits unset optional fields, and renders `id` as
/// its canonical hyphenated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Payment method identifier assigned by Platega.
    #[serde(rename = "paymentMethod")]
    pub payment_method: i64,
    /// Client-generated unique transaction identifier.
    pub id: Uuid,
    #[serde(rename = "paymentDetails")]
    pub payment_details: PaymentDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL the payer returns to after completing the payment.
    /// `return` is a keyword, hence the rename.
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(rename = "failedUrl", skip_serializing_if = "Option::is_none")]
    pub failed_url: Option<String>,
    /// Opaque value forwarded to the API unvalidated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Undeclared fields, forwarded to the wire verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateTransactionRequest {
    /// A request with the required fields set and everything else unset.
    pub fn new(payment_method: i64, id: Uuid, payment_details: PaymentDetails) -> Self {
        Self {
            payment_method,
            id,
            payment_details,
            description: None,
            return_url: None,
            failed_url: None,
            payload: None,
            extra: Map::new(),
        }
    }

    /// Strictly construct a request from a decoded JSON object.
    ///
    /// Fails with [`PlategaError::Validation`] when a required field is
    /// missing, a field has the wrong type, or `id` is not a valid UUID.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| PlategaError::validation("CreateTransactionRequest", e.to_string()))
    }
}
