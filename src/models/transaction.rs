//! Transaction response models.
//!
//! The create and status responses are deliberately asymmetric to the
//! request shape: the API returns `paymentDetails` as an opaque string
//! on creation and as a JSON object on status checks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlategaError, Result};
use crate::models::{object_fields, take_field};

/// Server response to a transaction creation call.
///
/// Every declared field is optional: the API omits fields freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    #[serde(rename = "paymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(rename = "transactionId", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// URL the payer should be redirected to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(rename = "paymentDetails", skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "expiresIn", skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    #[serde(rename = "merchantId", skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(rename = "usdtRate", skip_serializing_if = "Option::is_none")]
    pub usdt_rate: Option<f64>,
    /// Fields the API sent that this SDK does not declare.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateTransactionResponse {
    /// Strictly parse a decoded JSON body; fails on type mismatches.
    pub fn parse_strict(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| PlategaError::validation("CreateTransactionResponse", e.to_string()))
    }

    /// Parse a decoded JSON body field by field, leaving anything
    /// absent or untypable unset. Never fails.
    pub fn parse_lenient(value: &Value) -> Self {
        let mut fields = object_fields(value);
        Self {
            payment_method: take_field(&mut fields, "paymentMethod"),
            transaction_id: take_field(&mut fields, "transactionId"),
            redirect: take_field(&mut fields, "redirect"),
            return_url: take_field(&mut fields, "return"),
            payment_details: take_field(&mut fields, "paymentDetails"),
            status: take_field(&mut fields, "status"),
            expires_in: take_field(&mut fields, "expiresIn"),
            merchant_id: take_field(&mut fields, "merchantId"),
            usdt_rate: take_field(&mut fields, "usdtRate"),
            extra: fields,
        }
    }
}

/// Server response to a transaction status check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionStatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// A JSON object here, unlike the creation response.
    #[serde(rename = "paymentDetails", skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<Map<String, Value>>,
    #[serde(rename = "merchantName", skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    /// The wire name really is `mechantId`; the API misspells it.
    #[serde(rename = "mechantId", skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    /// Wire name `comission`, misspelled upstream as well.
    #[serde(rename = "comission", skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
    #[serde(rename = "paymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(rename = "expiresIn", skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
    #[serde(rename = "accountData", skip_serializing_if = "Option::is_none")]
    pub account_data: Option<String>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Fields the API sent that this SDK does not declare.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionStatusResponse {
    /// Strictly parse a decoded JSON body; fails on type mismatches.
    pub fn parse_strict(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| PlategaError::validation("TransactionStatusResponse", e.to_string()))
    }

    /// Parse a decoded JSON body field by field, leaving anything
    /// absent or untypable unset. Never fails.
    pub fn parse_lenient(value: &Value) -> Self {
        let mut fields = object_fields(value);
        Self {
            id: take_field(&mut fields, "id"),
            status: take_field(&mut fields, "status"),
            payment_details: take_field(&mut fields, "paymentDetails"),
            merchant_name: take_field(&mut fields, "merchantName"),
            merchant_id: take_field(&mut fields, "mechantId"),
            commission: take_field(&mut fields, "comission"),
            payment_method: take_field(&mut fields, "paymentMethod"),
            expires_in: take_field(&mut fields, "expiresIn"),
            account_data: take_field(&mut fields, "accountData"),
            return_url: take_field(&mut fields, "return"),
            extra: fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_parse_keeps_unknown_fields() {
        let parsed = CreateTransactionResponse::parse_strict(&json!({
            "transactionId": "t-42",
            "redirect": "https://pay.example/42",
            "brandNewField": {"nested": 1},
        }))
        .unwrap();
        assert_eq!(parsed.transaction_id.as_deref(), Some("t-42"));
        assert_eq!(parsed.extra.get("brandNewField"), Some(&json!({"nested": 1})));
    }

    #[test]
    fn strict_parse_rejects_type_mismatch() {
        let err = CreateTransactionResponse::parse_strict(&json!({
            "usdtRate": "ninety",
        }))
        .unwrap_err();
        assert!(matches!(err, PlategaError::Validation { .. }));
    }

    #[test]
    fn lenient_parse_never_fails_on_drifted_shape() {
        let parsed = CreateTransactionResponse::parse_lenient(&json!({
            "transactionId": "t-42",
            "usdtRate": "ninety",
        }));
        assert_eq!(parsed.transaction_id.as_deref(), Some("t-42"));
        assert_eq!(parsed.usdt_rate, None);
        // the untypable value stays retrievable
        assert_eq!(parsed.extra.get("usdtRate"), Some(&json!("ninety")));
    }

    #[test]
    fn lenient_parse_of_non_object_is_fully_unset() {
        let parsed = TransactionStatusResponse::parse_lenient(&json!([1, 2, 3]));
        assert_eq!(parsed.id, None);
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn status_response_reads_misspelled_wire_names() {
        let parsed = TransactionStatusResponse::parse_strict(&json!({
            "id": "t1",
            "mechantId": "M-7",
            "comission": 1.5,
            "return": "https://x/ok",
        }))
        .unwrap();
        assert_eq!(parsed.merchant_id.as_deref(), Some("M-7"));
        assert_eq!(parsed.commission, Some(1.5));
        assert_eq!(parsed.return_url.as_deref(), Some("https://x/ok"));
        // correctly spelled keys are not part of this contract
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn status_response_payment_details_is_an_object() {
        let parsed = TransactionStatusResponse::parse_strict(&json!({
            "id": "t1",
            "paymentDetails": {"card": "1234", "bank": "X"},
        }))
        .unwrap();
        let details = parsed.payment_details.unwrap();
        assert_eq!(details.get("card"), Some(&json!("1234")));
    }

    #[test]
    fn extra_fields_survive_reserialization() {
        let body = json!({
            "id": "t1",
            "status": "PENDING",
            "futureField": 7,
        });
        let parsed = TransactionStatusResponse::parse_strict(&body).unwrap();
        let emitted = serde_json::to_value(&parsed).unwrap();
        assert_eq!(emitted, body);
    }
}
