//! Currency-conversion rate response model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PlategaError, Result};
use crate::models::{object_fields, take_field};

/// Conversion rate for a payment method.
///
/// The fields are `Option` so the lenient path can represent a drifted
/// body; [`RateResponse::parse_strict`] enforces that everything but
/// `updated_at` is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateResponse {
    #[serde(rename = "paymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<i64>,
    #[serde(rename = "currencyFrom", skip_serializing_if = "Option::is_none")]
    pub currency_from: Option<String>,
    #[serde(rename = "currencyTo", skip_serializing_if = "Option::is_none")]
    pub currency_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Fields the API sent that this SDK does not declare.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RateResponse {
    /// Strictly parse a decoded JSON body.
    ///
    /// Fails on type mismatches and when any of `paymentMethod`,
    /// `currencyFrom`, `currencyTo`, or `rate` is absent.
    pub fn parse_strict(value: &Value) -> Result<Self> {
        let parsed: Self = serde_json::from_value(value.clone())
            .map_err(|e| PlategaError::validation("RateResponse", e.to_string()))?;
        let required = [
            ("paymentMethod", parsed.payment_method.is_some()),
            ("currencyFrom", parsed.currency_from.is_some()),
            ("currencyTo", parsed.currency_to.is_some()),
            ("rate", parsed.rate.is_some()),
        ];
        for (field, present) in required {
            if !present {
                return Err(PlategaError::validation(
                    "RateResponse",
                    format!("missing required field `{field}`"),
                ));
            }
        }
        Ok(parsed)
    }

    /// Parse a decoded JSON body field by field, leaving anything
    /// absent or untypable unset. Never fails.
    pub fn parse_lenient(value: &Value) -> Self {
        let mut fields = object_fields(value);
        Self {
            payment_method: take_field(&mut fields, "paymentMethod"),
            currency_from: take_field(&mut fields, "currencyFrom"),
            currency_to: take_field(&mut fields, "currencyTo"),
            rate: take_field(&mut fields, "rate"),
            updated_at: take_field(&mut fields, "updatedAt"),
            extra: fields,
        }
    }
}
