//! Blocking HTTP client for the Platega API.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{HttpError, PlategaError, Result};
use crate::models::{
    CreateTransactionRequest, CreateTransactionResponse, RateResponse, TransactionStatusResponse,
};

const BASE_URL: &str = "https://app.platega.io";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Platega API client.
///
/// Holds the merchant credentials and a reusable connection context:
/// every outgoing request carries the `X-MerchantId` and `X-Secret`
/// headers plus JSON content-type/accept headers, and is bounded by the
/// configured timeout. The client is immutable after construction and
/// safe to share across threads.
pub struct PlategaClient {
    http: Client,
    merchant_id: String,
    base_url: String,
}

impl PlategaClient {
    /// Client with the default 15 second request timeout.
    pub fn new(merchant_id: &str, secret: &str) -> Result<Self> {
        Self::with_timeout(merchant_id, secret, DEFAULT_TIMEOUT)
    }

    /// Client with an explicit request timeout.
    pub fn with_timeout(merchant_id: &str, secret: &str, timeout: Duration) -> Result<Self> {
        Self::build(merchant_id, secret, timeout, BASE_URL)
    }

    /// Test seam: same client, explicit endpoint.
    #[doc(hidden)]
    pub fn with_base_url(
        merchant_id: &str,
        secret: &str,
        timeout: Duration,
        base_url: &str,
    ) -> Result<Self> {
        Self::build(merchant_id, secret, timeout, base_url)
    }

    fn build(merchant_id: &str, secret: &str, timeout: Duration, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-MerchantId",
            HeaderValue::from_str(merchant_id)
                .map_err(|e| PlategaError::Config(format!("merchant id is not a valid header value: {e}")))?,
        );
        headers.insert(
            "X-Secret",
            HeaderValue::from_str(secret)
                .map_err(|e| PlategaError::Config(format!("secret is not a valid header value: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PlategaError::Config(e.to_string()))?;

        Ok(Self {
            http,
            merchant_id: merchant_id.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new transaction.
    pub fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse> {
        let url = format!("{}/transaction/process", self.base_url);
        tracing::debug!(%url, id = %request.id, "creating transaction");
        let resp = self.http.post(&url).json(request).send()?;
        let body = Self::success_body(resp)?;
        parse_with_fallback(
            &body,
            CreateTransactionResponse::parse_strict,
            CreateTransactionResponse::parse_lenient,
        )
    }

    /// Fetch the status of a transaction by its identifier.
    pub fn get_transaction_status(&self, transaction_id: &str) -> Result<TransactionStatusResponse> {
        let url = format!("{}/transaction/{}", self.base_url, transaction_id);
        tracing::debug!(%url, "fetching transaction status");
        let resp = self.http.get(&url).send()?;
        let body = Self::success_body(resp)?;
        parse_with_fallback(
            &body,
            TransactionStatusResponse::parse_strict,
            TransactionStatusResponse::parse_lenient,
        )
    }

    /// Fetch the conversion rate for a payment method.
    ///
    /// `merchant_id` overrides the instance's own merchant id in the
    /// query string when given.
    pub fn get_rate(
        &self,
        payment_method: i64,
        currency_from: &str,
        currency_to: &str,
        merchant_id: Option<&str>,
    ) -> Result<RateResponse> {
        let url = format!("{}/rates/payment_method_rate", self.base_url);
        let merchant = merchant_id.unwrap_or(&self.merchant_id);
        tracing::debug!(%url, payment_method, "fetching rate");
        let payment_method = payment_method.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("merchantId", merchant),
                ("paymentMethod", payment_method.as_str()),
                ("currencyFrom", currency_from),
                ("currencyTo", currency_to),
            ])
            .send()?;
        let body = Self::success_body(resp)?;
        parse_with_fallback(&body, RateResponse::parse_strict, RateResponse::parse_lenient)
    }

    /// Split the transport response at the status-class boundary: a
    /// non-2xx becomes [`HttpError`], a 2xx yields the decoded body.
    fn success_body(resp: Response) -> Result<Value> {
        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            tracing::warn!(status = %status, "request failed");
            return Err(normalize_failure(status, text).into());
        }
        tracing::debug!(status = %status, "request succeeded");
        Ok(serde_json::from_str(&text)?)
    }
}

/// Derive a structured error from a non-success response.
///
/// Prefers the body's `message` field, then the whole decoded body,
/// then the raw text, then the status reason phrase.
fn normalize_failure(status: StatusCode, text: String) -> HttpError {
    let message = match serde_json::from_str::<Value>(&text) {
        Ok(body) => match body.get("message") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            Some(Value::Null) | None => body.to_string(),
            Some(other) => other.to_string(),
        },
        Err(_) if text.is_empty() => status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_u16().to_string()),
        Err(_) => text.clone(),
    };
    HttpError {
        status_code: status.as_u16(),
        message,
        response: Some(text),
    }
}

/// Strict-then-lenient response parsing: validation failures are
/// recovered locally, anything else propagates.
fn parse_with_fallback<T>(
    body: &Value,
    strict: fn(&Value) -> Result<T>,
    lenient: fn(&Value) -> T,
) -> Result<T> {
    match strict(body) {
        Ok(parsed) => Ok(parsed),
        Err(PlategaError::Validation { model, reason }) => {
            tracing::debug!(model, reason = %reason, "strict parse failed, falling back to lenient");
            Ok(lenient(body))
        }
        Err(e) => Err(e),
    }
}
