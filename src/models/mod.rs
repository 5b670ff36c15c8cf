//! Wire contracts for the Platega API.
//!
//! Response models offer two construction paths: `parse_strict`, which
//! rejects type mismatches and missing required fields, and
//! `parse_lenient`, which never fails on a well-formed JSON object and
//! leaves untypable fields unset. Every model keeps keys it does not
//! declare in an `extra` map so upstream API additions survive a
//! parse/serialize round trip.

pub mod payment;
pub mod rate;
pub mod transaction;

pub use payment::{CreateTransactionRequest, PaymentDetails};
pub use rate::RateResponse;
pub use transaction::{CreateTransactionResponse, TransactionStatusResponse};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Pull `key` out of `map` and convert it to `T`, best-effort.
///
/// `null` counts as unset. A value that fails conversion is put back so
/// the caller's leftover map (the model's `extra`) loses nothing.
pub(crate) fn take_field<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = map.remove(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            map.insert(key.to_owned(), value);
            None
        }
    }
}

/// The object map of `value`, or an empty map for non-object JSON.
pub(crate) fn object_fields(value: &Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}
