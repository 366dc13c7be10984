use crate::cloud::{Error, Result};
use std::collections::BTreeMap;

pub const BUCKET: &str = "bucket";
pub const KEY: &str = "key";
pub const LAMBDA_NAME: &str = "lambdaName";

/// Notification sent to a function after an upload, serialized as a flat JSON
/// object of strings.
pub type Payload = BTreeMap<String, String>;

/// Builds the notification payload; all three entries are always present,
/// even when empty.
#[must_use]
pub fn notification(bucket: &str, key: &str, lambda_name: &str) -> Payload {
    Payload::from([
        (BUCKET.to_string(), bucket.to_string()),
        (KEY.to_string(), key.to_string()),
        (LAMBDA_NAME.to_string(), lambda_name.to_string()),
    ])
}

/// Name of the function the payload is addressed to.
///
/// # Errors
/// Will return `Error::Payload` if `lambdaName` is missing
pub fn function_name(payload: &Payload) -> Result<&str> {
    payload
        .get(LAMBDA_NAME)
        .map(String::as_str)
        .ok_or_else(|| Error::Payload(format!("missing \"{LAMBDA_NAME}\"")))
}
