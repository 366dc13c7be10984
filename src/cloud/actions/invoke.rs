use crate::cloud::{FunctionService, Payload, Result, payload};

/// Notifies the function named by the payload's `lambdaName` entry, sending the
/// whole payload as its JSON request body.
#[derive(Debug)]
pub struct Invoke {
    pub payload: Payload,
}

impl Invoke {
    #[must_use]
    pub const fn new(payload: Payload) -> Self {
        Self { payload }
    }

    /// # Errors
    ///
    /// Will return `Error::Payload` if `lambdaName` is missing,
    /// `Error::Serialize` if the payload can not be encoded and
    /// `Error::Invoke` if the invocation fails
    pub async fn request<F: FunctionService + ?Sized>(&self, service: &F) -> Result<()> {
        let function_name = payload::function_name(&self.payload)?;
        let body = serde_json::to_vec(&self.payload)?;

        log::info!("invoking {function_name}");
        log::debug!("payload: {}", String::from_utf8_lossy(&body));

        service.invoke(function_name, body).await
    }
}
