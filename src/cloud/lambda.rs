use crate::cloud::{Error, FunctionService, Result, error::sdk_message};
use async_trait::async_trait;
use aws_sdk_lambda::{Client, primitives::Blob, types::InvocationType};

/// `FunctionService` backed by `aws_sdk_lambda`.
#[derive(Debug, Clone)]
pub struct LambdaService {
    client: Client,
}

impl LambdaService {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FunctionService for LambdaService {
    // <https://docs.aws.amazon.com/lambda/latest/api/API_ListFunctions.html>
    async fn list_functions(&self) -> Result<Vec<String>> {
        let mut pages = self.client.list_functions().into_paginator().send();
        let mut names = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| Error::List(sdk_message(&e)))?;
            names.extend(
                page.functions()
                    .iter()
                    .filter_map(|function| function.function_name().map(ToString::to_string)),
            );
        }

        Ok(names)
    }

    // <https://docs.aws.amazon.com/lambda/latest/api/API_Invoke.html>
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<()> {
        let rs = self
            .client
            .invoke()
            .function_name(function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .map_err(|e| Error::Invoke {
                function: function_name.to_string(),
                message: sdk_message(&e),
            })?;

        log::info!("status code: {}", rs.status_code());

        // the call itself succeeded but the function raised
        if let Some(function_error) = rs.function_error() {
            return Err(Error::Invoke {
                function: function_name.to_string(),
                message: format!("function error: {function_error}"),
            });
        }

        Ok(())
    }
}
