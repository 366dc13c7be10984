use crate::cloud::{
    Error, LambdaService, Provider, Result, S3Store,
    error::sdk_message,
};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig, meta::region::RegionProviderChain};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::Region;

const DEFAULT_REGION: &str = "us-east-1";

/// Client factory backed by the ambient AWS environment: environment
/// variables, shared config/credentials files, SSO, web identity and
/// container or instance metadata.
#[derive(Debug, Clone, Default)]
pub struct AwsProvider {
    region: Option<String>,
}

impl AwsProvider {
    #[must_use]
    pub const fn new(region: Option<String>) -> Self {
        Self { region }
    }

    /// Loads the shared configuration and makes sure credentials resolve.
    ///
    /// # Errors
    /// Will return `Error::Config` if no credentials can be found
    pub async fn load(&self) -> Result<SdkConfig> {
        let region_provider = RegionProviderChain::first_try(self.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(DEFAULT_REGION);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        let credentials = config
            .credentials_provider()
            .ok_or_else(|| Error::Config(String::from("no credentials provider configured")))?;

        credentials
            .provide_credentials()
            .await
            .map_err(|e| Error::Config(sdk_message(&e)))?;

        log::debug!("region: {:?}", config.region());

        Ok(config)
    }
}

#[async_trait]
impl Provider for AwsProvider {
    type Store = S3Store;
    type Functions = LambdaService;

    async fn object_store(&self) -> Result<S3Store> {
        let config = self.load().await?;
        Ok(S3Store::new(aws_sdk_s3::Client::new(&config)))
    }

    async fn function_service(&self) -> Result<LambdaService> {
        let config = self.load().await?;
        Ok(LambdaService::new(aws_sdk_lambda::Client::new(&config)))
    }
}
