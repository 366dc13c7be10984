use crate::{
    cli::envelope,
    cloud::{Provider, actions::ListFunctions},
};
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// # Errors
/// Will return an error if the functions can not be listed
pub async fn handle<P: Provider, W: Write>(provider: &Arc<P>, out: &mut W) -> Result<()> {
    let provider = Arc::clone(provider);

    let functions = envelope::run(async move {
        let service = provider.function_service().await?;
        ListFunctions::new().request(&service).await
    })
    .await
    .context("Error listing lambda functions")?;

    for function in functions {
        writeln!(out, "- {function}")?;
    }

    Ok(())
}
