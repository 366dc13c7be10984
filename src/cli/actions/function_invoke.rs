use crate::{
    cli::envelope,
    cloud::{Provider, actions::Invoke, payload},
};
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// # Errors
/// Will return an error if the function could not be notified
pub async fn handle<P: Provider, W: Write>(
    provider: &Arc<P>,
    action: Invoke,
    out: &mut W,
) -> Result<()> {
    let function_name = payload::function_name(&action.payload)
        .context("Error notifying lambda function")?
        .to_string();

    let provider = Arc::clone(provider);

    envelope::run(async move {
        let service = provider.function_service().await?;
        action.request(&service).await
    })
    .await
    .context("Error notifying lambda function")?;

    writeln!(out, "Function {function_name} notified successfully")?;

    Ok(())
}
