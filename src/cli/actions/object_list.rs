use crate::{
    cli::envelope,
    cloud::{Provider, actions::ListObjectsV2},
};
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// Prints every key of the bucket as one debug formatted list.
///
/// # Errors
/// Will return an error if any page of the listing fails
pub async fn handle<P: Provider, W: Write>(
    provider: &Arc<P>,
    action: ListObjectsV2,
    out: &mut W,
) -> Result<()> {
    let provider = Arc::clone(provider);

    let keys = envelope::run(async move {
        let store = provider.object_store().await?;
        action.request(&store).await
    })
    .await
    .context("Error listing bucket keys")?;

    writeln!(out, "{keys:?}")?;

    Ok(())
}
