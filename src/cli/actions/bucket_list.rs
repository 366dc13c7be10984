use crate::{
    cli::envelope,
    cloud::{Provider, actions::ListBuckets},
};
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// # Errors
/// Will return an error if the buckets can not be listed
pub async fn handle<P: Provider, W: Write>(provider: &Arc<P>, out: &mut W) -> Result<()> {
    let provider = Arc::clone(provider);

    let buckets = envelope::run(async move {
        let store = provider.object_store().await?;
        ListBuckets::new().request(&store).await
    })
    .await
    .context("Error listing buckets")?;

    writeln!(out, "S3 buckets:")?;
    for bucket in buckets {
        writeln!(out, "- {bucket}")?;
    }

    Ok(())
}
