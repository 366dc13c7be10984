use crate::{
    cli::envelope,
    cloud::{Provider, actions::PutObject},
};
use anyhow::{Context, Result};
use std::{io::Write, sync::Arc};

/// # Errors
/// Will return an error if the file can not be opened or the upload fails
pub async fn handle<P: Provider, W: Write>(
    provider: &Arc<P>,
    action: PutObject,
    out: &mut W,
) -> Result<()> {
    let provider = Arc::clone(provider);

    envelope::run(async move {
        // the file is owned by this task and closed when the request returns
        let file = action.open().await?;
        let store = provider.object_store().await?;
        action.request(&store, file).await
    })
    .await
    .context("Error uploading file")?;

    writeln!(out, "File uploaded successfully")?;

    Ok(())
}
