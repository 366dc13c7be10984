use crate::cloud::{Provider, actions};
use anyhow::Result;
use std::{io::Write, sync::Arc};

pub mod bucket_list;
pub mod function_invoke;
pub mod function_list;
pub mod object_list;
pub mod object_put;

/// One operation requested on the command line.
#[derive(Debug)]
pub enum Action {
    PutObject(actions::PutObject),
    Notify(actions::Invoke),
    ListBuckets,
    ListFunctions,
    ListKeys(actions::ListObjectsV2),
}

impl Action {
    /// Runs the action on its own task and prints its result to `out`.
    ///
    /// # Errors
    /// Will return an error if the action fails
    pub async fn handle<P: Provider, W: Write>(self, provider: &Arc<P>, out: &mut W) -> Result<()> {
        match self {
            Self::PutObject(action) => object_put::handle(provider, action, out).await,
            Self::Notify(action) => function_invoke::handle(provider, action, out).await,
            Self::ListBuckets => bucket_list::handle(provider, out).await,
            Self::ListFunctions => function_list::handle(provider, out).await,
            Self::ListKeys(action) => object_list::handle(provider, action, out).await,
        }
    }
}

/// Runs the actions in order. The first failure stops the run and the
/// remaining actions are not attempted.
///
/// # Errors
/// Will return the error of the first action that fails
pub async fn run<P: Provider, W: Write>(
    provider: &Arc<P>,
    actions: Vec<Action>,
    out: &mut W,
) -> Result<()> {
    for action in actions {
        log::debug!("action: {action:?}");
        action.handle(provider, out).await?;
    }

    Ok(())
}
