use crate::cloud::{Error, Result};
use std::future::Future;
use tokio::sync::oneshot;

/// Runs `future` on its own task and waits for its result on a oneshot channel.
///
/// The caller awaits right away, so operations still run one after another;
/// the task only isolates the operation (and its file handles or clients) from
/// the caller.
///
/// # Errors
/// Will return the operation's own error, or `Error::Task` if the task ended
/// without sending a result
pub async fn run<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = oneshot::channel();

    tokio::spawn(async move {
        let _ = sender.send(future.await);
    });

    receiver.await.map_err(|e| Error::Task(e.to_string()))?
}
