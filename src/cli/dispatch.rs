use crate::{
    cli::{Invocation, actions::Action},
    cloud::{actions, payload},
};
use std::path::Path;

/// Returns the actions requested by the flags, in the order they must run:
/// upload, notify, list buckets, list functions, list keys. Each one is
/// selected independently of the others.
#[must_use]
pub fn dispatch(invocation: &Invocation) -> Vec<Action> {
    let mut selected: Vec<Action> = Vec::new();

    // the key the notification refers to, resolved by the upload if any
    let mut key = invocation.key.clone();

    // PutObject
    if !invocation.bucket.is_empty() && !invocation.filepath.is_empty() {
        let action = actions::PutObject::new(
            &invocation.bucket,
            &invocation.key,
            Path::new(&invocation.filepath),
        );
        key.clone_from(&action.key);
        selected.push(Action::PutObject(action));
    }

    // Invoke
    if !invocation.lambda.is_empty() {
        let payload = payload::notification(&invocation.bucket, &key, &invocation.lambda);
        selected.push(Action::Notify(actions::Invoke::new(payload)));
    }

    // ListBuckets
    if invocation.list_buckets {
        selected.push(Action::ListBuckets);
    }

    // ListFunctions
    if invocation.list_functions {
        selected.push(Action::ListFunctions);
    }

    // ListObjectsV2
    if invocation.list_keys {
        if invocation.bucket.is_empty() {
            log::warn!("-keys requires -bucket, skipping key listing");
        } else {
            selected.push(Action::ListKeys(actions::ListObjectsV2::new(
                &invocation.bucket,
                invocation.prefix.clone(),
            )));
        }
    }

    if selected.is_empty() {
        log::info!("nothing to do");
    }

    selected
}
