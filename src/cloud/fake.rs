//! In-memory backend used by the unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::cloud::{Error, FunctionService, ObjectStore, ObjectsPage, Provider, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::{fs::File, io::AsyncReadExt};

#[derive(Debug, Default)]
pub struct StoreState {
    pub buckets: Vec<String>,
    pub pages: Vec<ObjectsPage>,
    // page index that fails
    pub fail_page: Option<usize>,
    pub fail_list_buckets: bool,
    pub fail_put: bool,
    pub puts: Vec<(String, String, Vec<u8>)>,
    pub list_buckets_calls: usize,
    pub list_requests: Vec<(String, Option<String>, Option<String>)>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    pub state: Arc<Mutex<StoreState>>,
}

impl FakeStore {
    pub fn with_pages(pages: Vec<ObjectsPage>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().pages = pages;
        store
    }

    pub fn with_buckets(buckets: &[&str]) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().buckets = buckets.iter().map(ToString::to_string).collect();
        store
    }
}

#[async_trait]
impl ObjectStore for FakeStore {
    async fn put_object(&self, bucket: &str, key: &str, mut file: File) -> Result<()> {
        let mut body = Vec::new();
        file.read_to_end(&mut body)
            .await
            .map_err(|e| Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let mut state = self.state.lock().unwrap();
        if state.fail_put {
            return Err(Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: String::from("AccessDenied"),
            });
        }
        state
            .puts
            .push((bucket.to_string(), key.to_string(), body));
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.list_buckets_calls += 1;
        if state.fail_list_buckets {
            return Err(Error::List(String::from("AccessDenied")));
        }
        Ok(state.buckets.clone())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ObjectsPage> {
        let mut state = self.state.lock().unwrap();
        let index = state.list_requests.len();
        state.list_requests.push((
            bucket.to_string(),
            prefix.map(ToString::to_string),
            continuation_token.map(ToString::to_string),
        ));

        if state.fail_page == Some(index) {
            return Err(Error::List(format!("page {index} failed")));
        }

        // the continuation token must chain from the previous page
        let expected = index
            .checked_sub(1)
            .and_then(|prev| state.pages.get(prev))
            .and_then(|page| page.next_continuation_token.clone());
        assert_eq!(continuation_token.map(ToString::to_string), expected);

        Ok(state.pages.get(index).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Default)]
pub struct FunctionsState {
    pub functions: Vec<String>,
    pub fail_list: bool,
    pub fail_invoke: bool,
    pub list_calls: usize,
    pub invocations: Vec<(String, Vec<u8>)>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeFunctions {
    pub state: Arc<Mutex<FunctionsState>>,
}

impl FakeFunctions {
    pub fn with_functions(functions: &[&str]) -> Self {
        let service = Self::default();
        service.state.lock().unwrap().functions =
            functions.iter().map(ToString::to_string).collect();
        service
    }
}

#[async_trait]
impl FunctionService for FakeFunctions {
    async fn list_functions(&self) -> Result<Vec<String>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.fail_list {
            return Err(Error::List(String::from("AccessDeniedException")));
        }
        Ok(state.functions.clone())
    }

    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_invoke {
            return Err(Error::Invoke {
                function: function_name.to_string(),
                message: String::from("ResourceNotFoundException"),
            });
        }
        state.invocations.push((function_name.to_string(), payload));
        Ok(())
    }
}

/// Hands out clones of the same fake clients, so tests can inspect what the
/// operations did.
#[derive(Debug, Clone, Default)]
pub struct FakeProvider {
    pub store: FakeStore,
    pub functions: FakeFunctions,
    pub config_error: bool,
}

#[async_trait]
impl Provider for FakeProvider {
    type Store = FakeStore;
    type Functions = FakeFunctions;

    async fn object_store(&self) -> Result<FakeStore> {
        if self.config_error {
            return Err(Error::Config(String::from("no credentials")));
        }
        Ok(self.store.clone())
    }

    async fn function_service(&self) -> Result<FakeFunctions> {
        if self.config_error {
            return Err(Error::Config(String::from("no credentials")));
        }
        Ok(self.functions.clone())
    }
}
