use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{BackendApi, BackendError, BackendReply, ForwardRequest};

// Canned backend for use-case tests; records every requested path.
pub(crate) struct FakeBackend {
    outcome: Mutex<Option<Result<Value, BackendError>>>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub(crate) fn with_json(payload: Value) -> Self {
        Self::with_outcome(Ok(payload))
    }

    pub(crate) fn with_error(err: BackendError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<Value, BackendError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().expect("paths mutex poisoned").clone()
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn get_json(&self, path_and_query: &str) -> Result<Value, BackendError> {
        self.paths
            .lock()
            .expect("paths mutex poisoned")
            .push(path_and_query.to_string());
        self.outcome
            .lock()
            .expect("outcome mutex poisoned")
            .take()
            .expect("fake backend called more than once")
    }

    async fn forward(&self, request: ForwardRequest) -> Result<BackendReply, BackendError> {
        panic!("unexpected forward to {}", request.path_and_query);
    }
}
