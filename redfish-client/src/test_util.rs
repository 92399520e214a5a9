// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-crate test support: a canned-document connector and a discard
//! logger.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use http::Method;
use http::StatusCode;
use serde_json::Value;
use slog::o;
use slog::Logger;

use crate::connector::Connector;
use crate::connector::ConnectorError;

/// A [`Connector`] serving documents from a map and recording every
/// post. Paths with no document respond like an HTTP 404.
#[derive(Default)]
pub(crate) struct FakeConnector {
    docs: Mutex<HashMap<String, Value>>,
    posts: Mutex<Vec<(String, Value)>>,
}

impl FakeConnector {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn insert(&self, path: &str, doc: Value) {
        self.docs.lock().unwrap().insert(path.to_string(), doc);
    }

    pub(crate) fn remove(&self, path: &str) {
        self.docs.lock().unwrap().remove(path);
    }

    /// Every post made through this connector, in order.
    pub(crate) fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for FakeConnector {
    async fn get(&self, path: &str) -> Result<Value, ConnectorError> {
        match self.docs.lock().unwrap().get(path) {
            Some(doc) => Ok(doc.clone()),
            None => Err(ConnectorError::Status {
                method: Method::GET,
                url: path.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }

    async fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<(), ConnectorError> {
        self.posts
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        Ok(())
    }
}

pub(crate) fn test_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}
