use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marquee_model::{ItemDetail, ItemId, SearchPage};
use tokio::sync::oneshot;

use crate::infra::repository::{RepositoryError, RepositoryResult};
use crate::infra::services::api::ApiService;

type SearchKey = (String, u32);

#[derive(Debug)]
enum Scripted<T> {
    Ready(RepositoryResult<T>),
    Held(oneshot::Receiver<RepositoryResult<T>>),
}

/// Handle for a held response; the waiting call resolves when this is
/// completed, which lets tests choose the order responses arrive in.
#[derive(Debug)]
pub struct ResponseGate<T = SearchPage> {
    sender: oneshot::Sender<RepositoryResult<T>>,
}

impl<T> ResponseGate<T> {
    pub fn resolve(self, result: RepositoryResult<T>) {
        let _ = self.sender.send(result);
    }
}

#[derive(Debug, Default)]
struct InnerApiState {
    searches: HashMap<SearchKey, VecDeque<Scripted<SearchPage>>>,
    details: HashMap<ItemId, VecDeque<Scripted<ItemDetail>>>,
    search_calls: Vec<SearchKey>,
    detail_calls: Vec<ItemId>,
}

/// In-memory [`ApiService`] driven by scripted responses.
///
/// Unscripted calls fail with `QueryFailed` so a test never silently hits
/// an endpoint it did not expect.
#[derive(Debug, Clone)]
pub struct ScriptedApiService {
    inner: Arc<Mutex<InnerApiState>>,
    base_url: Arc<str>,
}

impl Default for ScriptedApiService {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

impl ScriptedApiService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(InnerApiState::default())),
            base_url: Arc::from(base_url.into()),
        }
    }

    /// Queue an immediate response for `(text, page)`.
    pub fn respond_search(
        &self,
        text: &str,
        page: u32,
        result: RepositoryResult<SearchPage>,
    ) {
        self.lock()
            .searches
            .entry((text.to_string(), page))
            .or_default()
            .push_back(Scripted::Ready(result));
    }

    /// Queue a response for `(text, page)` that waits for the returned gate.
    pub fn hold_search(&self, text: &str, page: u32) -> ResponseGate {
        let (sender, receiver) = oneshot::channel();
        self.lock()
            .searches
            .entry((text.to_string(), page))
            .or_default()
            .push_back(Scripted::Held(receiver));
        ResponseGate { sender }
    }

    pub fn respond_item(&self, id: ItemId, result: RepositoryResult<ItemDetail>) {
        self.lock()
            .details
            .entry(id)
            .or_default()
            .push_back(Scripted::Ready(result));
    }

    pub fn hold_item(&self, id: ItemId) -> ResponseGate<ItemDetail> {
        let (sender, receiver) = oneshot::channel();
        self.lock()
            .details
            .entry(id)
            .or_default()
            .push_back(Scripted::Held(receiver));
        ResponseGate { sender }
    }

    /// Every `(text, page)` the widget asked for, in call order.
    pub fn search_calls(&self) -> Vec<(String, u32)> {
        self.lock().search_calls.clone()
    }

    pub fn detail_calls(&self) -> Vec<ItemId> {
        self.lock().detail_calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InnerApiState> {
        self.inner.lock().expect("lock poisoned")
    }
}

async fn resolve<T>(scripted: Option<Scripted<T>>, what: String) -> RepositoryResult<T> {
    match scripted {
        Some(Scripted::Ready(result)) => result,
        Some(Scripted::Held(receiver)) => receiver.await.unwrap_or_else(|_| {
            Err(RepositoryError::Transport(format!("{what}: gate dropped")))
        }),
        None => Err(RepositoryError::QueryFailed(format!(
            "{what}: no scripted response"
        ))),
    }
}

#[async_trait]
impl ApiService for ScriptedApiService {
    async fn search_page(
        &self,
        text: &str,
        page: u32,
    ) -> RepositoryResult<SearchPage> {
        let key = (text.to_string(), page);
        let scripted = {
            let mut guard = self.lock();
            guard.search_calls.push(key.clone());
            guard
                .searches
                .get_mut(&key)
                .and_then(|queue| queue.pop_front())
        };
        resolve(scripted, format!("search '{text}' page {page}")).await
    }

    async fn fetch_item(&self, id: ItemId) -> RepositoryResult<ItemDetail> {
        let scripted = {
            let mut guard = self.lock();
            guard.detail_calls.push(id);
            guard.details.get_mut(&id).and_then(|queue| queue.pop_front())
        };
        resolve(scripted, format!("item {id}")).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
