//! Drives the search domain: applies messages and polls the futures that
//! `update` hands back, feeding their results in as new messages.
//!
//! Everything runs on the caller's task, so state is only ever touched from
//! one logical thread even though many requests can be outstanding.

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;

use crate::domains::search::{Message, SearchDomain, SearchState, update};
use crate::infra::Task;

pub struct SearchRuntime {
    domain: SearchDomain,
    pending: FuturesUnordered<BoxFuture<'static, Message>>,
}

impl std::fmt::Debug for SearchRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRuntime")
            .field("domain", &self.domain)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl SearchRuntime {
    pub fn new(domain: SearchDomain) -> Self {
        Self {
            domain,
            pending: FuturesUnordered::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.domain.state
    }

    pub fn domain(&self) -> &SearchDomain {
        &self.domain
    }

    /// Apply `message` now and queue whatever work it produced.
    pub fn dispatch(&mut self, message: Message) {
        let task = update(&mut self.domain, message);
        self.enqueue(task);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Wait for the next outstanding future and apply its message. Returns
    /// the message name, or `None` when nothing is pending.
    pub async fn next(&mut self) -> Option<&'static str> {
        let message = self.pending.next().await?;
        let name = message.as_str();
        self.dispatch(message);
        Some(name)
    }

    /// Apply results until no work is left.
    pub async fn run_until_idle(&mut self) {
        while self.next().await.is_some() {}
    }

    fn enqueue(&mut self, task: Task<Message>) {
        for future in task.into_futures() {
            self.pending.push(future);
        }
    }
}
