//! Deferred work returned from `update`.
//!
//! A [`Task`] is a bundle of futures that each resolve to a message. The
//! domain never awaits anything itself: `update` mutates state synchronously
//! and hands back the asynchronous half, which the runtime polls and feeds
//! back in as messages.

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

pub struct Task<T> {
    futures: Vec<BoxFuture<'static, T>>,
}

impl<T> std::fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("pending", &self.futures.len())
            .finish()
    }
}

impl<T: Send + 'static> Task<T> {
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    /// Run `future` and map its output into a message.
    pub fn perform<A, F, M>(future: F, map: M) -> Self
    where
        F: Future<Output = A> + Send + 'static,
        M: FnOnce(A) -> T + Send + 'static,
    {
        Self {
            futures: vec![future.map(map).boxed()],
        }
    }

    /// A task that immediately yields `value`.
    pub fn done(value: T) -> Self {
        Self {
            futures: vec![futures::future::ready(value).boxed()],
        }
    }

    pub fn batch(tasks: impl IntoIterator<Item = Task<T>>) -> Self {
        Self {
            futures: tasks.into_iter().flat_map(|task| task.futures).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.futures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.futures.is_empty()
    }

    pub fn into_futures(self) -> Vec<BoxFuture<'static, T>> {
        self.futures
    }

    /// Await every future concurrently and return the outputs in task order.
    pub async fn collect(self) -> Vec<T> {
        futures::future::join_all(self.futures).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn batch_flattens_and_preserves_order() {
        let task = Task::batch([
            Task::done(1),
            Task::none(),
            Task::perform(async { 20 }, |v| v + 1),
        ]);

        assert_eq!(task.len(), 2);
        assert_eq!(task.collect().await, vec![1, 21]);
    }

    #[test]
    fn none_is_empty() {
        let task: Task<u8> = Task::none();
        assert!(task.is_none());
    }
}
