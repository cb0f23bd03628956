//! A thin query accessor over `use_resource`.

use std::future::Future;

use dioxus::prelude::*;
use skycast_shared::ApiError;

/// Handle over an asynchronous, refetchable read.
///
/// Wraps the resource together with a fetch-in-flight flag so screens can
/// distinguish "no data yet" (`is_loading`) from "refreshing settled data"
/// (`is_fetching`).
pub struct Query<T: 'static> {
    resource: Resource<Result<Option<T>, ApiError>>,
    fetching: Signal<bool>,
}

impl<T: 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Query<T> {}

/// Hook that runs `fetch` once immediately and again whenever a signal it
/// reads synchronously changes. Restarting a run discards the stale
/// in-flight result in favor of the new one.
///
/// The future resolves to `Ok(None)` when there is nothing to fetch yet
/// (e.g. coordinates are still unknown).
pub fn use_query<T, F>(mut fetch: impl FnMut() -> F + 'static) -> Query<T>
where
    T: 'static,
    F: Future<Output = Result<Option<T>, ApiError>> + 'static,
{
    let mut fetching = use_signal(|| false);
    let resource = use_resource(move || {
        // Build the future synchronously so signal reads inside `fetch`
        // register as dependencies of the resource.
        let fut = fetch();
        async move {
            fetching.set(true);
            let result = fut.await;
            fetching.set(false);
            result
        }
    });

    Query { resource, fetching }
}

impl<T: Clone + 'static> Query<T> {
    /// Latest settled data, if any.
    pub fn data(&self) -> Option<T> {
        match &*self.resource.read() {
            Some(Ok(Some(value))) => Some(value.clone()),
            _ => None,
        }
    }

    /// Error of the latest settled run, if it failed.
    pub fn error(&self) -> Option<ApiError> {
        match &*self.resource.read() {
            Some(Err(err)) => Some(err.clone()),
            _ => None,
        }
    }

    /// True until the first run settles.
    pub fn is_loading(&self) -> bool {
        self.resource.read().is_none()
    }

    /// True while any run is in flight, including refetches of settled data.
    pub fn is_fetching(&self) -> bool {
        *self.fetching.read()
    }

    /// Re-run the query, discarding any in-flight run.
    pub fn refetch(&self) {
        let mut resource = self.resource;
        resource.restart();
    }
}
