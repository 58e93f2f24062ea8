//! One-shot fetch of a record listing, tied to the lifetime of a view.
//!
//! Activating a [`FetchController`] issues exactly one request. The controller
//! moves from `Loading` to either `Ready` or `Failed` and never goes back.
//! Tearing the controller down does not abort the request: the result is
//! dropped when it arrives instead of being published.
//!
use dex_screener::{JsonSource, ProviderError};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// The only failure a view ever sees, whatever went wrong upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Failed to fetch data")]
pub struct FetchFailed;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<R> {
    Loading,
    Ready(Vec<R>),
    Failed(FetchFailed),
}

impl<R> FetchState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

pub struct FetchController<R> {
    state: watch::Receiver<FetchState<R>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<R> FetchController<R>
where
    R: DeserializeOwned + Send + Sync + 'static,
{
    /// Starts the fetch of `url`. Must be called from within a tokio runtime.
    pub fn activate<S>(source: Arc<S>, url: String) -> Self
    where
        S: JsonSource + ?Sized + 'static,
    {
        let (tx, rx) = watch::channel(FetchState::Loading);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_fetch(source, url, tx, cancel.clone()));

        Self {
            state: rx,
            cancel,
            task: Some(task),
        }
    }
}

impl<R> FetchController<R> {
    pub fn state(&self) -> FetchState<R>
    where
        R: Clone,
    {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<R>> {
        self.state.clone()
    }

    /// Waits for the terminal state.
    /// A fetch task that vanished without settling counts as a failure.
    pub async fn settled(&mut self) -> FetchState<R>
    where
        R: Clone,
    {
        match self.state.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => FetchState::Failed(FetchFailed),
        }
    }

    /// Marks the view as gone. Returns the fetch task so callers can wait
    /// for the in-flight request to drain.
    pub fn teardown(mut self) -> Option<JoinHandle<()>> {
        self.cancel.cancel();
        self.task.take()
    }
}

impl<R> Drop for FetchController<R> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_fetch<R, S>(
    source: Arc<S>,
    url: String,
    tx: watch::Sender<FetchState<R>>,
    cancel: CancellationToken,
) where
    R: DeserializeOwned,
    S: JsonSource + ?Sized,
{
    let state = match fetch_records::<R, S>(source.as_ref(), &url).await {
        Ok(records) => {
            debug!(url = %url, count = records.len(), "records fetched");
            FetchState::Ready(records)
        }
        Err(e) => {
            warn!(url = %url, error = %e, "fetch failed");
            FetchState::Failed(FetchFailed)
        }
    };

    if cancel.is_cancelled() {
        debug!(url = %url, "view torn down before the fetch settled, result discarded");
        return;
    }

    tx.send_replace(state);
}

async fn fetch_records<R, S>(source: &S, url: &str) -> Result<Vec<R>, ProviderError>
where
    R: DeserializeOwned,
    S: JsonSource + ?Sized,
{
    let body = source.get_json(url).await?;
    Ok(serde_json::from_value(body)?)
}
