use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::watch;

use crate::{FetchState, RepositoryFetcher};

/// Keeps the loading flag raised while a fetch is in flight.
///
/// Dropping the guard before [`LoadingGuard::settle`] lowers the flag, this
/// covers a panicking fetcher and a dropped fetch future.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<FetchState>,
    settled: bool,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<FetchState>) -> Self {
        state.send_modify(FetchState::start_loading);

        Self {
            state,
            settled: false,
        }
    }

    /// Applies the outcome of the fetch as a single state update.
    fn settle(mut self, apply: impl FnOnce(&mut FetchState)) {
        self.settled = true;
        self.state.send_modify(apply);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.send_modify(FetchState::stop_loading);
        }
    }
}

/// Drives a [`RepositoryFetcher`] and publishes the resulting [`FetchState`].
///
/// Concurrent calls to [`FetchStateController::fetch_repositories`] are not
/// fenced: each overwrites the state when it completes, so the last call to
/// complete wins.
pub struct FetchStateController {
    fetcher: Arc<dyn RepositoryFetcher>,
    state: watch::Sender<FetchState>,
}

impl FetchStateController {
    /// Creates a new `FetchStateController` with an empty state.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        let (state, _) = watch::channel(FetchState::default());

        Self { fetcher, state }
    }

    /// Subscribes to state changes, dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Retrieves a snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Fetches the repositories of the given user and publishes the outcome.
    pub async fn fetch_repositories(&self, username: &str) {
        info!("Fetching repositories of user '{username}'");
        let guard = LoadingGuard::start(&self.state);
        let outcome = self.fetcher.fetch(username).await;

        match outcome {
            Ok(repositories) => {
                info!(
                    "Publishing {} repositories of user '{username}'",
                    repositories.len()
                );
                guard.settle(|state| state.succeed(repositories));
            }
            Err(e) => {
                error!("Failed to fetch repositories of user '{username}': {e}");
                guard.settle(|state| state.fail(e.to_string()));
            }
        }
        debug!("Published {}", self.state());
    }
}
