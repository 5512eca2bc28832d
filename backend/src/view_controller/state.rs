//! Keeps the discovery view in step with its query parameters.
//!
//! Search text, sort choice and rating threshold arrive as `ViewUpdate`
//! messages, typically one per keystroke. `start_view_updater` applies them to
//! the shared parameters right away but only recomputes the view once the
//! channel has been quiet for the debounce period, so a burst of typing costs a
//! single pass through the query engine.
//!
//! The main components are:
//! - `ViewState`: clonable handle on the current parameters and last computed
//!   view. It is injected into the Actix application state in `main.rs`.
//! - `ViewUpdate`: one parameter change (or a request to reload the store).
//! - `start_view_updater`: the long-running task consuming those messages.

use crate::library::DishLibrary;
use crate::store::DishStore;
use chrono::Utc;
use common::model::query::{QueryParameters, SortOption};
use common::model::view::DiscoveryView;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::time::timeout;

/// Shared handle on the discovery screen state.
#[derive(Clone)]
pub struct ViewState {
    /// Parameters as last requested, already applied even while a recompute is pending.
    pub params: Arc<RwLock<QueryParameters>>,
    /// Last computed view. Readers always see a complete view.
    pub view: Arc<RwLock<DiscoveryView>>,
    /// Number of recomputations so far; lets clients tell whether `view` moved.
    pub generation: Arc<AtomicU64>,
    pub tx: mpsc::Sender<ViewUpdate>,
}

impl ViewState {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ViewUpdate>) {
        let (tx, rx) = mpsc::channel(capacity);
        let state = ViewState {
            params: Arc::new(RwLock::new(QueryParameters::default())),
            view: Arc::new(RwLock::new(DiscoveryView::default())),
            generation: Arc::new(AtomicU64::new(0)),
            tx,
        };
        (state, rx)
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub enum ViewUpdate {
    Search(String),
    Sort(SortOption),
    MinRating(f64),
    /// Reload the snapshot from the store before recomputing.
    Refresh,
}

/// Applies parameter changes and recomputes the view after `debounce` of quiet.
///
/// Spawned once from `main.rs` and runs for the life of the server.
pub async fn start_view_updater<S: DishStore>(
    state: ViewState,
    library: Arc<RwLock<DishLibrary<S>>>,
    mut rx: mpsc::Receiver<ViewUpdate>,
    debounce: Duration,
) {
    while let Some(first) = rx.recv().await {
        let mut burst = vec![first];
        while let Ok(Some(update)) = timeout(debounce, rx.recv()).await {
            burst.push(update);
        }

        let mut reload = false;
        {
            let mut params = state.params.write().await;
            for update in burst.drain(..) {
                match update {
                    ViewUpdate::Search(search) => params.search = search,
                    ViewUpdate::Sort(sort) => params.sort = sort,
                    ViewUpdate::MinRating(min_rating) => params.min_rating = min_rating,
                    ViewUpdate::Refresh => reload = true,
                }
            }
        }

        if reload {
            library.write().await.refresh();
        }

        let params = state.params.read().await.clone();
        let view = library.read().await.discovery(&params, Utc::now());
        debug!(
            "Discovery view recomputed: {} dishes for {:?}",
            view.dishes.len(),
            params
        );
        *state.view.write().await = view;
        state.generation.fetch_add(1, Ordering::SeqCst);
    }
}
