//! A board view: one activation, one fetch, one rendered page.
//!
use dex_screener::{endpoint_url, JsonSource};
use std::sync::Arc;
use tracing::info;

use crate::fetch::FetchController;
use crate::render::{page, render_state, RecordShape};

/// Activates the view for `R`, waits for its fetch to settle and returns
/// the rendered page.
/// Dropping the returned future tears the view down.
pub async fn render_board<R, S>(source: Arc<S>, api_base_url: &str) -> String
where
    R: RecordShape,
    S: JsonSource + ?Sized + 'static,
{
    let url = endpoint_url::<R>(api_base_url);
    info!(view = R::TITLE, url = %url, "activating view");

    let mut controller = FetchController::<R>::activate(source, url);
    let state = controller.settled().await;

    page(R::TITLE, &render_state(&state))
}
