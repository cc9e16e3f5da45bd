use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use super::AppState;

pub(super) async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.landing_html.clone())
}
