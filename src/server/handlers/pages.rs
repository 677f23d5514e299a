//! Page handlers.
//!
//! Every page goes through [`Layout::respond`](crate::layout::Layout::respond),
//! so htmx navigations receive only the `#main-content` fragment.

use axum::extract::State;

use super::super::templates;
use super::super::AppState;
use crate::html::Node;
use crate::htmx::HtmxRequest;

/// Homepage with feature showcase.
pub async fn index(State(state): State<AppState>, hx: HtmxRequest) -> Node {
    state.layout.respond(&hx, templates::home_content)
}

/// All alert kinds.
pub async fn alerts(State(state): State<AppState>, hx: HtmxRequest) -> Node {
    let dismiss_after = state.config.alert_dismiss_after();
    state
        .layout
        .respond(&hx, || templates::alerts_content(dismiss_after))
}

/// Library feature overview.
pub async fn features(State(state): State<AppState>, hx: HtmxRequest) -> Node {
    state.layout.respond(&hx, templates::features_content)
}
