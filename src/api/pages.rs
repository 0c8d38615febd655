//! Top-level pages

use axum::{extract::State, response::Redirect};

use crate::{error::AppResult, render::Outcome, AppState};

/// Catalog home page with collection counts.
pub async fn index(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.home.index().await
}

/// Site root redirects into the catalog.
pub async fn root() -> Redirect {
    Redirect::to("/catalog")
}
