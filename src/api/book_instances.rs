//! Book instance (copy) endpoints

use axum::{
    extract::{Path, State},
    Form,
};

use crate::{error::AppResult, forms::FormFields, render::Outcome, workflow, AppState};

pub async fn list(State(state): State<AppState>) -> AppResult<Outcome> {
    state.services.book_instances.list().await
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Outcome> {
    state.services.book_instances.detail(id).await
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Outcome> {
    workflow::create_form(&state.services.book_instances).await
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Outcome> {
    workflow::create_submit(&state.services.book_instances, &FormFields::from_pairs(pairs)).await
}

pub async fn update_form(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Outcome> {
    workflow::update_form(&state.services.book_instances, id).await
}

pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Outcome> {
    workflow::update_submit(&state.services.book_instances, id, &FormFields::from_pairs(pairs))
        .await
}

pub async fn delete_form(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Outcome> {
    workflow::delete_form(&state.services.book_instances, id).await
}

pub async fn delete_submit(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Outcome> {
    workflow::delete_submit(&state.services.book_instances, id).await
}
