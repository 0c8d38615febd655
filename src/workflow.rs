//! Generic create/update/delete workflow shared by every catalog entity.
//!
//! A submission moves through
//! `Received → Sanitized → {Valid → Persisted → Redirect} | {Invalid → Rendered-with-errors}`;
//! both branches are terminal and an invalid submission never reaches the
//! store. The four entity services instantiate [`CrudEntity`] once each and
//! the drivers below supply the shared shape.

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    error::AppResult,
    forms::FormFields,
    render::{Outcome, ViewModel},
    validation::ValidationFailure,
};

/// What the delete display/submit found for an entity.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteContext {
    /// Entity is gone; soft-fail to the list.
    Absent,
    /// Entity present with this many dependent records blocking deletion.
    Present { blockers: usize },
}

/// Per-entity instantiation of the shared CRUD workflow.
#[async_trait]
pub trait CrudEntity: Send + Sync {
    /// Sanitized submission, echoed back into the form on failure.
    type Form: Serialize + Send + Sync;

    fn form_view(&self) -> &'static str;
    fn confirm_view(&self) -> &'static str;
    /// Key under which the echoed form lands in the view-model.
    fn form_key(&self) -> &'static str;
    fn list_path(&self) -> &'static str;
    fn canonical_path(&self, id: i32) -> String;
    fn create_title(&self) -> &'static str;
    fn update_title(&self) -> &'static str;
    fn delete_title(&self) -> &'static str;

    /// Sanitize and validate raw fields. Never fails; an invalid submission
    /// comes back as a partial form plus a non-empty failure list.
    fn parse(&self, fields: &FormFields) -> (Self::Form, Vec<ValidationFailure>);

    /// Add reference lists to the model, marking any selections carried by
    /// `form`.
    async fn form_context(
        &self,
        form: Option<&Self::Form>,
        model: &mut ViewModel,
    ) -> AppResult<()> {
        let _ = (form, model);
        Ok(())
    }

    /// Pre-insert lookup for idempotent creates. A hit short-circuits the
    /// insert and redirects to the existing entity.
    async fn find_existing(&self, form: &Self::Form) -> AppResult<Option<i32>> {
        let _ = form;
        Ok(None)
    }

    async fn insert(&self, form: &Self::Form) -> AppResult<i32>;

    /// Persist in place. `Ok(false)` means the entity vanished and nothing
    /// was written.
    async fn replace(&self, id: i32, form: &Self::Form) -> AppResult<bool>;

    /// Load current values and reference lists into the update-form model.
    /// `Ok(false)` means the entity is absent.
    async fn load_for_update(&self, id: i32, model: &mut ViewModel) -> AppResult<bool>;

    /// Load the entity and its dependents into the delete-confirmation model.
    async fn load_for_delete(&self, id: i32, model: &mut ViewModel) -> AppResult<DeleteContext>;

    async fn remove(&self, id: i32) -> AppResult<()>;
}

/// Empty form for a new entity.
pub async fn create_form<E: CrudEntity>(entity: &E) -> AppResult<Outcome> {
    let mut model = ViewModel::new();
    model.insert("title", entity.create_title());
    entity.form_context(None, &mut model).await?;
    Ok(Outcome::view(entity.form_view(), model))
}

/// Validate and persist a new entity, or re-render the form with failures.
pub async fn create_submit<E: CrudEntity>(entity: &E, fields: &FormFields) -> AppResult<Outcome> {
    let (form, failures) = entity.parse(fields);
    if !failures.is_empty() {
        return rerender(entity, entity.create_title(), &form, failures).await;
    }
    if let Some(existing) = entity.find_existing(&form).await? {
        return Ok(Outcome::redirect(entity.canonical_path(existing)));
    }
    let id = entity.insert(&form).await?;
    tracing::info!(id, path = %entity.canonical_path(id), "created {}", entity.form_key());
    Ok(Outcome::redirect(entity.canonical_path(id)))
}

/// Pre-filled form for an existing entity. An absent entity silently
/// redirects to the list, unlike detail pages which 404; the inconsistency
/// is inherited and kept.
pub async fn update_form<E: CrudEntity>(entity: &E, id: i32) -> AppResult<Outcome> {
    let mut model = ViewModel::new();
    model.insert("title", entity.update_title());
    if !entity.load_for_update(id, &mut model).await? {
        return Ok(Outcome::redirect(entity.list_path()));
    }
    Ok(Outcome::view(entity.form_view(), model))
}

/// Validate and persist in place, preserving the identifier. An entity that
/// vanished between display and submit soft-fails to the list, same as the
/// display path.
pub async fn update_submit<E: CrudEntity>(
    entity: &E,
    id: i32,
    fields: &FormFields,
) -> AppResult<Outcome> {
    let (form, failures) = entity.parse(fields);
    if !failures.is_empty() {
        return rerender(entity, entity.update_title(), &form, failures).await;
    }
    if !entity.replace(id, &form).await? {
        return Ok(Outcome::redirect(entity.list_path()));
    }
    tracing::info!(id, "updated {}", entity.form_key());
    Ok(Outcome::redirect(entity.canonical_path(id)))
}

/// Confirmation view listing dependents, or redirect when already gone.
pub async fn delete_form<E: CrudEntity>(entity: &E, id: i32) -> AppResult<Outcome> {
    let mut model = ViewModel::new();
    model.insert("title", entity.delete_title());
    match entity.load_for_delete(id, &mut model).await? {
        DeleteContext::Absent => Ok(Outcome::redirect(entity.list_path())),
        DeleteContext::Present { .. } => Ok(Outcome::view(entity.confirm_view(), model)),
    }
}

/// Delete after re-checking dependents. Any dependent re-renders the
/// confirmation instead of deleting. The re-check and the delete are two
/// independent statements with no transaction around them; a dependent
/// created in between can slip through (see DESIGN.md).
pub async fn delete_submit<E: CrudEntity>(entity: &E, id: i32) -> AppResult<Outcome> {
    let mut model = ViewModel::new();
    model.insert("title", entity.delete_title());
    match entity.load_for_delete(id, &mut model).await? {
        DeleteContext::Absent => Ok(Outcome::redirect(entity.list_path())),
        DeleteContext::Present { blockers } if blockers > 0 => {
            Ok(Outcome::view(entity.confirm_view(), model))
        }
        DeleteContext::Present { .. } => {
            entity.remove(id).await?;
            tracing::info!(id, "deleted {}", entity.form_key());
            Ok(Outcome::redirect(entity.list_path()))
        }
    }
}

async fn rerender<E: CrudEntity>(
    entity: &E,
    title: &'static str,
    form: &E::Form,
    failures: Vec<ValidationFailure>,
) -> AppResult<Outcome> {
    let mut model = ViewModel::new();
    model.insert("title", title);
    model.insert(entity.form_key(), form);
    entity.form_context(Some(form), &mut model).await?;
    model.insert("errors", failures);
    Ok(Outcome::view(entity.form_view(), model))
}
