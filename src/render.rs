//! Presentation adapter.
//!
//! Controllers produce either a named view plus a view-model or a redirect
//! target; the renderer on the other side decides what the view looks like.
//! Here the view-model is shipped as a JSON envelope and redirects become
//! 303 responses.

use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// Ordered string-keyed view-model.
#[derive(Debug, Default, Serialize)]
pub struct ViewModel(IndexMap<String, Value>);

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Serialize) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// A named view plus the model to render it with.
#[derive(Debug, Serialize)]
pub struct View {
    pub name: &'static str,
    pub model: ViewModel,
}

/// Terminal result of a controller operation.
#[derive(Debug)]
pub enum Outcome {
    View(View),
    Redirect(String),
}

impl Outcome {
    pub fn view(name: &'static str, model: ViewModel) -> Self {
        Outcome::View(View { name, model })
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Outcome::Redirect(path.into())
    }

    /// Redirect target, if this outcome is one.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(path) => Some(path),
            Outcome::View(_) => None,
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::View(view) => Json(json!({
                "view": view.name,
                "model": view.model,
            }))
            .into_response(),
            Outcome::Redirect(path) => Redirect::to(&path).into_response(),
        }
    }
}
