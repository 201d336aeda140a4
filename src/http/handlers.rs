//! Request handlers.
//!
//! Each handler resolves the store from the injected [`Binding`](crate::store::Binding) on every
//! request, so a missing database is reported per request instead of at
//! startup. Handlers hold no state of their own.

use axum::{
    extract::{rejection::FormRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::{redirect_home, store_failure, Action};
use crate::http::server::AppState;
use crate::store::{Message, MessageStore, StoreResult};
use crate::views;

/// Body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct NewMessage {
    pub content: Option<String>,
}

/// `GET /`: the form and every message, newest first.
pub async fn list_messages<S: MessageStore>(State(state): State<AppState<S>>) -> Response {
    let result: StoreResult<Vec<Message>> = async { state.binding.store()?.list().await }.await;

    match result {
        Ok(messages) => {
            tracing::debug!(count = messages.len(), "Listing messages");
            views::board::render(&state.view, &messages).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to list messages");
            store_failure(&state.view, Action::List, &err)
        }
    }
}

/// `POST /`: insert the content as typed, or silently ignore input that is
/// empty after trimming.
///
/// A body that cannot be read as a form counts as empty input, except when it
/// is over the size limit.
pub async fn create_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    form: Result<Form<NewMessage>, FormRejection>,
) -> Response {
    let content = match form {
        Ok(Form(body)) => body.content,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!("Message body over the size limit");
            return rejection.into_response();
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Unreadable message form");
            None
        }
    };

    let Some(content) = content
        .as_deref()
        .filter(|content| !content.trim().is_empty())
    else {
        tracing::debug!("Ignoring empty message");
        return redirect_home();
    };

    let result: StoreResult<i64> = async { state.binding.store()?.insert(content).await }.await;

    match result {
        Ok(id) => {
            tracing::info!(message_id = id, "Message created");
            redirect_home()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create message");
            store_failure(&state.view, Action::Create, &err)
        }
    }
}

/// `POST /delete/{id}`: remove the row if it exists.
///
/// An id that is not an integer cannot match a row and is treated like any
/// other missing id.
pub async fn delete_message<S: MessageStore>(
    State(state): State<AppState<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Ignoring delete for malformed id");
            return redirect_home();
        }
    };

    let result: StoreResult<u64> = async { state.binding.store()?.delete(id).await }.await;

    match result {
        Ok(removed) => {
            tracing::info!(message_id = id, removed, "Message deleted");
            redirect_home()
        }
        Err(err) => {
            tracing::error!(message_id = id, error = %err, "Failed to delete message");
            store_failure(&state.view, Action::Delete, &err)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// `GET /healthz`: liveness plus whether a binding is configured.
pub async fn health<S: MessageStore>(State(state): State<AppState<S>>) -> Json<HealthStatus> {
    let database = if state.binding.is_configured() {
        "configured"
    } else {
        "unconfigured"
    };

    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
