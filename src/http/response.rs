//! Response helpers shared by the handlers.
//!
//! Successful writes answer `302 Found` pointing at the list. Store failures
//! render an HTML error page; the status stays 200 so browsers show it as a
//! normal page.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::store::StoreError;
use crate::views::{self, ViewSettings};

/// Which handler a store failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Delete,
}

/// `302 Found` back to the message list.
pub fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Render the page for a failed store call.
///
/// Listing failures and a missing binding always get the setup page. Pages
/// answering a form post carry a link back to the list.
pub fn store_failure(view: &ViewSettings, action: Action, err: &StoreError) -> Response {
    let page = match (action, err) {
        (Action::List, _) | (_, StoreError::Unconfigured) => {
            views::error::setup(view, err, action != Action::List)
        }
        (Action::Create, _) => views::error::failure(
            view,
            "Send failed",
            "The message could not be saved.",
            err,
        ),
        (Action::Delete, _) => views::error::failure(
            view,
            "Delete failed",
            "The message could not be deleted.",
            err,
        ),
    };
    page.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_is_found() {
        let res = redirect_home();
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers()[header::LOCATION], "/");
    }

    #[test]
    fn test_failure_is_html() {
        let res = store_failure(
            &ViewSettings::default(),
            Action::Create,
            &StoreError::Database(sqlx::Error::PoolClosed),
        );
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    async fn body_text(res: Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_setup_page_links_back_only_for_writes() {
        let view = ViewSettings::default();
        let err = StoreError::Unconfigured;

        let list = body_text(store_failure(&view, Action::List, &err)).await;
        assert!(list.contains("No database is configured"));
        assert!(!list.contains(r#"href="/""#));

        for action in [Action::Create, Action::Delete] {
            let body = body_text(store_failure(&view, action, &err)).await;
            assert!(body.contains("No database is configured"));
            assert!(body.contains(r#"href="/""#), "{action:?} page has no back-link");
        }
    }
}
