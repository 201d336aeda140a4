//! Error pages.
//!
//! Two shapes: the setup page (database missing or unreachable) and the
//! failure page for a write that did not go through. Both show the raw error
//! text, escaped by maud.

use maud::{html, Markup};

use super::{layout, ViewSettings};
use crate::store::StoreError;

/// Start command when no database URL is set at all.
const BIND_COMMAND: &str = "message-board --database-url sqlite://board.db --migrate";

/// Start command when a database is bound but the schema is missing.
const MIGRATE_COMMAND: &str = "message-board --migrate";

/// Setup instructions plus the underlying error.
///
/// `back_link` is set when the page answers a form post, so the user can
/// return to the list.
pub fn setup(view: &ViewSettings, err: &StoreError, back_link: bool) -> Markup {
    let (hint, command) = if err.is_unconfigured() {
        (
            "No database is configured. Set database.url in the config file, or start the board with:",
            BIND_COMMAND,
        )
    } else {
        (
            "The database could not be queried. Create the messages table by restarting with your current settings plus:",
            MIGRATE_COMMAND,
        )
    };

    layout::page(
        &view.title,
        html! {
            main.container {
                h1 { "Something went wrong" }
                div.error-box {
                    h3 { "Cannot connect to the database" }
                    p { (hint) }
                    code { (command) }
                    p.error-detail { "Error details: " (err) }
                    @if back_link {
                        a.back-link href="/" { "Back" }
                    }
                }
            }
        },
    )
}

/// A write failed; show why and link back to the list.
pub fn failure(view: &ViewSettings, heading: &str, summary: &str, err: &StoreError) -> Markup {
    layout::page(
        &view.title,
        html! {
            main.container {
                h1 { (heading) }
                div.error-box {
                    p.error-detail { (summary) }
                    p.error-detail { (err) }
                    a.back-link href="/" { "Back" }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_page_for_unconfigured() {
        let html = setup(&ViewSettings::default(), &StoreError::Unconfigured, false).into_string();
        assert!(html.contains("Cannot connect to the database"));
        assert!(html.contains("No database is configured"));
        assert!(html.contains(BIND_COMMAND));
        assert!(html.contains("Database binding is not configured."));
        assert!(!html.contains(r#"href="/""#));
    }

    #[test]
    fn test_setup_page_for_query_error_keeps_bound_url() {
        let err = StoreError::Database(sqlx::Error::Protocol("no such table: messages".into()));
        let html = setup(&ViewSettings::default(), &err, false).into_string();

        assert!(html.contains("Create the messages table"));
        assert!(html.contains(MIGRATE_COMMAND));
        assert!(!html.contains("--database-url"));
        assert!(html.contains("no such table: messages"));
    }

    #[test]
    fn test_setup_page_back_link() {
        let html = setup(&ViewSettings::default(), &StoreError::Unconfigured, true).into_string();
        assert!(html.contains(r#"<a class="back-link" href="/">Back</a>"#));
    }

    #[test]
    fn test_failure_page_escapes_error_text() {
        let err = StoreError::Database(sqlx::Error::Protocol("<b>boom</b>".into()));
        let html = failure(
            &ViewSettings::default(),
            "Send failed",
            "The message could not be saved.",
            &err,
        )
        .into_string();

        assert!(html.contains("Send failed"));
        assert!(html.contains(r#"href="/""#));
        assert!(!html.contains("<b>boom</b>"));
        assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
    }
}
