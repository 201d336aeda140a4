//! The message list page.

use maud::{html, Markup};

use super::{layout, ViewSettings};
use crate::store::Message;

/// Form, then every message as a card, newest first.
pub fn render(view: &ViewSettings, messages: &[Message]) -> Markup {
    layout::page(
        &view.title,
        html! {
            main.container {
                h1 { (view.title) }
                form.post-form method="POST" action="/" {
                    input type="text" name="content" placeholder="Write something..." required autocomplete="off";
                    button type="submit" { "Post" }
                }

                div.message-list {
                    @if messages.is_empty() {
                        div.empty-state {
                            "No messages yet."
                            br;
                            "Be the first to post!"
                        }
                    } @else {
                        @for message in messages {
                            div.message-card {
                                span.message-content { (message.content) }
                                span.message-date { (view.format_timestamp(message.created_at)) }
                                form.delete-form method="POST" action={ "/delete/" (message.id) } {
                                    button type="submit" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
