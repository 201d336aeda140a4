//! Shared page chrome.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:system-ui,sans-serif;background:#0f172a;color:#e2e8f0;min-height:100vh}
.container{max-width:640px;margin:0 auto;padding:3rem 1.5rem}
h1{font-size:2rem;margin-bottom:2rem;text-align:center}
form.post-form{display:flex;gap:.5rem;margin-bottom:2rem}
form.post-form input{flex:1;padding:.75rem 1rem;border-radius:.5rem;border:1px solid #334155;background:#1e293b;color:inherit}
button{padding:.75rem 1.25rem;border:0;border-radius:.5rem;background:#6366f1;color:#fff;cursor:pointer}
.message-list{display:flex;flex-direction:column;gap:1rem}
.message-card{display:flex;align-items:center;gap:1rem;padding:1rem 1.25rem;border-radius:.75rem;background:#1e293b}
.message-content{flex:1;word-break:break-word}
.message-date{font-size:.8rem;color:#94a3b8;white-space:nowrap}
.delete-form button{padding:.35rem .75rem;background:transparent;border:1px solid #475569;color:#94a3b8}
.empty-state{text-align:center;color:#94a3b8;padding:3rem 0;line-height:1.8}
.error-box{background:rgba(239,68,68,.1);padding:1.5rem;border-radius:.75rem;border:1px solid rgba(239,68,68,.2)}
.error-box h3,.error-detail{color:#fca5a5}
.error-box p{margin-bottom:1rem;line-height:1.6}
.error-box code{display:block;background:#1e293b;padding:1rem;border-radius:.5rem;font-family:monospace;overflow-x:auto;margin-bottom:1rem}
.error-detail{font-size:.9rem}
.back-link{display:inline-block;margin-top:1rem;color:#fff;text-decoration:underline}
"#;

/// Wrap `content` in the document skeleton.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (content)
            }
        }
    }
}
