//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (x-request-id, tracing span)
//!     → server.rs (body limit, security headers, route dispatch)
//!     → handlers.rs (resolve binding, call store)
//!     → views (HTML) or response.rs (redirect / error page)
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, HttpServer};
