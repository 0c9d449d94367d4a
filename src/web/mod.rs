//! Web server module
//!
//! Serves the search form and turns each search into a redirect.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
