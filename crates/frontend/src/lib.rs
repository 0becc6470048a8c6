//! Web UI for the Agronome advisory system
//!
//! A Yew single-page application over [`agronome_client`]: four routes
//! (home, login, knowledge base, Q&A), a navigation guard that keeps
//! everything but the login view behind a stored session token, and a
//! login redirect wired into the HTTP client so an expired session lands
//! back on the login view from anywhere.

pub mod app;
pub mod client;
pub mod config;
pub mod guard;
pub mod routes;
pub mod session;
pub mod storage;
pub mod views;

pub use app::App;
pub use config::AppConfig;
pub use routes::Route;
pub use storage::BrowserTokenStore;
