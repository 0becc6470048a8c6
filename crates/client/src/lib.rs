//! Agronome API client
//!
//! HTTP plumbing for the Agronome single-page application: a typed client
//! for the agricultural advisory backend with bearer-token injection on
//! every outgoing request, server-driven token rotation via the
//! `x-new-token` response header, and session-expiry handling that clears
//! the stored credential and diverts the user to the login view.
//!
//! The crate compiles for native targets and `wasm32`. Where the token
//! lives (browser `localStorage`, process memory) is behind the
//! [`TokenStore`] seam so the pipeline is the same everywhere and tests
//! can substitute a double.

pub mod api;
pub mod client;
pub mod error;
pub mod session;
pub mod token;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder};
pub use error::ClientError;
pub use session::{LoginRedirect, SessionEvent, NEW_TOKEN_HEADER};
pub use token::{MemoryTokenStore, TokenStore};
