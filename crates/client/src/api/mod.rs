//! Typed endpoint methods, grouped by backend area.

mod auth;
mod knowledge;
mod qa;
