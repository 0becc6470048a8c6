//! Application views, one per route

mod home;
mod knowledge;
mod login;
mod qa;

pub use home::Home;
pub use knowledge::Knowledge;
pub use login::Login;
pub use qa::Qa;
