//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Base URL of the advisory backend
    pub const API_BASE_URL: &'static str = "http://localhost:8000";

    /// Local storage key for the session bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// How long transient status messages stay on screen, in milliseconds
    pub const FLASH_TIMEOUT_MS: u32 = 3_000;
}
