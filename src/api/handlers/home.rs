/// Greeting served at `/`.
pub const WELCOME_MESSAGE: &str = "Welcome to URL Shortener!\n";

/// `GET /` returns a plain-text greeting.
pub async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}
