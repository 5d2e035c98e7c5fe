use serde::{Deserialize, Serialize};

/// A shortened link: the token and the URL it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Base-62 token derived from the long URL.
    pub token: String,
    /// Original URL the token redirects to.
    pub long_url: String,
}

impl Link {
    pub fn new(token: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            long_url: long_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_str_and_string() {
        let link = Link::new("7D3", String::from("https://example.com"));
        assert_eq!(link.token, "7D3");
        assert_eq!(link.long_url, "https://example.com");
    }
}
