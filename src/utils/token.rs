use sha2::{Digest, Sha256};

const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Derives the token for a URL.
///
/// The URL is hashed with SHA-256, the first eight digest bytes are read as
/// a big-endian `u64`, and that value is base-62 encoded. The same URL
/// always yields the same token.
pub fn url_token(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    base62_encode(u64::from_be_bytes(prefix))
}

/// Encodes `value` in base 62, least significant digit first.
///
/// Zero encodes to the empty string.
pub fn base62_encode(mut value: u64) -> String {
    let mut token = String::new();
    while value > 0 {
        token.push(BASE62_ALPHABET[(value % 62) as usize] as char);
        value /= 62;
    }
    token
}
