//! Gravatar URL derivation.
//!
//! New accounts get the Gravatar image registered for their email, falling
//! back to the "mystery person" silhouette. Gravatar accepts SHA-256 hashes
//! of the trimmed, lowercased address.

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// 200px, PG-rated, mystery-person fallback.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{}/{}?s=200&r=pg&d=mm", GRAVATAR_BASE, hex::encode(digest))
}
