//! Username derivation, identifier narrowing, and the credential seam.

use thiserror::Error;

/// Length of the numeric prefix stripped from raw user identifiers.
///
/// Storage ids must fit a downstream numeric-width constraint, so the fixed
/// prefix shared by all source ids is dropped. This is a one-way narrowing:
/// the raw id cannot be reconstructed from the stored form alone, and every
/// site that persists a user id (users, likes, reviews) must apply it.
pub const USER_ID_PREFIX_DIGITS: u32 = 7;

/// Shared rotation offset for username obfuscation.
pub const DEFAULT_OFFSET: u8 = 5;

/// Marker preceding a user-chosen vanity slug in profile URLs.
const PROFILE_SLUG_MARKER: &str = "steamcommunity.com/id/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("user id {0} has no digits after the 7-digit prefix")]
    TooShort(i64),
    #[error("user id {0} is negative")]
    Negative(i64),
}

/// Derive a login name from profile data.
///
/// A profile URL carrying a vanity slug yields that slug verbatim. Otherwise
/// the display name is lowercased and stripped of every non-alphanumeric
/// character. The fallback gives no uniqueness guarantee: two profiles with
/// the same display name collide, and ingestion rejects the later one via
/// the unique-username constraint.
pub fn derive_username(profile_name: &str, profile_url: &str) -> String {
    if let Some(pos) = profile_url.find(PROFILE_SLUG_MARKER) {
        let rest = &profile_url[pos + PROFILE_SLUG_MARKER.len()..];
        return rest.split('/').next().unwrap_or("").to_string();
    }
    profile_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Canonicalize a raw user id into its storage form by stripping the fixed
/// 7-digit prefix.
pub fn storage_user_id(raw: i64) -> Result<i64, IdentityError> {
    if raw < 0 {
        return Err(IdentityError::Negative(raw));
    }
    let digits = raw.to_string().len() as u32;
    if digits <= USER_ID_PREFIX_DIGITS {
        return Err(IdentityError::TooShort(raw));
    }
    Ok(raw % 10_i64.pow(digits - USER_ID_PREFIX_DIGITS))
}

// ── Obfuscation ─────────────────────────────────────────────────────────────

/// Fixed-offset rotating substitution over ASCII letters.
///
/// Case is preserved, the offset wraps modulo 26, and non-letters pass
/// through unchanged. This is a non-cryptographic placeholder, reversible by
/// anyone who knows the offset — not a security mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateCipher {
    offset: u8,
}

impl RotateCipher {
    pub fn new(offset: u8) -> Self {
        Self { offset: offset % 26 }
    }

    pub fn encode(&self, text: &str) -> String {
        text.chars().map(|c| rotate(c, self.offset)).collect()
    }

    pub fn decode(&self, text: &str) -> String {
        text.chars().map(|c| rotate(c, (26 - self.offset) % 26)).collect()
    }
}

impl Default for RotateCipher {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET)
    }
}

fn rotate(c: char, offset: u8) -> char {
    match c {
        'a'..='z' => (b'a' + (c as u8 - b'a' + offset) % 26) as char,
        'A'..='Z' => (b'A' + (c as u8 - b'A' + offset) % 26) as char,
        _ => c,
    }
}

// ── Credential seam ─────────────────────────────────────────────────────────

/// Derives the stored initial credential for a new user row.
///
/// Ingestion only ever talks to this trait, so a production-grade hashing
/// scheme can replace the shipped placeholder without touching ingestion
/// logic.
pub trait CredentialScheme {
    fn initial_credential(&self, username: &str) -> String;
}

/// Placeholder scheme: the (already obfuscated) login name doubles as the
/// initial credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameCredential;

impl CredentialScheme for UsernameCredential {
    fn initial_credential(&self, username: &str) -> String {
        username.to_string()
    }
}
