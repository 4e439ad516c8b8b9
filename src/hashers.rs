//! Password Hashing
//!
//! Django-compatible PBKDF2 credential hashing. Produces the framework's
//! standard encoded form `pbkdf2_sha256$<iterations>$<salt>$<digest>` so the
//! seeded admin user works out of the box, without committing a fixed,
//! guessable hash to version control.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// Algorithm tag in the encoded hash.
pub const ALGORITHM: &str = "pbkdf2_sha256";

/// PBKDF2 iteration count (Django 4.2 default).
pub const DEFAULT_ITERATIONS: u32 = 600_000;

const DIGEST_LEN: usize = 32;

/// Hash `password` with `salt` at the default iteration count.
///
/// The salt is used verbatim in the encoded output, so it must not contain
/// `$` -- the provisioning run always passes the freshly generated
/// alphanumeric secret key.
pub fn make_password(password: &str, salt: &str) -> String {
    make_password_with_iterations(password, salt, DEFAULT_ITERATIONS)
}

/// Hash `password` with `salt` at an explicit iteration count.
pub fn make_password_with_iterations(password: &str, salt: &str, iterations: u32) -> String {
    debug_assert!(!salt.is_empty() && !salt.contains('$'));

    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut digest);

    format!("{}${}${}${}", ALGORITHM, iterations, salt, BASE64.encode(digest))
}

/// Verify `password` against an encoded hash produced by [`make_password`].
///
/// Returns `false` for a malformed encoding rather than erroring; a hash
/// that cannot be parsed cannot match.
pub fn check_password(password: &str, encoded: &str) -> bool {
    let mut parts = encoded.splitn(4, '$');
    let (algorithm, iterations, salt, digest) = match (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) {
        (Some(a), Some(i), Some(s), Some(d)) => (a, i, s, d),
        _ => return false,
    };

    if algorithm != ALGORITHM {
        return false;
    }
    let iterations: u32 = match iterations.parse() {
        Ok(n) => n,
        Err(_) => return false,
    };

    make_password_with_iterations(password, salt, iterations)
        .split('$')
        .nth(3)
        .map_or(false, |expected| expected == digest)
}
