//! Secret Key Generation
//!
//! Mints the secret key that seeds the generated project's cryptographic
//! signing. Drawn from the OS CSPRNG, never a seeded PRNG.

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Length of a generated secret key.
pub const SECRET_KEY_LEN: usize = 50;

/// Generate a fresh secret key: `SECRET_KEY_LEN` characters drawn uniformly
/// and independently from ASCII letters (upper and lower case) and digits.
pub fn generate_secret_key() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(SECRET_KEY_LEN)
        .map(char::from)
        .collect()
}
