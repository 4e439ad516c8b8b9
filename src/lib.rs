//! Post-Generation Provisioning Hook
//!
//! Runs once in a freshly generated Django project tree: mints a secret
//! key, materializes the environment file, seeds the default admin user's
//! password hash, and prints onboarding instructions.

pub mod error;
pub mod secret;
pub mod hashers;
pub mod patch;
pub mod instructions;
pub mod hook;
