//! Provisioning Hook
//!
//! The linear provisioning sequence run once, immediately after the
//! templating engine instantiates the project tree: generate a secret key,
//! materialize `.env` from its example file, optionally seed the default
//! admin user's password hash, and print onboarding instructions.
//!
//! There is no retry and no rollback. A failure aborts the run; the
//! half-provisioned tree is simply regenerated from scratch.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::hashers::make_password;
use crate::instructions::print_instructions;
use crate::patch::{copy_file, replace_in_file};
use crate::secret::generate_secret_key;

/// Example environment file shipped by the template.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Environment file materialized by the hook.
pub const ENV_FILE: &str = ".env";

/// Seed-data file holding the default admin user.
pub const DUMPDATA_FILE: &str = "dumpdata.json";

/// Placeholder for the secret key in the example environment file.
pub const SECRET_KEY_PLACEHOLDER: &str = "replace-with-secret-key";

/// Placeholder for the admin password hash in the seed-data file.
pub const PASSWORD_HASH_PLACEHOLDER: &str = "replace-with-password-hash";

/// Values the templating engine substitutes into the hook before it runs.
#[derive(Clone, Debug)]
pub struct HookConfig {
    /// Directory name of the generated project, interpolated into the
    /// printed instructions.
    pub project_slug: String,
    /// Plaintext password for the default admin user. `None` in template
    /// variants that do not seed an admin user; those skip the seed-data
    /// patch entirely.
    pub admin_password: Option<String>,
}

/// Run the provisioning sequence in the current working directory.
pub fn run(config: &HookConfig) -> Result<()> {
    run_in(Path::new("."), config)
}

/// Run the provisioning sequence with all file paths resolved against
/// `root` (the generated project's directory).
pub fn run_in(root: &Path, config: &HookConfig) -> Result<()> {
    let secret_key = generate_secret_key();
    debug!("generated secret key");

    copy_file(&root.join(ENV_EXAMPLE_FILE), &root.join(ENV_FILE))
        .context("Failed to materialize env file")?;
    replace_in_file(&root.join(ENV_FILE), SECRET_KEY_PLACEHOLDER, &secret_key)
        .context("Failed to inject secret key into env file")?;
    debug!(file = ENV_FILE, "materialized env file");

    if let Some(password) = &config.admin_password {
        let hash = make_password(password, &secret_key);
        replace_in_file(&root.join(DUMPDATA_FILE), PASSWORD_HASH_PLACEHOLDER, &hash)
            .context("Failed to patch seed-data file")?;
        debug!(file = DUMPDATA_FILE, "patched admin password hash");
    }

    print_instructions(&config.project_slug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashers::check_password;
    use crate::secret::SECRET_KEY_LEN;
    use std::fs;
    use tempfile::TempDir;

    fn config(password: Option<&str>) -> HookConfig {
        HookConfig {
            project_slug: "myproject".to_string(),
            admin_password: password.map(String::from),
        }
    }

    fn write_example_env(root: &Path) {
        fs::write(
            root.join(ENV_EXAMPLE_FILE),
            "SECRET_KEY=replace-with-secret-key\n",
        )
        .unwrap();
    }

    #[test]
    fn test_env_file_gets_fresh_secret() {
        let dir = TempDir::new().unwrap();
        write_example_env(dir.path());

        run_in(dir.path(), &config(None)).unwrap();

        let env = fs::read_to_string(dir.path().join(ENV_FILE)).unwrap();
        assert!(!env.contains(SECRET_KEY_PLACEHOLDER));

        let value = env
            .strip_prefix("SECRET_KEY=")
            .and_then(|rest| rest.strip_suffix('\n'))
            .unwrap();
        assert_eq!(value.len(), SECRET_KEY_LEN);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_other_env_lines_untouched() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(ENV_EXAMPLE_FILE),
            "DEBUG=True\nSECRET_KEY=replace-with-secret-key\nALLOWED_HOSTS=localhost\n",
        )
        .unwrap();

        run_in(dir.path(), &config(None)).unwrap();

        let env = fs::read_to_string(dir.path().join(ENV_FILE)).unwrap();
        let lines: Vec<&str> = env.lines().collect();
        assert_eq!(lines[0], "DEBUG=True");
        assert_eq!(lines[2], "ALLOWED_HOSTS=localhost");
    }

    #[test]
    fn test_seed_file_hash_verifies() {
        let dir = TempDir::new().unwrap();
        write_example_env(dir.path());
        fs::write(
            dir.path().join(DUMPDATA_FILE),
            r#"[{"model": "auth.user", "fields": {"username": "admin", "password": "replace-with-password-hash"}}]"#,
        )
        .unwrap();

        run_in(dir.path(), &config(Some("admin-pass"))).unwrap();

        let seed = fs::read_to_string(dir.path().join(DUMPDATA_FILE)).unwrap();
        assert!(!seed.contains(PASSWORD_HASH_PLACEHOLDER));

        // Still valid JSON, and the patched hash verifies against the
        // configured password.
        let records: serde_json::Value = serde_json::from_str(&seed).unwrap();
        let hash = records[0]["fields"]["password"].as_str().unwrap();
        assert!(hash.starts_with("pbkdf2_sha256$"));
        assert!(check_password("admin-pass", hash));
    }

    #[test]
    fn test_no_admin_variant_skips_seed_file() {
        let dir = TempDir::new().unwrap();
        write_example_env(dir.path());

        // No dumpdata.json on disk; the variant without an admin user must
        // not require one.
        run_in(dir.path(), &config(None)).unwrap();
        assert!(!dir.path().join(DUMPDATA_FILE).exists());
    }

    #[test]
    fn test_missing_example_env_is_fatal() {
        let dir = TempDir::new().unwrap();

        let err = run_in(dir.path(), &config(None)).unwrap_err();
        assert!(err.to_string().contains("materialize env file"));
        assert!(!dir.path().join(ENV_FILE).exists());
    }

    #[test]
    fn test_missing_seed_file_is_fatal_but_env_file_remains() {
        let dir = TempDir::new().unwrap();
        write_example_env(dir.path());

        let err = run_in(dir.path(), &config(Some("admin-pass"))).unwrap_err();
        assert!(err.to_string().contains("seed-data"));
        // The env file step happens first and independently.
        assert!(dir.path().join(ENV_FILE).exists());
    }

    #[test]
    fn test_rerun_overwrites_without_corruption() {
        let dir = TempDir::new().unwrap();
        write_example_env(dir.path());

        run_in(dir.path(), &config(None)).unwrap();
        let first = fs::read_to_string(dir.path().join(ENV_FILE)).unwrap();
        run_in(dir.path(), &config(None)).unwrap();
        let second = fs::read_to_string(dir.path().join(ENV_FILE)).unwrap();

        assert_ne!(first, second);
        assert!(second.starts_with("SECRET_KEY="));
        assert!(!second.contains(SECRET_KEY_PLACEHOLDER));
    }
}
