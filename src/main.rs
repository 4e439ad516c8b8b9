//! Post-Generation Hook Entry Point
//!
//! Invoked by the templating engine in the generated project's directory,
//! with no arguments. Configuration values arrive as literal strings the
//! engine has already substituted into this file.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use postgen::hook::{run, HookConfig};

// Substituted by the templating engine before the hook is built and run.
const PROJECT_SLUG: &str = "{{ cookiecutter.project_slug }}";
const DJANGO_PASSWORD: &str = "{{ cookiecutter.django_password }}";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = HookConfig {
        project_slug: PROJECT_SLUG.to_string(),
        admin_password: Some(DJANGO_PASSWORD.to_string()),
    };

    run(&config)
}
