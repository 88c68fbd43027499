//! Cluster profile construction.
//!
//! A profile is a [`ProfileTemplate`] selected by key. Building one
//! validates the cluster name, draws a bootstrap token from the supplied
//! [`TokenSource`] and instantiates the template.

pub mod ecs;
pub mod template;

use tracing::{debug, warn};

pub use template::{GroupTemplate, ProfileTemplate, RuleTemplate, SubnetTemplate};

use crate::error::{AppError, AppResult};
use crate::model::ClusterSpec;
use crate::token::{BootstrapToken, TokenError, TokenSource};

pub const DEFAULT_TEMPLATE: &str = "ecs-ubuntu-16.04";

// Leaves room for the longest derived suffix ("-master") in a 63 byte DNS label.
const MAX_NAME_LEN: usize = 56;

static TEMPLATES: &[ProfileTemplate] = &[ecs::UBUNTU_16_04];

pub fn registry() -> &'static [ProfileTemplate] {
    TEMPLATES
}

pub fn find(key: &str) -> AppResult<&'static ProfileTemplate> {
    let key = match key.trim() {
        "" | "default" => DEFAULT_TEMPLATE,
        other => other,
    };

    TEMPLATES
        .iter()
        .find(|template| template.key == key)
        .ok_or_else(|| AppError::UnknownProfile(key.to_string()))
}

/// Builds the default profile for `name`.
pub fn build_profile(name: &str, tokens: &dyn TokenSource) -> AppResult<ClusterSpec> {
    build_named_profile(DEFAULT_TEMPLATE, name, tokens)
}

pub fn build_named_profile(
    key: &str,
    name: &str,
    tokens: &dyn TokenSource,
) -> AppResult<ClusterSpec> {
    validate_name(name)?;
    let template = find(key)?;
    let token = generate_token(tokens)?;

    debug!(
        template = template.key,
        cluster = name,
        token_sha256 = %token.fingerprint(),
        "instantiating profile"
    );
    template.instantiate(name, token)
}

/// Cluster names must be DNS-1123 labels short enough for every derived
/// resource name to remain one.
pub fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::invalid_name(name, "name must not be empty"));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(AppError::invalid_name(
            name,
            format!("name must be at most {MAX_NAME_LEN} characters"),
        ));
    }

    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(AppError::invalid_name(
            name,
            "only lowercase letters, digits and '-' are allowed",
        ));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(AppError::invalid_name(
            name,
            "name must start and end with a letter or digit",
        ));
    }

    Ok(())
}

fn generate_token(tokens: &dyn TokenSource) -> Result<BootstrapToken, TokenError> {
    match tokens.generate() {
        Ok(token) => Ok(token),
        Err(err) => {
            warn!(error = %err, "token generation failed, retrying once");
            tokens.generate()
        }
    }
}
