//! Bootstrap tokens injected into cluster profiles.
//!
//! Tokens are secrets shared between the control plane and joining
//! nodes, so they are produced by an injected [`TokenSource`] and never
//! shown through `Debug`.

pub mod kubeadm;

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub use kubeadm::KubeadmTokenSource;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("entropy source failed: {0}")]
    Entropy(String),
    #[error("malformed token: {0}")]
    Malformed(String),
}

pub trait TokenSource: Send + Sync {
    fn generate(&self) -> Result<BootstrapToken, TokenError>;
}

#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BootstrapToken(String);

impl BootstrapToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Accepts only kubeadm bootstrap tokens (`[a-z0-9]{6}.[a-z0-9]{16}`).
    pub fn parse(value: &str) -> Result<Self, TokenError> {
        if !kubeadm::is_valid(value) {
            return Err(TokenError::Malformed(
                "expected six and sixteen lowercase alphanumerics joined by '.'".to_string(),
            ));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }
}

impl fmt::Debug for BootstrapToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapToken")
            .field("sha256", &self.fingerprint())
            .finish()
    }
}

/// Hands out the same token on every call.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: BootstrapToken,
}

impl StaticTokenSource {
    pub fn new(token: BootstrapToken) -> Self {
        Self { token }
    }
}

impl TokenSource for StaticTokenSource {
    fn generate(&self) -> Result<BootstrapToken, TokenError> {
        Ok(self.token.clone())
    }
}
