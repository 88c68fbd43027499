use rand::RngCore;
use rand::rngs::OsRng;

use super::{BootstrapToken, TokenError, TokenSource};

const TOKEN_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_ID_LEN: usize = 6;
const TOKEN_SECRET_LEN: usize = 16;
// Largest multiple of the charset length that fits in a byte.
const ACCEPT_BELOW: u8 = 252;

/// Generates kubeadm bootstrap tokens from the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct KubeadmTokenSource;

impl KubeadmTokenSource {
    pub fn new() -> Self {
        Self
    }
}

impl TokenSource for KubeadmTokenSource {
    fn generate(&self) -> Result<BootstrapToken, TokenError> {
        generate_with(&mut OsRng)
    }
}

fn generate_with<R: RngCore>(rng: &mut R) -> Result<BootstrapToken, TokenError> {
    let id = random_string(rng, TOKEN_ID_LEN)?;
    let secret = random_string(rng, TOKEN_SECRET_LEN)?;
    Ok(BootstrapToken::new(format!("{id}.{secret}")))
}

fn random_string<R: RngCore>(rng: &mut R, len: usize) -> Result<String, TokenError> {
    let mut out = String::with_capacity(len);
    let mut buf = [0_u8; 32];

    while out.len() < len {
        rng.try_fill_bytes(&mut buf)
            .map_err(|err| TokenError::Entropy(err.to_string()))?;

        for byte in buf {
            if out.len() == len {
                break;
            }
            if byte >= ACCEPT_BELOW {
                continue;
            }
            let index = usize::from(byte) % TOKEN_CHARSET.len();
            out.push(char::from(TOKEN_CHARSET[index]));
        }
    }

    Ok(out)
}

pub(crate) fn is_valid(value: &str) -> bool {
    let Some((id, secret)) = value.split_once('.') else {
        return false;
    };

    id.len() == TOKEN_ID_LEN
        && secret.len() == TOKEN_SECRET_LEN
        && id.bytes().chain(secret.bytes()).all(|b| TOKEN_CHARSET.contains(&b))
}
