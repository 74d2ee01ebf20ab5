use std::sync::RwLock;

use anyhow::Result;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use super::jwt;

/// Refresh tokens are stored hashed; presenting the raw token is the only
/// way to use one.
struct RefreshTokenRecord {
    user_id: String,
    token_hash: String,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

static STORE: Lazy<RwLock<Vec<RefreshTokenRecord>>> = Lazy::new(|| RwLock::new(Vec::new()));

pub fn store_refresh_token(user_id: &str, token: &str) -> Result<()> {
    let mut store = STORE
        .write()
        .map_err(|_| anyhow::anyhow!("token store poisoned"))?;
    store.push(RefreshTokenRecord {
        user_id: user_id.to_string(),
        token_hash: hash_token(token),
        expires_at: jwt::refresh_token_expiration(),
        revoked_at: None,
    });
    Ok(())
}

/// Resolve a refresh token to its user id. Expired and revoked tokens do
/// not resolve.
pub fn validate_refresh_token(token: &str) -> Result<String> {
    let token_hash = hash_token(token);
    let now = Utc::now();
    let store = STORE
        .read()
        .map_err(|_| anyhow::anyhow!("token store poisoned"))?;
    store
        .iter()
        .find(|r| r.token_hash == token_hash && r.expires_at > now && r.revoked_at.is_none())
        .map(|r| r.user_id.clone())
        .ok_or_else(|| anyhow::anyhow!("Invalid or expired refresh token"))
}

pub fn revoke_refresh_token(token: &str) -> Result<()> {
    let token_hash = hash_token(token);
    let mut store = STORE
        .write()
        .map_err(|_| anyhow::anyhow!("token store poisoned"))?;
    for record in store.iter_mut().filter(|r| r.token_hash == token_hash) {
        record.revoked_at = Some(Utc::now());
    }
    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_resolves_until_revoked() {
        let token = jwt::generate_refresh_token();
        store_refresh_token("user-42", &token).unwrap();
        assert_eq!(validate_refresh_token(&token).unwrap(), "user-42");

        revoke_refresh_token(&token).unwrap();
        assert!(validate_refresh_token(&token).is_err());
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        assert!(validate_refresh_token("no-such-token").is_err());
    }
}
