use std::sync::RwLock;

use anyhow::Result;
use contracts::system::users::User;
use once_cell::sync::Lazy;

struct StoredUser {
    user: User,
    password_hash: String,
}

static STORE: Lazy<RwLock<Vec<StoredUser>>> = Lazy::new(|| RwLock::new(Vec::new()));

pub fn create_with_password(user: &User, password_hash: &str) -> Result<()> {
    let mut store = STORE
        .write()
        .map_err(|_| anyhow::anyhow!("users store poisoned"))?;
    store.push(StoredUser {
        user: user.clone(),
        password_hash: password_hash.to_string(),
    });
    Ok(())
}

pub fn get_by_id(id: &str) -> Result<Option<User>> {
    let store = STORE
        .read()
        .map_err(|_| anyhow::anyhow!("users store poisoned"))?;
    Ok(store.iter().find(|s| s.user.id == id).map(|s| s.user.clone()))
}

pub fn get_by_username(username: &str) -> Result<Option<User>> {
    let store = STORE
        .read()
        .map_err(|_| anyhow::anyhow!("users store poisoned"))?;
    Ok(store
        .iter()
        .find(|s| s.user.username == username)
        .map(|s| s.user.clone()))
}

pub fn get_password_hash(username: &str) -> Result<Option<String>> {
    let store = STORE
        .read()
        .map_err(|_| anyhow::anyhow!("users store poisoned"))?;
    Ok(store
        .iter()
        .find(|s| s.user.username == username)
        .map(|s| s.password_hash.clone()))
}

pub fn touch_last_login(id: &str, when: &str) -> Result<()> {
    let mut store = STORE
        .write()
        .map_err(|_| anyhow::anyhow!("users store poisoned"))?;
    if let Some(stored) = store.iter_mut().find(|s| s.user.id == id) {
        stored.user.last_login_at = Some(when.to_string());
    }
    Ok(())
}

pub fn count() -> Result<usize> {
    let store = STORE
        .read()
        .map_err(|_| anyhow::anyhow!("users store poisoned"))?;
    Ok(store.len())
}
