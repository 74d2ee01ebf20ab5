use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, User};

use super::repository;
use crate::system::auth::password;

/// Create a new user
pub fn create(dto: CreateUserDto) -> Result<String> {
    if dto.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(&dto.username)?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username: dto.username,
        email: dto.email,
        full_name: dto.full_name,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash)?;

    Ok(user_id)
}

/// Get user by ID
pub fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id)
}

/// Check a username/password pair. Returns the user on success, `None` on
/// bad credentials or an inactive account.
pub fn verify_credentials(username: &str, password_input: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(username)? {
        Some(user) if user.is_active => user,
        _ => return Ok(None),
    };

    let hash = match repository::get_password_hash(username)? {
        Some(hash) => hash,
        None => return Ok(None),
    };

    if !password::verify_password(password_input, &hash)? {
        return Ok(None);
    }

    repository::touch_last_login(&user.id, &Utc::now().to_rfc3339())?;
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_verify_credentials() {
        let username = format!("user-{}", uuid::Uuid::new_v4());
        create(CreateUserDto {
            username: username.clone(),
            password: "a-long-password".into(),
            email: Some("owner@example.com".into()),
            full_name: None,
            is_admin: false,
        })
        .unwrap();

        assert!(verify_credentials(&username, "a-long-password")
            .unwrap()
            .is_some());
        assert!(verify_credentials(&username, "wrong").unwrap().is_none());
    }

    #[test]
    fn duplicate_usernames_are_rejected() {
        let username = format!("user-{}", uuid::Uuid::new_v4());
        let dto = CreateUserDto {
            username: username.clone(),
            password: "a-long-password".into(),
            email: None,
            full_name: None,
            is_admin: false,
        };
        create(dto.clone()).unwrap();
        assert!(create(dto).is_err());
    }
}
