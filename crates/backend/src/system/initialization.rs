use anyhow::Result;
use contracts::system::users::CreateUserDto;

use crate::shared::config;
use crate::system::users::{repository, service};

/// Ensure the shop owner account exists. Runs at startup; the in-memory
/// user store starts empty on every boot.
pub fn ensure_admin_user_exists() -> Result<()> {
    if repository::count()? > 0 {
        return Ok(());
    }

    let password = config::get().auth.initial_admin_password.clone();
    service::create(CreateUserDto {
        username: "admin".to_string(),
        password,
        email: None,
        full_name: Some("Shop Owner".to_string()),
        is_admin: true,
    })?;

    tracing::info!("Admin user created");
    Ok(())
}
