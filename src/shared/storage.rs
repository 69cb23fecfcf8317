//! Browser local storage access.
//!
//! Only two things are persisted: the logged-in user blob and the theme flag.
//! On non-wasm targets there is no storage; reads return `None` and writes
//! are dropped.

use crate::domain::models::User;
use crate::shared::constants::USER_KEY;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_storage_error;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| AppError::Storage("no window".into()))?
        .local_storage()
        .map_err(AppError::storage)?
        .ok_or_else(|| AppError::Storage("local storage disabled".into()))
}

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    match local_storage().and_then(|storage| {
        storage
            .get_item(key)
            .map_err(AppError::storage)
    }) {
        Ok(value) => value,
        Err(e) => {
            log_storage_error(key, &e.to_string());
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) -> Result<()> {
    local_storage()?
        .set_item(key, value)
        .map_err(AppError::storage)
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) -> Result<()> {
    local_storage()?
        .remove_item(key)
        .map_err(AppError::storage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_item(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_item(_key: &str, _value: &str) -> Result<()> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_item(_key: &str) -> Result<()> {
    Ok(())
}

pub fn decode_user(raw: &str) -> Result<User> {
    let user: User = serde_json::from_str(raw)?;
    if user.name.trim().is_empty() {
        return Err(AppError::InvalidInput("stored user has no name".into()));
    }
    Ok(user)
}

/// Stored user, if any. A corrupt blob is logged and ignored.
pub fn load_user() -> Option<User> {
    let raw = get_item(USER_KEY)?;
    match decode_user(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log_storage_error(USER_KEY, &e.to_string());
            None
        }
    }
}

pub fn save_user(user: &User) -> Result<()> {
    let raw = serde_json::to_string(user)?;
    set_item(USER_KEY, &raw)
}

pub fn clear_user() {
    if let Err(e) = remove_item(USER_KEY) {
        log_storage_error(USER_KEY, &e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user() {
        let user = decode_user(r#"{"name":"Ada Lovelace","initials":"AL"}"#).unwrap();
        assert_eq!(user.display_initials(), "AL");
    }

    #[test]
    fn test_decode_rejects_corrupt_blob() {
        assert!(matches!(
            decode_user("{\"name\":"),
            Err(AppError::SerializationError(_))
        ));
        assert!(matches!(
            decode_user(r#"{"name":"  "}"#),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_native_storage_is_empty() {
        assert!(save_user(&decode_user(r#"{"name":"Ada"}"#).unwrap()).is_ok());
        assert!(load_user().is_none());
    }
}
