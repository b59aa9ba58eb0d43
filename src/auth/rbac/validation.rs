//! Draft and update validation
//!
//! Checks run inside the store so they hold whatever the caller is. Each
//! function returns the input with names and emails trimmed.

use crate::core::models::{NewRole, NewUser, RoleUpdate, UserUpdate};
use crate::utils::error::{RbacError, Result};
use crate::utils::is_valid_email;

pub(crate) const MAX_USER_NAME_LEN: usize = 256;
pub(crate) const MAX_EMAIL_LEN: usize = 320;
pub(crate) const MAX_ROLE_NAME_LEN: usize = 128;
pub(crate) const MAX_DESCRIPTION_LEN: usize = 1024;

fn required(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RbacError::validation(format!("{} is required", field)));
    }
    if value.chars().count() > max_len {
        return Err(RbacError::validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(value.to_string())
}

fn email(value: &str) -> Result<String> {
    let value = required("email", value, MAX_EMAIL_LEN)?;
    if !is_valid_email(&value) {
        return Err(RbacError::validation(format!(
            "email is not a valid address: {}",
            value
        )));
    }
    Ok(value)
}

fn description(value: String) -> Result<String> {
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(RbacError::validation(format!(
            "description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(value)
}

pub(super) fn new_user(draft: NewUser) -> Result<NewUser> {
    Ok(NewUser {
        name: required("name", &draft.name, MAX_USER_NAME_LEN)?,
        email: email(&draft.email)?,
        ..draft
    })
}

pub(super) fn user_update(update: UserUpdate) -> Result<UserUpdate> {
    Ok(UserUpdate {
        name: update
            .name
            .map(|name| required("name", &name, MAX_USER_NAME_LEN))
            .transpose()?,
        email: update.email.map(|value| email(&value)).transpose()?,
        ..update
    })
}

pub(super) fn new_role(draft: NewRole) -> Result<NewRole> {
    Ok(NewRole {
        name: required("name", &draft.name, MAX_ROLE_NAME_LEN)?,
        description: description(draft.description)?,
        permissions: draft.permissions,
    })
}

pub(super) fn role_update(update: RoleUpdate) -> Result<RoleUpdate> {
    Ok(RoleUpdate {
        name: update
            .name
            .map(|name| required("name", &name, MAX_ROLE_NAME_LEN))
            .transpose()?,
        description: update.description.map(description).transpose()?,
        permissions: update.permissions,
    })
}
