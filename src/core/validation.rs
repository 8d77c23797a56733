//! Input validation rules for the employee directory.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Role;
use regex::Regex;
use std::sync::LazyLock;

const PASSWORD_MIN_LENGTH: usize = 6;
const PASSWORD_MAX_LENGTH: usize = 20;

/// Common passwords rejected outright.
const WEAK_PASSWORDS: &[&str] = &[
    "123456", "password", "qwerty", "abc123", "111111", "123123", "admin123", "654321",
    "password1", "000000",
];

static CEDULA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{7,10}$").unwrap());

pub fn validate_name(name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("El nombre es requerido".to_string()));
    }
    if trimmed.chars().count() < 3 {
        return Err(AppError::Validation(
            "El nombre debe tener al menos 3 caracteres".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_cedula(cedula: &str) -> AppResult<()> {
    let trimmed = cedula.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("La cédula es requerida".to_string()));
    }
    if !CEDULA_RE.is_match(trimmed) {
        return Err(AppError::Validation(
            "La cédula debe tener entre 7 y 10 dígitos numéricos".to_string(),
        ));
    }
    Ok(())
}

/// Password policy: 6–20 characters, at least one letter and one digit,
/// not on the weak-password blacklist.
pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::Validation("La contraseña es requerida".to_string()));
    }
    let len = password.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&len) {
        return Err(AppError::Validation(format!(
            "La contraseña debe tener entre {PASSWORD_MIN_LENGTH} y {PASSWORD_MAX_LENGTH} caracteres"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation(
            "Debe contener al menos una letra".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Debe contener al menos un número".to_string(),
        ));
    }
    if WEAK_PASSWORDS.contains(&password.to_lowercase().as_str()) {
        return Err(AppError::Validation(
            "Esta contraseña es muy común. Use una más segura".to_string(),
        ));
    }
    Ok(())
}

pub fn parse_role(s: &str) -> AppResult<Role> {
    Role::from_db_str(&s.to_lowercase())
        .ok_or_else(|| AppError::Validation(format!("Rol inválido: {s}")))
}
