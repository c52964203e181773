//! Error types for local validation.
//!
//! Validation happens before any request is sent. The `Display` text of
//! each variant is the message shown to the user.

/// Errors raised while validating a form locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required login or registration field is empty.
    #[error("preencha todos os campos.")]
    MissingFields,

    /// The registration password is shorter than
    /// [`MIN_PASSWORD_LEN`](crate::validate::MIN_PASSWORD_LEN).
    #[error("senha muito curta (mín. 4 caracteres).")]
    PasswordTooShort,

    /// A task description is empty after trimming.
    #[error("escreva uma descrição.")]
    MissingDescription,
}

/// A specialized Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
