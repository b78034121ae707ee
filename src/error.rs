use thiserror::Error;

/// Failures the operational tools can hit. Binaries catch these at their
/// outermost level and turn them into operator-facing messages; nothing
/// escapes a binary as an unhandled panic.
#[derive(Debug, Error)]
pub enum OpsError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for OpsError {
    fn from(e: argon2::password_hash::Error) -> Self {
        OpsError::PasswordHash(e)
    }
}
