use thiserror::Error;

/// Fatal pipeline errors. Per-item deletion failures are not errors; they are
/// logged warnings handled inline by the sweep loop.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Variable {0} not assigned. Set it as an environment variable.")]
    MissingConfig(String),

    #[error(
        "USER_ID not set. Tried to assign it with user \"{0}\". But the user was not found. \
         Check your spelling and make sure the user exists or set the USER_ID environment \
         variable if you already know the user ID."
    )]
    UserNotFound(String),

    #[error("{0}")]
    ApiCall(String),
}
