use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The {0} must not be empty")]
    EmptyField(&'static str),
    #[error("The {0} is invalid")]
    InvalidField(&'static str),
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Another {0} with this name already exists")]
    DuplicateName(&'static str),
    #[error("The user is already registered for this event")]
    AlreadyRegistered,
    #[error("Invalid credentials")]
    Credentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("The account is blocked")]
    AccountBlocked,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Missing id list")]
    EmptyIdList,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<vhub_entities::password::ParseError> for Error {
    fn from(_: vhub_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<vhub_entities::email::EmailAddressParseError> for Error {
    fn from(_: vhub_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
