use std::io;

use thiserror::Error;
use vhub_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use vhub_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<vhub_core::usecases::Error> for AppError {
    fn from(err: vhub_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    R2d2(#[from] r2d2::Error),
}

impl From<vhub_entities::password::ParseError> for AppError {
    fn from(err: vhub_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Pwhash(#[from] pwhash::error::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<vhub_entities::password::ParseError> for BError {
    fn from(_: vhub_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<vhub_entities::email::EmailAddressParseError> for BError {
    fn from(_: vhub_entities::email::EmailAddressParseError) -> Self {
        Self::Parameter(ParameterError::EmailAddress)
    }
}
