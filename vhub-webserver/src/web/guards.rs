use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use crate::core::{prelude::*, usecases};
use vhub_application::error::AppError;
use vhub_core::gateways::notify::NotificationGateway;
use vhub_core::usecases::Error as ParameterError;

pub const COOKIE_EMAIL_KEY: &str = "vhub-user-email";

type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub struct Auth {
    account_email: Option<String>,
}

impl Auth {
    pub fn account_email(&self) -> Result<EmailAddress> {
        self.account_email
            .as_deref()
            .ok_or(ParameterError::Unauthorized)?
            .parse::<EmailAddress>()
            .map_err(|_| ParameterError::Unauthorized.into())
    }

    pub fn user_with_min_role<R>(&self, repo: &R, min_required_role: Role) -> Result<User>
    where
        R: UserRepo,
    {
        Ok(usecases::authorize_user_by_email(
            repo,
            &self.account_email()?,
            min_required_role,
        )?)
    }

    /// The caller's account, if any. Anonymous requests yield `None`.
    pub fn opt_user<R>(&self, repo: &R) -> Result<Option<User>>
    where
        R: UserRepo,
    {
        let Some(email) = self
            .account_email
            .as_deref()
            .and_then(|email| email.parse::<EmailAddress>().ok())
        else {
            return Ok(None);
        };
        Ok(repo.try_get_user_by_email(&email)?)
    }

    /// Resolve what the caller may see.
    pub fn visibility<R>(&self, repo: &R) -> Result<Visibility>
    where
        R: UserRepo + SubsidiaryRepo,
    {
        let user = self.opt_user(repo)?;
        Ok(usecases::visibility_of(repo, user.as_ref())?)
    }

    fn account_email_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let mut account_email = None;
        if cfg!(feature = "cookies") {
            account_email = Self::account_email_from_cookie(request);
        }
        Outcome::Success(Auth { account_email })
    }
}

#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email)),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

pub struct Version(pub &'static str);
