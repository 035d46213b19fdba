mod addresses;
mod authorize;
mod comments;
mod confirm_email;
mod create_new_user;
mod delete_users;
mod error;
mod event_types;
mod events;
mod get_user;
mod login;
mod missions;
mod news;
mod organizations;
mod photos;
mod register_event;
mod set_user_roles;
mod subsidiaries;
mod update_user;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    addresses::*, authorize::*, comments::*, confirm_email::*, create_new_user::*,
    delete_users::*, error::Error, event_types::*, events::*, get_user::*, login::*, missions::*,
    news::*, organizations::*, photos::*, register_event::*, set_user_roles::*, subsidiaries::*,
    update_user::*,
};

mod prelude {
    pub use super::{
        authorize::{ensure_subsidiary_in_scope, Visibility},
        error::Error,
        validated_name,
    };
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}

use crate::util::validate::{self, NameInvalidation};

/// Check a name-like field and report the offending field on failure.
pub fn validated_name(field: &'static str, value: &str) -> Result<()> {
    validate::name(value).map_err(|err| match err {
        NameInvalidation::Empty => Error::EmptyField(field),
        NameInvalidation::TooLong | NameInvalidation::InvalidChar => Error::InvalidField(field),
    })
}
