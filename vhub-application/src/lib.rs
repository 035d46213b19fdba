#[macro_use]
extern crate log;

mod create_event;
mod create_news;
mod create_subsidiary;
mod create_user;
mod delete_events;
mod delete_news;
mod delete_subsidiaries;
mod register_event;
mod set_user_roles;
mod update_event;
mod update_subsidiary;

pub mod prelude {
    pub use super::{
        create_event::*, create_news::*, create_subsidiary::*, create_user::*, delete_events::*,
        delete_news::*, delete_subsidiaries::*, register_event::*, set_user_roles::*,
        update_event::*, update_subsidiary::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use vhub_core::{entities::*, gateways::notify::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use vhub_db_sqlite::Connections;
}
