// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use vhub_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod address;
mod comment;
mod event;
mod event_type;
mod mission;
mod news;
mod org;
mod photo;
mod registration;
mod sequence;
mod set;
mod subsidiary;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        // A violated reference means the referenced row is gone.
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            repo::Error::NotFound
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<Id> {
    let id = diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
        "last_insert_rowid()",
    ))
    .get_result::<i64>(conn)
    .map_err(from_diesel_err)?;
    Ok(Id::new(id))
}

fn to_rowids(ids: &[Id]) -> Vec<i64> {
    ids.iter().map(|id| id.value()).collect()
}
