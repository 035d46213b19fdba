use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub id          : Id,
    pub name        : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}
