use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id         : Id,
    pub street     : Option<String>,
    pub zip        : Option<String>,
    pub city       : String,
    pub country    : String,
    pub state      : Option<String>,
    pub created_at : Timestamp,
}
