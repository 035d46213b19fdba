use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id         : Id,
    pub url        : String,
    pub caption    : Option<String>,
    pub photo_set  : Option<Id>,
    pub created_at : Timestamp,
}
