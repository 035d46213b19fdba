use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : Id,
    pub comment_set : Id,
    pub created_by  : Option<Id>,
    pub created_at  : Timestamp,
    pub text        : String,
}
