use crate::{id::Id, time::Timestamp};

/// A news article published by a subsidiary or an event.
///
/// News items can own a photo set and a comment set themselves.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id          : Id,
    pub title       : String,
    pub body        : String,
    pub created_by  : Option<Id>,
    pub news_set    : Option<Id>,
    pub photo_set   : Option<Id>,
    pub comment_set : Option<Id>,
    pub created_at  : Timestamp,
}
