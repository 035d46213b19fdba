use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id          : Id,
    pub title       : String,
    pub description : Option<String>,
    // Both start/end time stamps are stored with second precision.
    pub starts_at   : Timestamp,
    pub ends_at     : Option<Timestamp>,
    pub address     : Option<Id>,
    pub subsidiary  : Id,
    pub event_type  : Option<Id>,
    pub created_by  : Option<Id>,
    pub photo_set   : Option<Id>,
    pub news_set    : Option<Id>,
    pub comment_set : Option<Id>,
    pub created_at  : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub id   : Id,
    pub name : String,
}

/// A participation record in the event/user join table.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRegistration {
    pub event               : Id,
    pub user                : Id,
    pub registered_at       : Timestamp,
    pub registration_number : i64,
}
