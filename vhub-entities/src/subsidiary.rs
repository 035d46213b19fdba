use crate::{id::Id, time::Timestamp};

/// A local branch of a [`MainOrganization`](crate::organization::MainOrganization).
///
/// Subsidiaries are the unit that managers operate on. Each subsidiary
/// owns one photo set, one news set and one comment set.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsidiary {
    pub id                : Id,
    pub name              : String,
    pub main_organization : Option<Id>,
    pub address           : Option<Id>,
    pub photo_set         : Option<Id>,
    pub news_set          : Option<Id>,
    pub comment_set       : Option<Id>,
    pub missions          : Vec<Id>,
    pub created_at        : Timestamp,
}
