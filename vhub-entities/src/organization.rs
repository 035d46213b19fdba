use crate::{id::Id, time::Timestamp};

/// The umbrella organization that local subsidiaries belong to.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainOrganization {
    pub id          : Id,
    pub name        : String,
    pub description : Option<String>,
    pub created_at  : Timestamp,
}
