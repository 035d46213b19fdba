pub use vhub_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn try_new_user(
        u: NewUser,
    ) -> Result<usecases::NewUser, e::EmailAddressParseError> {
        let NewUser { email, password } = u;
        let email = email.parse::<e::EmailAddress>()?;
        Ok(usecases::NewUser { email, password })
    }

    pub fn update_user(u: UpdateUser) -> usecases::UpdateUser {
        let UpdateUser { password, photo_id } = u;
        usecases::UpdateUser {
            password,
            photo: photo_id.map(Into::into),
        }
    }

    pub fn new_address(a: NewAddress) -> usecases::NewAddress {
        let NewAddress {
            street,
            zip,
            city,
            country,
            state,
        } = a;
        usecases::NewAddress {
            street,
            zip,
            city,
            country,
            state,
        }
    }

    pub fn new_organization(o: NewMainOrganization) -> usecases::NewMainOrganization {
        let NewMainOrganization { name, description } = o;
        usecases::NewMainOrganization { name, description }
    }

    pub fn new_subsidiary(s: NewSubsidiary) -> usecases::NewSubsidiary {
        let NewSubsidiary {
            name,
            main_organization_id,
            address_id,
            mission_ids,
        } = s;
        usecases::NewSubsidiary {
            name,
            main_organization: main_organization_id.map(Into::into),
            address: address_id.map(Into::into),
            missions: mission_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn new_mission(m: NewMission) -> usecases::NewMission {
        let NewMission { name, description } = m;
        usecases::NewMission { name, description }
    }

    pub fn new_event_type(t: NewEventType) -> usecases::NewEventType {
        let NewEventType { name } = t;
        usecases::NewEventType { name }
    }

    pub fn new_event(ev: NewEvent, created_by: Option<e::Id>) -> usecases::NewEvent {
        let NewEvent {
            title,
            description,
            starts_at,
            ends_at,
            address_id,
            subsidiary_id,
            event_type_id,
        } = ev;
        usecases::NewEvent {
            title,
            description,
            starts_at: e::Timestamp::from_seconds(starts_at),
            ends_at: ends_at.map(e::Timestamp::from_seconds),
            address: address_id.map(Into::into),
            subsidiary: subsidiary_id.into(),
            event_type: event_type_id.map(Into::into),
            created_by,
        }
    }

    pub fn new_news(n: NewNews, created_by: Option<e::Id>) -> usecases::NewNews {
        let NewNews {
            title,
            body,
            news_set_id,
        } = n;
        usecases::NewNews {
            title,
            body,
            created_by,
            news_set: news_set_id.map(Into::into),
        }
    }

    pub fn new_comment(c: NewComment, created_by: Option<e::Id>) -> usecases::NewComment {
        let NewComment {
            comment_set_id,
            text,
        } = c;
        usecases::NewComment {
            comment_set: comment_set_id.into(),
            created_by,
            text,
        }
    }

    pub fn new_photo(p: NewPhoto) -> usecases::NewPhoto {
        let NewPhoto {
            url,
            caption,
            photo_set_id,
        } = p;
        usecases::NewPhoto {
            url,
            caption,
            photo_set: photo_set_id.map(Into::into),
        }
    }

    pub fn ids(ids: Ids) -> Vec<e::Id> {
        ids.ids.into_iter().map(Into::into).collect()
    }

    pub fn roles(roles: Vec<UserRole>) -> Vec<e::Role> {
        roles.into_iter().map(Into::into).collect()
    }
}
