use super::*;
use vhub_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Blocked => UserRole::Blocked,
            Regular => UserRole::Regular,
            Manager => UserRole::Manager,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Blocked => Blocked,
            UserRole::Regular => Regular,
            UserRole::Manager => Manager,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            email_confirmed,
            password: _password,
            roles,
            photo,
            created_at,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            email_confirmed,
            roles: roles.into_iter().map(Into::into).collect(),
            photo_id: photo.map(Into::into),
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::address::Address> for Address {
    fn from(from: e::address::Address) -> Self {
        let e::address::Address {
            id,
            street,
            zip,
            city,
            country,
            state,
            created_at,
        } = from;
        Self {
            id: id.into(),
            street,
            zip,
            city,
            country,
            state,
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::organization::MainOrganization> for MainOrganization {
    fn from(from: e::organization::MainOrganization) -> Self {
        let e::organization::MainOrganization {
            id,
            name,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::subsidiary::Subsidiary> for Subsidiary {
    fn from(from: e::subsidiary::Subsidiary) -> Self {
        let e::subsidiary::Subsidiary {
            id,
            name,
            main_organization,
            address,
            photo_set,
            news_set,
            comment_set,
            missions,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            main_organization_id: main_organization.map(Into::into),
            address_id: address.map(Into::into),
            photo_set_id: photo_set.map(Into::into),
            news_set_id: news_set.map(Into::into),
            comment_set_id: comment_set.map(Into::into),
            mission_ids: missions.into_iter().map(Into::into).collect(),
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::mission::Mission> for Mission {
    fn from(from: e::mission::Mission) -> Self {
        let e::mission::Mission {
            id,
            name,
            description,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::event::EventType> for EventType {
    fn from(from: e::event::EventType) -> Self {
        let e::event::EventType { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            title,
            description,
            starts_at,
            ends_at,
            address,
            subsidiary,
            event_type,
            created_by,
            photo_set,
            news_set,
            comment_set,
            created_at,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            starts_at: starts_at.into_seconds(),
            ends_at: ends_at.map(e::time::Timestamp::into_seconds),
            address_id: address.map(Into::into),
            subsidiary_id: subsidiary.into(),
            event_type_id: event_type.map(Into::into),
            created_by: created_by.map(Into::into),
            photo_set_id: photo_set.map(Into::into),
            news_set_id: news_set.map(Into::into),
            comment_set_id: comment_set.map(Into::into),
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::event::EventRegistration> for EventRegistration {
    fn from(from: e::event::EventRegistration) -> Self {
        let e::event::EventRegistration {
            event,
            user,
            registered_at,
            registration_number,
        } = from;
        Self {
            event_id: event.into(),
            user_id: user.into(),
            registered_at: registered_at.into_seconds(),
            registration_number,
        }
    }
}

impl From<e::news::News> for News {
    fn from(from: e::news::News) -> Self {
        let e::news::News {
            id,
            title,
            body,
            created_by,
            news_set,
            photo_set,
            comment_set,
            created_at,
        } = from;
        Self {
            id: id.into(),
            title,
            body,
            created_by: created_by.map(Into::into),
            news_set_id: news_set.map(Into::into),
            photo_set_id: photo_set.map(Into::into),
            comment_set_id: comment_set.map(Into::into),
            created_at: created_at.into_seconds(),
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            comment_set,
            created_by,
            created_at,
            text,
        } = from;
        Self {
            id: id.into(),
            comment_set_id: comment_set.into(),
            created_by: created_by.map(Into::into),
            created_at: created_at.into_seconds(),
            text,
        }
    }
}

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        let e::photo::Photo {
            id,
            url,
            caption,
            photo_set,
            created_at,
        } = from;
        Self {
            id: id.into(),
            url,
            caption,
            photo_set_id: photo_set.map(Into::into),
            created_at: created_at.into_seconds(),
        }
    }
}
