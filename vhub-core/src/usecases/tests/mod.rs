use std::{cell::RefCell, collections::HashMap, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

/// In-memory database for use case tests.
///
/// Mirrors the delete semantics of the real schema: cascading join
/// rows and set-null references behave like their foreign key
/// counterparts.
#[derive(Default)]
pub struct MockDb {
    next_id: RefCell<i64>,
    pub users: RefCell<Vec<User>>,
    pub addresses: RefCell<Vec<Address>>,
    pub organizations: RefCell<Vec<MainOrganization>>,
    pub subsidiaries: RefCell<Vec<Subsidiary>>,
    pub subsidiary_managers: RefCell<Vec<(Id, Id)>>,
    pub missions: RefCell<Vec<Mission>>,
    pub event_types: RefCell<Vec<EventType>>,
    pub events: RefCell<Vec<Event>>,
    pub registrations: RefCell<Vec<EventRegistration>>,
    pub photo_sets: RefCell<Vec<Id>>,
    pub news_sets: RefCell<Vec<Id>>,
    pub comment_sets: RefCell<Vec<Id>>,
    pub photos: RefCell<Vec<Photo>>,
    pub news: RefCell<Vec<News>>,
    pub comments: RefCell<Vec<Comment>>,
    pub sequences: RefCell<HashMap<String, i64>>,
}

impl MockDb {
    fn next_id(&self) -> Id {
        let mut next = self.next_id.borrow_mut();
        *next += 1;
        Id::new(*next)
    }

    fn delete_by_ids<T, F>(items: &RefCell<Vec<T>>, ids: &[Id], id_of: F) -> usize
    where
        F: Fn(&T) -> Id,
    {
        let mut items = items.borrow_mut();
        let len_before = items.len();
        items.retain(|item| !ids.contains(&id_of(item)));
        len_before - items.len()
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<Id> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.email == user.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.users.borrow_mut().push(User {
            id,
            ..user.clone()
        });
        Ok(id)
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        for u in self.users.borrow_mut().iter_mut() {
            if u.id == user.id {
                *u = user.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_users(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.users, ids, |u| u.id);
        // Cascading join rows.
        self.registrations
            .borrow_mut()
            .retain(|r| !ids.contains(&r.user));
        self.subsidiary_managers
            .borrow_mut()
            .retain(|(_, user_id)| !ids.contains(user_id));
        // Authored content is preserved without an author.
        for event in self.events.borrow_mut().iter_mut() {
            if event.created_by.is_some_and(|id| ids.contains(&id)) {
                event.created_by = None;
            }
        }
        Ok(count)
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user(&self, id: Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    fn set_user_roles(&self, id: Id, roles: &[Role]) -> RepoResult<()> {
        for u in self.users.borrow_mut().iter_mut() {
            if u.id == id {
                u.roles = roles.to_vec();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
}

impl AddressRepo for MockDb {
    fn create_address(&self, address: &Address) -> RepoResult<Id> {
        let id = self.next_id();
        self.addresses.borrow_mut().push(Address {
            id,
            ..address.clone()
        });
        Ok(id)
    }

    fn update_address(&self, address: &Address) -> RepoResult<()> {
        for a in self.addresses.borrow_mut().iter_mut() {
            if a.id == address.id {
                *a = address.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_addresses(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.addresses, ids, |a| a.id);
        for s in self.subsidiaries.borrow_mut().iter_mut() {
            if s.address.is_some_and(|id| ids.contains(&id)) {
                s.address = None;
            }
        }
        for e in self.events.borrow_mut().iter_mut() {
            if e.address.is_some_and(|id| ids.contains(&id)) {
                e.address = None;
            }
        }
        Ok(count)
    }

    fn get_address(&self, id: Id) -> RepoResult<Address> {
        self.addresses
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_addresses(&self) -> RepoResult<Vec<Address>> {
        Ok(self.addresses.borrow().clone())
    }

    fn addresses_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> RepoResult<Vec<Address>> {
        let subsidiaries = self.subsidiaries.borrow();
        let events = self.events.borrow();
        let mut address_ids: Vec<Id> = subsidiaries
            .iter()
            .filter(|s| subsidiary_ids.contains(&s.id))
            .filter_map(|s| s.address)
            .chain(
                events
                    .iter()
                    .filter(|e| subsidiary_ids.contains(&e.subsidiary))
                    .filter_map(|e| e.address),
            )
            .collect();
        address_ids.sort_unstable();
        address_ids.dedup();
        Ok(self
            .addresses
            .borrow()
            .iter()
            .filter(|a| address_ids.contains(&a.id))
            .cloned()
            .collect())
    }
}

impl OrganizationRepo for MockDb {
    fn create_organization(&self, org: &MainOrganization) -> RepoResult<Id> {
        if self.try_get_organization_by_name(&org.name)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.organizations.borrow_mut().push(MainOrganization {
            id,
            ..org.clone()
        });
        Ok(id)
    }

    fn update_organization(&self, org: &MainOrganization) -> RepoResult<()> {
        for o in self.organizations.borrow_mut().iter_mut() {
            if o.id == org.id {
                *o = org.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_organizations(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.organizations, ids, |o| o.id);
        for s in self.subsidiaries.borrow_mut().iter_mut() {
            if s.main_organization.is_some_and(|id| ids.contains(&id)) {
                s.main_organization = None;
            }
        }
        Ok(count)
    }

    fn get_organization(&self, id: Id) -> RepoResult<MainOrganization> {
        self.organizations
            .borrow()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_organization_by_name(&self, name: &str) -> RepoResult<Option<MainOrganization>> {
        Ok(self
            .organizations
            .borrow()
            .iter()
            .find(|o| o.name == name)
            .cloned())
    }

    fn all_organizations(&self) -> RepoResult<Vec<MainOrganization>> {
        Ok(self.organizations.borrow().clone())
    }

    fn organizations_of_subsidiaries(
        &self,
        subsidiary_ids: &[Id],
    ) -> RepoResult<Vec<MainOrganization>> {
        let org_ids: Vec<Id> = self
            .subsidiaries
            .borrow()
            .iter()
            .filter(|s| subsidiary_ids.contains(&s.id))
            .filter_map(|s| s.main_organization)
            .collect();
        Ok(self
            .organizations
            .borrow()
            .iter()
            .filter(|o| org_ids.contains(&o.id))
            .cloned()
            .collect())
    }
}

impl SubsidiaryRepo for MockDb {
    fn create_subsidiary(&self, subsidiary: &Subsidiary) -> RepoResult<Id> {
        let id = self.next_id();
        self.subsidiaries.borrow_mut().push(Subsidiary {
            id,
            ..subsidiary.clone()
        });
        Ok(id)
    }

    fn update_subsidiary(&self, subsidiary: &Subsidiary) -> RepoResult<()> {
        for s in self.subsidiaries.borrow_mut().iter_mut() {
            if s.id == subsidiary.id {
                *s = subsidiary.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_subsidiaries(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.subsidiaries, ids, |s| s.id);
        // Events of a subsidiary go down with it.
        let event_ids: Vec<Id> = self
            .events
            .borrow()
            .iter()
            .filter(|e| ids.contains(&e.subsidiary))
            .map(|e| e.id)
            .collect();
        self.delete_events(&event_ids)?;
        self.subsidiary_managers
            .borrow_mut()
            .retain(|(subsidiary_id, _)| !ids.contains(subsidiary_id));
        Ok(count)
    }

    fn get_subsidiary(&self, id: Id) -> RepoResult<Subsidiary> {
        self.subsidiaries
            .borrow()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_subsidiaries(&self) -> RepoResult<Vec<Subsidiary>> {
        Ok(self.subsidiaries.borrow().clone())
    }

    fn subsidiaries_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<Subsidiary>> {
        Ok(self
            .subsidiaries
            .borrow()
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }

    fn subsidiary_ids_managed_by(&self, user_id: Id) -> RepoResult<Vec<Id>> {
        Ok(self
            .subsidiary_managers
            .borrow()
            .iter()
            .filter(|(_, manager_id)| *manager_id == user_id)
            .map(|(subsidiary_id, _)| *subsidiary_id)
            .collect())
    }

    fn set_subsidiary_managers(&self, id: Id, user_ids: &[Id]) -> RepoResult<()> {
        let mut managers = self.subsidiary_managers.borrow_mut();
        managers.retain(|(subsidiary_id, _)| *subsidiary_id != id);
        managers.extend(user_ids.iter().map(|user_id| (id, *user_id)));
        Ok(())
    }

    fn set_subsidiary_missions(&self, id: Id, mission_ids: &[Id]) -> RepoResult<()> {
        for s in self.subsidiaries.borrow_mut().iter_mut() {
            if s.id == id {
                s.missions = mission_ids.to_vec();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
}

impl MissionRepo for MockDb {
    fn create_mission(&self, mission: &Mission) -> RepoResult<Id> {
        if self.try_get_mission_by_name(&mission.name)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.missions.borrow_mut().push(Mission {
            id,
            ..mission.clone()
        });
        Ok(id)
    }

    fn update_mission(&self, mission: &Mission) -> RepoResult<()> {
        for m in self.missions.borrow_mut().iter_mut() {
            if m.id == mission.id {
                *m = mission.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_missions(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.missions, ids, |m| m.id);
        for s in self.subsidiaries.borrow_mut().iter_mut() {
            s.missions.retain(|id| !ids.contains(id));
        }
        Ok(count)
    }

    fn get_mission(&self, id: Id) -> RepoResult<Mission> {
        self.missions
            .borrow()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_mission_by_name(&self, name: &str) -> RepoResult<Option<Mission>> {
        Ok(self
            .missions
            .borrow()
            .iter()
            .find(|m| m.name == name)
            .cloned())
    }

    fn all_missions(&self) -> RepoResult<Vec<Mission>> {
        Ok(self.missions.borrow().clone())
    }

    fn missions_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> RepoResult<Vec<Mission>> {
        let mission_ids: Vec<Id> = self
            .subsidiaries
            .borrow()
            .iter()
            .filter(|s| subsidiary_ids.contains(&s.id))
            .flat_map(|s| s.missions.iter().copied())
            .collect();
        Ok(self
            .missions
            .borrow()
            .iter()
            .filter(|m| mission_ids.contains(&m.id))
            .cloned()
            .collect())
    }
}

impl EventTypeRepo for MockDb {
    fn create_event_type(&self, event_type: &EventType) -> RepoResult<Id> {
        if self
            .try_get_event_type_by_name(&event_type.name)?
            .is_some()
        {
            return Err(RepoError::AlreadyExists);
        }
        let id = self.next_id();
        self.event_types.borrow_mut().push(EventType {
            id,
            ..event_type.clone()
        });
        Ok(id)
    }

    fn update_event_type(&self, event_type: &EventType) -> RepoResult<()> {
        for t in self.event_types.borrow_mut().iter_mut() {
            if t.id == event_type.id {
                *t = event_type.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_event_types(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.event_types, ids, |t| t.id);
        for e in self.events.borrow_mut().iter_mut() {
            if e.event_type.is_some_and(|id| ids.contains(&id)) {
                e.event_type = None;
            }
        }
        Ok(count)
    }

    fn get_event_type(&self, id: Id) -> RepoResult<EventType> {
        self.event_types
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_event_type_by_name(&self, name: &str) -> RepoResult<Option<EventType>> {
        Ok(self
            .event_types
            .borrow()
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    fn all_event_types(&self) -> RepoResult<Vec<EventType>> {
        Ok(self.event_types.borrow().clone())
    }

    fn event_types_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> RepoResult<Vec<EventType>> {
        let type_ids: Vec<Id> = self
            .events
            .borrow()
            .iter()
            .filter(|e| subsidiary_ids.contains(&e.subsidiary))
            .filter_map(|e| e.event_type)
            .collect();
        Ok(self
            .event_types
            .borrow()
            .iter()
            .filter(|t| type_ids.contains(&t.id))
            .cloned()
            .collect())
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: &Event) -> RepoResult<Id> {
        let id = self.next_id();
        self.events.borrow_mut().push(Event {
            id,
            ..event.clone()
        });
        Ok(id)
    }

    fn update_event(&self, event: &Event) -> RepoResult<()> {
        for e in self.events.borrow_mut().iter_mut() {
            if e.id == event.id {
                *e = event.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_events(&self, ids: &[Id]) -> RepoResult<usize> {
        let count = Self::delete_by_ids(&self.events, ids, |e| e.id);
        self.registrations
            .borrow_mut()
            .retain(|r| !ids.contains(&r.event));
        Ok(count)
    }

    fn get_event(&self, id: Id) -> RepoResult<Event> {
        self.events
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_events_chronologically(&self) -> RepoResult<Vec<Event>> {
        let mut events = self.events.borrow().clone();
        events.sort_by_key(|e| e.starts_at);
        Ok(events)
    }

    fn events_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> RepoResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .borrow()
            .iter()
            .filter(|e| subsidiary_ids.contains(&e.subsidiary))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.starts_at);
        Ok(events)
    }

    fn count_events(&self) -> RepoResult<usize> {
        Ok(self.events.borrow().len())
    }
}

impl EventRegistrationRepo for MockDb {
    fn create_event_registration(&self, registration: &EventRegistration) -> RepoResult<()> {
        let mut registrations = self.registrations.borrow_mut();
        if registrations
            .iter()
            .any(|r| r.event == registration.event && r.user == registration.user)
        {
            return Err(RepoError::AlreadyExists);
        }
        registrations.push(*registration);
        Ok(())
    }

    fn delete_event_registration(&self, event_id: Id, user_id: Id) -> RepoResult<()> {
        let mut registrations = self.registrations.borrow_mut();
        let len_before = registrations.len();
        registrations.retain(|r| !(r.event == event_id && r.user == user_id));
        if registrations.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn try_get_event_registration(
        &self,
        event_id: Id,
        user_id: Id,
    ) -> RepoResult<Option<EventRegistration>> {
        Ok(self
            .registrations
            .borrow()
            .iter()
            .find(|r| r.event == event_id && r.user == user_id)
            .copied())
    }

    fn registrations_of_event(&self, event_id: Id) -> RepoResult<Vec<EventRegistration>> {
        Ok(self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.event == event_id)
            .copied()
            .collect())
    }
}

impl SetRepo for MockDb {
    fn create_photo_set(&self) -> RepoResult<Id> {
        let id = self.next_id();
        self.photo_sets.borrow_mut().push(id);
        Ok(id)
    }

    fn create_news_set(&self) -> RepoResult<Id> {
        let id = self.next_id();
        self.news_sets.borrow_mut().push(id);
        Ok(id)
    }

    fn create_comment_set(&self) -> RepoResult<Id> {
        let id = self.next_id();
        self.comment_sets.borrow_mut().push(id);
        Ok(id)
    }

    fn delete_photo_sets(&self, ids: &[Id]) -> RepoResult<usize> {
        let mut sets = self.photo_sets.borrow_mut();
        let len_before = sets.len();
        sets.retain(|id| !ids.contains(id));
        for p in self.photos.borrow_mut().iter_mut() {
            if p.photo_set.is_some_and(|id| ids.contains(&id)) {
                p.photo_set = None;
            }
        }
        Ok(len_before - sets.len())
    }

    fn delete_news_sets(&self, ids: &[Id]) -> RepoResult<usize> {
        let mut sets = self.news_sets.borrow_mut();
        let len_before = sets.len();
        sets.retain(|id| !ids.contains(id));
        for n in self.news.borrow_mut().iter_mut() {
            if n.news_set.is_some_and(|id| ids.contains(&id)) {
                n.news_set = None;
            }
        }
        Ok(len_before - sets.len())
    }

    fn delete_comment_sets(&self, ids: &[Id]) -> RepoResult<usize> {
        let mut sets = self.comment_sets.borrow_mut();
        let len_before = sets.len();
        sets.retain(|id| !ids.contains(id));
        // Comments cascade with their set.
        self.comments
            .borrow_mut()
            .retain(|c| !ids.contains(&c.comment_set));
        Ok(len_before - sets.len())
    }
}

impl PhotoRepo for MockDb {
    fn create_photo(&self, photo: &Photo) -> RepoResult<Id> {
        let id = self.next_id();
        self.photos.borrow_mut().push(Photo {
            id,
            ..photo.clone()
        });
        Ok(id)
    }

    fn delete_photos(&self, ids: &[Id]) -> RepoResult<usize> {
        Ok(Self::delete_by_ids(&self.photos, ids, |p| p.id))
    }

    fn get_photo(&self, id: Id) -> RepoResult<Photo> {
        self.photos
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn photos_of_set(&self, photo_set_id: Id) -> RepoResult<Vec<Photo>> {
        Ok(self
            .photos
            .borrow()
            .iter()
            .filter(|p| p.photo_set == Some(photo_set_id))
            .cloned()
            .collect())
    }
}

impl NewsRepo for MockDb {
    fn create_news(&self, news: &News) -> RepoResult<Id> {
        let id = self.next_id();
        self.news.borrow_mut().push(News {
            id,
            ..news.clone()
        });
        Ok(id)
    }

    fn update_news(&self, news: &News) -> RepoResult<()> {
        for n in self.news.borrow_mut().iter_mut() {
            if n.id == news.id {
                *n = news.clone();
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }

    fn delete_news(&self, ids: &[Id]) -> RepoResult<usize> {
        Ok(Self::delete_by_ids(&self.news, ids, |n| n.id))
    }

    fn get_news(&self, id: Id) -> RepoResult<News> {
        self.news
            .borrow()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn news_of_set(&self, news_set_id: Id) -> RepoResult<Vec<News>> {
        Ok(self
            .news
            .borrow()
            .iter()
            .filter(|n| n.news_set == Some(news_set_id))
            .cloned()
            .collect())
    }

    fn all_news(&self) -> RepoResult<Vec<News>> {
        Ok(self.news.borrow().clone())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<Id> {
        let id = self.next_id();
        self.comments.borrow_mut().push(Comment {
            id,
            ..comment.clone()
        });
        Ok(id)
    }

    fn delete_comments(&self, ids: &[Id]) -> RepoResult<usize> {
        Ok(Self::delete_by_ids(&self.comments, ids, |c| c.id))
    }

    fn get_comment(&self, id: Id) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn comments_of_set(&self, comment_set_id: Id) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.comment_set == comment_set_id)
            .cloned()
            .collect())
    }
}

impl SequenceRepo for MockDb {
    fn next_sequence_number(&self, code: &str) -> RepoResult<i64> {
        let mut sequences = self.sequences.borrow_mut();
        let value = sequences.entry(code.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }
}

#[cfg(test)]
mod visibility {
    use super::*;
    use crate::usecases::{self, Visibility};

    fn subsidiary(db: &MockDb, name: &str) -> Id {
        usecases::create_subsidiary(
            db,
            usecases::NewSubsidiary {
                name: name.into(),
                ..Default::default()
            },
        )
        .unwrap()
        .id
    }

    fn event(db: &MockDb, title: &str, subsidiary: Id) -> Id {
        usecases::create_event(
            db,
            &Visibility::All,
            usecases::NewEvent {
                title: title.into(),
                description: None,
                starts_at: Timestamp::from_seconds(0),
                ends_at: None,
                address: None,
                subsidiary,
                event_type: None,
                created_by: None,
            },
        )
        .unwrap()
        .id
    }

    #[test]
    fn manager_scope_is_subset_of_all() {
        let db = MockDb::default();
        let manager_id = db
            .create_user(
                &User::build()
                    .email("manager@example.com")
                    .roles(vec![Role::Manager])
                    .finish(),
            )
            .unwrap();
        let managed = subsidiary(&db, "Managed Branch");
        let other = subsidiary(&db, "Other Branch");
        db.set_subsidiary_managers(managed, &[manager_id]).unwrap();
        event(&db, "Managed Event", managed);
        event(&db, "Other Event", other);

        let manager = db.get_user(manager_id).unwrap();
        let visibility = usecases::visibility_of(&db, Some(&manager)).unwrap();
        assert_eq!(visibility, Visibility::Subsidiaries(vec![managed]));

        let scoped = usecases::list_events(&db, &visibility).unwrap();
        let all = usecases::list_events(&db, &Visibility::All).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].subsidiary, managed);
        assert!(scoped.len() < all.len());
        assert!(scoped.iter().all(|e| all.iter().any(|a| a.id == e.id)));
    }

    #[test]
    fn blocked_user_has_no_visibility() {
        let db = MockDb::default();
        let blocked = User::build()
            .id(7)
            .email("blocked@example.com")
            .roles(vec![Role::Blocked])
            .finish();
        assert!(usecases::visibility_of(&db, Some(&blocked)).is_err());
    }

    #[test]
    fn delete_subsidiary_cascades_events_and_sets() {
        let db = MockDb::default();
        let id = subsidiary(&db, "Branch");
        event(&db, "Event", id);
        assert_eq!(db.count_events().unwrap(), 1);
        let count = usecases::delete_subsidiaries(&db, &[id]).unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.count_events().unwrap(), 0);
        assert!(db.subsidiaries.borrow().is_empty());
    }
}
