use super::{prelude::*, subsidiaries::delete_owned_sets};

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Option<Timestamp>,
    pub address: Option<Id>,
    pub subsidiary: Id,
    pub event_type: Option<Id>,
    pub created_by: Option<Id>,
}

fn parse_new_event(new: NewEvent) -> Result<Event> {
    validated_name("event title", &new.title)?;
    if let Some(ends_at) = new.ends_at {
        if ends_at < new.starts_at {
            return Err(Error::EndDateBeforeStart);
        }
    }
    Ok(Event {
        id: Id::default(),
        title: new.title,
        description: new.description,
        starts_at: new.starts_at,
        ends_at: new.ends_at,
        address: new.address,
        subsidiary: new.subsidiary,
        event_type: new.event_type,
        created_by: new.created_by,
        photo_set: None,
        news_set: None,
        comment_set: None,
        created_at: Timestamp::now(),
    })
}

pub fn create_event<R>(repo: &R, visibility: &Visibility, new: NewEvent) -> Result<Event>
where
    R: EventRepo + SubsidiaryRepo + SetRepo,
{
    ensure_subsidiary_in_scope(visibility, new.subsidiary)?;
    // The subsidiary must exist before any set rows are created.
    repo.get_subsidiary(new.subsidiary)?;
    let mut event = parse_new_event(new)?;
    event.photo_set = Some(repo.create_photo_set()?);
    event.news_set = Some(repo.create_news_set()?);
    event.comment_set = Some(repo.create_comment_set()?);
    let id = repo.create_event(&event)?;
    Ok(Event { id, ..event })
}

pub fn update_event<R>(repo: &R, visibility: &Visibility, id: Id, new: NewEvent) -> Result<()>
where
    R: EventRepo + SubsidiaryRepo,
{
    let old = repo.get_event(id)?;
    ensure_subsidiary_in_scope(visibility, old.subsidiary)?;
    ensure_subsidiary_in_scope(visibility, new.subsidiary)?;
    if new.subsidiary != old.subsidiary {
        repo.get_subsidiary(new.subsidiary)?;
    }
    let event = Event {
        id,
        created_by: old.created_by,
        photo_set: old.photo_set,
        news_set: old.news_set,
        comment_set: old.comment_set,
        created_at: old.created_at,
        ..parse_new_event(new)?
    };
    repo.update_event(&event)?;
    Ok(())
}

pub fn delete_events<R>(repo: &R, visibility: &Visibility, ids: &[Id]) -> Result<usize>
where
    R: EventRepo + SetRepo,
{
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    let mut existing = Vec::with_capacity(ids.len());
    for id in ids {
        match repo.get_event(*id) {
            Ok(event) => existing.push(event),
            Err(crate::repositories::Error::NotFound) => (),
            Err(err) => return Err(err.into()),
        }
    }
    for event in &existing {
        ensure_subsidiary_in_scope(visibility, event.subsidiary)?;
    }
    let count = repo.delete_events(ids)?;
    delete_owned_sets(
        repo,
        existing
            .iter()
            .map(|e| (e.photo_set, e.news_set, e.comment_set)),
    )?;
    Ok(count)
}

pub fn get_event<R: EventRepo>(repo: &R, id: Id) -> Result<Event> {
    Ok(repo.get_event(id)?)
}

pub fn list_events<R: EventRepo>(repo: &R, visibility: &Visibility) -> Result<Vec<Event>> {
    let events = match visibility {
        Visibility::All => repo.all_events_chronologically()?,
        Visibility::Subsidiaries(ids) => repo.events_of_subsidiaries(ids)?,
    };
    Ok(events)
}
