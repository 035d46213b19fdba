use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewEventType {
    pub name: String,
}

pub fn create_event_type<R: EventTypeRepo>(repo: &R, new: NewEventType) -> Result<EventType> {
    validated_name("event type name", &new.name)?;
    if repo.try_get_event_type_by_name(&new.name)?.is_some() {
        return Err(Error::DuplicateName("event type"));
    }
    let event_type = EventType {
        id: Id::default(),
        name: new.name,
    };
    let id = repo.create_event_type(&event_type)?;
    Ok(EventType { id, ..event_type })
}

pub fn update_event_type<R: EventTypeRepo>(repo: &R, id: Id, new: NewEventType) -> Result<()> {
    validated_name("event type name", &new.name)?;
    if let Some(existing) = repo.try_get_event_type_by_name(&new.name)? {
        if existing.id != id {
            return Err(Error::DuplicateName("event type"));
        }
    }
    repo.update_event_type(&EventType {
        id,
        name: new.name,
    })?;
    Ok(())
}

pub fn delete_event_types<R: EventTypeRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_event_types(ids)?)
}

pub fn list_event_types<R: EventTypeRepo>(
    repo: &R,
    visibility: &Visibility,
) -> Result<Vec<EventType>> {
    let event_types = match visibility {
        Visibility::All => repo.all_event_types()?,
        Visibility::Subsidiaries(ids) => repo.event_types_of_subsidiaries(ids)?,
    };
    Ok(event_types)
}
