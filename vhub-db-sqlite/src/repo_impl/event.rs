use super::*;

impl<'a> EventRepo for DbReadOnly<'a> {
    fn create_event(&self, _event: &Event) -> Result<Id> {
        unreachable!();
    }
    fn update_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn delete_events(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_event(&self, id: Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn events_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Event>> {
        events_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

impl<'a> EventRepo for DbReadWrite<'a> {
    fn create_event(&self, event: &Event) -> Result<Id> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_events(&self, ids: &[Id]) -> Result<usize> {
        delete_events(&mut self.conn.borrow_mut(), ids)
    }

    fn get_event(&self, id: Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn events_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Event>> {
        events_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

impl<'a> EventRepo for DbConnection<'a> {
    fn create_event(&self, event: &Event) -> Result<Id> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> Result<()> {
        update_event(&mut self.conn.borrow_mut(), event)
    }
    fn delete_events(&self, ids: &[Id]) -> Result<usize> {
        delete_events(&mut self.conn.borrow_mut(), ids)
    }

    fn get_event(&self, id: Id) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn all_events_chronologically(&self) -> Result<Vec<Event>> {
        all_events_chronologically(&mut self.conn.borrow_mut())
    }
    fn events_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Event>> {
        events_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
    fn count_events(&self) -> Result<usize> {
        count_events(&mut self.conn.borrow_mut())
    }
}

fn new_event_record<'a>(event: &'a Event, updated_at: i64) -> models::NewEvent<'a> {
    models::NewEvent {
        title: &event.title,
        description: event.description.as_deref(),
        starts_at: event.starts_at.into_seconds(),
        ends_at: event.ends_at.map(Timestamp::into_seconds),
        address_id: event.address.map(Id::value),
        subsidiary_id: event.subsidiary.value(),
        event_type_id: event.event_type.map(Id::value),
        created_by: event.created_by.map(Id::value),
        photo_set_id: event.photo_set.map(Id::value),
        news_set_id: event.news_set.map(Id::value),
        comment_set_id: event.comment_set.map(Id::value),
        created_at: event.created_at.into_seconds(),
        updated_at,
    }
}

fn create_event(conn: &mut SqliteConnection, event: &Event) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::events::table)
        .values(&new_event_record(event, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_event(conn: &mut SqliteConnection, event: &Event) -> Result<()> {
    use schema::events::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::events.filter(dsl::id.eq(event.id.value())))
        .set(&new_event_record(event, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_events(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::events::dsl;
    diesel::delete(dsl::events.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_event(conn: &mut SqliteConnection, id: Id) -> Result<Event> {
    use schema::events::dsl;
    Ok(dsl::events
        .filter(dsl::id.eq(id.value()))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_events_chronologically(conn: &mut SqliteConnection) -> Result<Vec<Event>> {
    use schema::events::dsl;
    Ok(dsl::events
        .order_by(dsl::starts_at)
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn events_of_subsidiaries(
    conn: &mut SqliteConnection,
    subsidiary_ids: &[Id],
) -> Result<Vec<Event>> {
    use schema::events::dsl;
    Ok(dsl::events
        .filter(dsl::subsidiary_id.eq_any(to_rowids(subsidiary_ids)))
        .order_by(dsl::starts_at)
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_events(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::events::dsl;
    Ok(dsl::events
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
