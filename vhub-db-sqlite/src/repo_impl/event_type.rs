use super::*;

impl<'a> EventTypeRepo for DbReadOnly<'a> {
    fn create_event_type(&self, _event_type: &EventType) -> Result<Id> {
        unreachable!();
    }
    fn update_event_type(&self, _event_type: &EventType) -> Result<()> {
        unreachable!();
    }
    fn delete_event_types(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_event_type(&self, id: Id) -> Result<EventType> {
        get_event_type(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_event_type_by_name(&self, name: &str) -> Result<Option<EventType>> {
        try_get_event_type_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_event_types(&self) -> Result<Vec<EventType>> {
        all_event_types(&mut self.conn.borrow_mut())
    }
    fn event_types_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<EventType>> {
        event_types_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> EventTypeRepo for DbReadWrite<'a> {
    fn create_event_type(&self, event_type: &EventType) -> Result<Id> {
        create_event_type(&mut self.conn.borrow_mut(), event_type)
    }
    fn update_event_type(&self, event_type: &EventType) -> Result<()> {
        update_event_type(&mut self.conn.borrow_mut(), event_type)
    }
    fn delete_event_types(&self, ids: &[Id]) -> Result<usize> {
        delete_event_types(&mut self.conn.borrow_mut(), ids)
    }

    fn get_event_type(&self, id: Id) -> Result<EventType> {
        get_event_type(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_event_type_by_name(&self, name: &str) -> Result<Option<EventType>> {
        try_get_event_type_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_event_types(&self) -> Result<Vec<EventType>> {
        all_event_types(&mut self.conn.borrow_mut())
    }
    fn event_types_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<EventType>> {
        event_types_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> EventTypeRepo for DbConnection<'a> {
    fn create_event_type(&self, event_type: &EventType) -> Result<Id> {
        create_event_type(&mut self.conn.borrow_mut(), event_type)
    }
    fn update_event_type(&self, event_type: &EventType) -> Result<()> {
        update_event_type(&mut self.conn.borrow_mut(), event_type)
    }
    fn delete_event_types(&self, ids: &[Id]) -> Result<usize> {
        delete_event_types(&mut self.conn.borrow_mut(), ids)
    }

    fn get_event_type(&self, id: Id) -> Result<EventType> {
        get_event_type(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_event_type_by_name(&self, name: &str) -> Result<Option<EventType>> {
        try_get_event_type_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_event_types(&self) -> Result<Vec<EventType>> {
        all_event_types(&mut self.conn.borrow_mut())
    }
    fn event_types_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<EventType>> {
        event_types_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

fn create_event_type(conn: &mut SqliteConnection, event_type: &EventType) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::event_types::table)
        .values(&models::NewEventType {
            name: &event_type.name,
            created_at: now,
            updated_at: now,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_event_type(conn: &mut SqliteConnection, event_type: &EventType) -> Result<()> {
    use schema::event_types::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::event_types.filter(dsl::id.eq(event_type.id.value())))
        .set((dsl::name.eq(&event_type.name), dsl::updated_at.eq(now)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_event_types(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::event_types::dsl;
    diesel::delete(dsl::event_types.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_event_type(conn: &mut SqliteConnection, id: Id) -> Result<EventType> {
    use schema::event_types::dsl;
    Ok(dsl::event_types
        .filter(dsl::id.eq(id.value()))
        .first::<models::EventTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_event_type_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<EventType>> {
    use schema::event_types::dsl;
    Ok(dsl::event_types
        .filter(dsl::name.eq(name))
        .first::<models::EventTypeEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_event_types(conn: &mut SqliteConnection) -> Result<Vec<EventType>> {
    Ok(schema::event_types::table
        .load::<models::EventTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn event_types_of_subsidiaries(
    conn: &mut SqliteConnection,
    subsidiary_ids: &[Id],
) -> Result<Vec<EventType>> {
    let mut type_ids: Vec<i64> = {
        use schema::events::dsl;
        dsl::events
            .select(dsl::event_type_id)
            .filter(dsl::subsidiary_id.eq_any(to_rowids(subsidiary_ids)))
            .load::<Option<i64>>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .flatten()
            .collect()
    };
    type_ids.sort_unstable();
    type_ids.dedup();
    use schema::event_types::dsl;
    Ok(dsl::event_types
        .filter(dsl::id.eq_any(type_ids))
        .load::<models::EventTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
