use super::*;

impl<'a> EventRegistrationRepo for DbReadOnly<'a> {
    fn create_event_registration(&self, _registration: &EventRegistration) -> Result<()> {
        unreachable!();
    }
    fn delete_event_registration(&self, _event_id: Id, _user_id: Id) -> Result<()> {
        unreachable!();
    }

    fn try_get_event_registration(
        &self,
        event_id: Id,
        user_id: Id,
    ) -> Result<Option<EventRegistration>> {
        try_get_event_registration(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn registrations_of_event(&self, event_id: Id) -> Result<Vec<EventRegistration>> {
        registrations_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

impl<'a> EventRegistrationRepo for DbReadWrite<'a> {
    fn create_event_registration(&self, registration: &EventRegistration) -> Result<()> {
        create_event_registration(&mut self.conn.borrow_mut(), registration)
    }
    fn delete_event_registration(&self, event_id: Id, user_id: Id) -> Result<()> {
        delete_event_registration(&mut self.conn.borrow_mut(), event_id, user_id)
    }

    fn try_get_event_registration(
        &self,
        event_id: Id,
        user_id: Id,
    ) -> Result<Option<EventRegistration>> {
        try_get_event_registration(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn registrations_of_event(&self, event_id: Id) -> Result<Vec<EventRegistration>> {
        registrations_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

impl<'a> EventRegistrationRepo for DbConnection<'a> {
    fn create_event_registration(&self, registration: &EventRegistration) -> Result<()> {
        create_event_registration(&mut self.conn.borrow_mut(), registration)
    }
    fn delete_event_registration(&self, event_id: Id, user_id: Id) -> Result<()> {
        delete_event_registration(&mut self.conn.borrow_mut(), event_id, user_id)
    }

    fn try_get_event_registration(
        &self,
        event_id: Id,
        user_id: Id,
    ) -> Result<Option<EventRegistration>> {
        try_get_event_registration(&mut self.conn.borrow_mut(), event_id, user_id)
    }
    fn registrations_of_event(&self, event_id: Id) -> Result<Vec<EventRegistration>> {
        registrations_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_event_registration(
    conn: &mut SqliteConnection,
    registration: &EventRegistration,
) -> Result<()> {
    let new_registration = models::NewEventRegistration {
        event_id: registration.event.value(),
        user_id: registration.user.value(),
        registered_at: registration.registered_at.into_seconds(),
        registration_number: registration.registration_number,
    };
    // A duplicate pair violates the primary key and maps to
    // `AlreadyExists`.
    diesel::insert_into(schema::events_users::table)
        .values(&new_registration)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_event_registration(
    conn: &mut SqliteConnection,
    event_id: Id,
    user_id: Id,
) -> Result<()> {
    use schema::events_users::dsl;
    let count = diesel::delete(
        dsl::events_users
            .filter(dsl::event_id.eq(event_id.value()))
            .filter(dsl::user_id.eq(user_id.value())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn try_get_event_registration(
    conn: &mut SqliteConnection,
    event_id: Id,
    user_id: Id,
) -> Result<Option<EventRegistration>> {
    use schema::events_users::dsl;
    Ok(dsl::events_users
        .filter(dsl::event_id.eq(event_id.value()))
        .filter(dsl::user_id.eq(user_id.value()))
        .first::<models::EventRegistrationEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn registrations_of_event(
    conn: &mut SqliteConnection,
    event_id: Id,
) -> Result<Vec<EventRegistration>> {
    use schema::events_users::dsl;
    Ok(dsl::events_users
        .filter(dsl::event_id.eq(event_id.value()))
        .order_by(dsl::registered_at)
        .load::<models::EventRegistrationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
