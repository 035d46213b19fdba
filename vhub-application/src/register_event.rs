use super::*;

pub fn register_for_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    event_id: Id,
    user_id: Id,
) -> Result<EventRegistration> {
    let registration = connections.exclusive()?.transaction(|conn| {
        usecases::register_for_event(conn, event_id, user_id).map_err(|err| {
            debug!("Failed to register user {user_id} for event {event_id}: {err}");
            err
        })
    })?;
    notify.notify(NotificationEvent::EventRegistrationConfirmed {
        registration: &registration,
    });
    Ok(registration)
}

pub fn unregister_from_event(
    connections: &sqlite::Connections,
    event_id: Id,
    user_id: Id,
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::unregister_from_event(conn, event_id, user_id))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn register_and_unregister() {
        let fixture = BackendFixture::new();
        let user_id = fixture.create_user(
            usecases::NewUser {
                email: "volunteer@example.com".parse().unwrap(),
                password: "secret".into(),
            },
            None,
        );
        let event_id = fixture.create_event("Harvest Help");

        let registration =
            flows::register_for_event(&fixture.db_connections, &fixture.notify, event_id, user_id)
                .unwrap();
        assert_eq!(registration.registration_number, 1);

        // A second registration of the same pair must be rejected.
        let err =
            flows::register_for_event(&fixture.db_connections, &fixture.notify, event_id, user_id)
                .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::AlreadyRegistered))
        ));

        flows::unregister_from_event(&fixture.db_connections, event_id, user_id).unwrap();

        // Unregistering twice reports a missing registration.
        let err =
            flows::unregister_from_event(&fixture.db_connections, event_id, user_id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Repo(
                RepoError::NotFound
            )))
        ));
    }

    #[test]
    fn registration_numbers_come_from_the_sequence() {
        let fixture = BackendFixture::new();
        let event_id = fixture.create_event("Food Drive");
        let first = fixture.create_user(
            usecases::NewUser {
                email: "a@example.com".parse().unwrap(),
                password: "secret".into(),
            },
            None,
        );
        let second = fixture.create_user(
            usecases::NewUser {
                email: "b@example.com".parse().unwrap(),
                password: "secret".into(),
            },
            None,
        );
        let r1 =
            flows::register_for_event(&fixture.db_connections, &fixture.notify, event_id, first)
                .unwrap();
        let r2 =
            flows::register_for_event(&fixture.db_connections, &fixture.notify, event_id, second)
                .unwrap();
        assert_eq!(r1.registration_number, 1);
        assert_eq!(r2.registration_number, 2);
    }
}
