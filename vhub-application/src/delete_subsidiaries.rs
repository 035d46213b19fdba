use super::*;

pub fn delete_subsidiaries(connections: &sqlite::Connections, ids: &[Id]) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_subsidiaries(conn, ids))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn delete_subsidiary_with_events() {
        let fixture = BackendFixture::new();
        let subsidiary = flows::create_subsidiary(
            &fixture.db_connections,
            usecases::NewSubsidiary {
                name: "Branch".into(),
                ..Default::default()
            },
        )
        .unwrap();
        flows::create_event(
            &fixture.db_connections,
            &fixture.notify,
            &usecases::Visibility::All,
            usecases::NewEvent {
                title: "Cleanup Day".into(),
                description: None,
                starts_at: Timestamp::from_seconds(10_000),
                ends_at: None,
                address: None,
                subsidiary: subsidiary.id,
                event_type: None,
                created_by: None,
            },
        )
        .unwrap();

        let count = flows::delete_subsidiaries(&fixture.db_connections, &[subsidiary.id]).unwrap();
        assert_eq!(count, 1);
        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(db.count_events().unwrap(), 0);
        assert!(db.all_subsidiaries().unwrap().is_empty());
    }

    #[test]
    fn deleting_a_missing_subsidiary_counts_zero() {
        let fixture = BackendFixture::new();
        let count = flows::delete_subsidiaries(&fixture.db_connections, &[Id::new(4711)]).unwrap();
        assert_eq!(count, 0);
    }
}
