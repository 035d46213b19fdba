use super::*;

impl<'a> SubsidiaryRepo for DbReadOnly<'a> {
    fn create_subsidiary(&self, _subsidiary: &Subsidiary) -> Result<Id> {
        unreachable!();
    }
    fn update_subsidiary(&self, _subsidiary: &Subsidiary) -> Result<()> {
        unreachable!();
    }
    fn delete_subsidiaries(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }
    fn set_subsidiary_managers(&self, _id: Id, _user_ids: &[Id]) -> Result<()> {
        unreachable!();
    }
    fn set_subsidiary_missions(&self, _id: Id, _mission_ids: &[Id]) -> Result<()> {
        unreachable!();
    }

    fn get_subsidiary(&self, id: Id) -> Result<Subsidiary> {
        get_subsidiary(&mut self.conn.borrow_mut(), id)
    }
    fn all_subsidiaries(&self) -> Result<Vec<Subsidiary>> {
        all_subsidiaries(&mut self.conn.borrow_mut())
    }
    fn subsidiaries_by_ids(&self, ids: &[Id]) -> Result<Vec<Subsidiary>> {
        subsidiaries_by_ids(&mut self.conn.borrow_mut(), ids)
    }
    fn subsidiary_ids_managed_by(&self, user_id: Id) -> Result<Vec<Id>> {
        subsidiary_ids_managed_by(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> SubsidiaryRepo for DbReadWrite<'a> {
    fn create_subsidiary(&self, subsidiary: &Subsidiary) -> Result<Id> {
        create_subsidiary(&mut self.conn.borrow_mut(), subsidiary)
    }
    fn update_subsidiary(&self, subsidiary: &Subsidiary) -> Result<()> {
        update_subsidiary(&mut self.conn.borrow_mut(), subsidiary)
    }
    fn delete_subsidiaries(&self, ids: &[Id]) -> Result<usize> {
        delete_subsidiaries(&mut self.conn.borrow_mut(), ids)
    }
    fn set_subsidiary_managers(&self, id: Id, user_ids: &[Id]) -> Result<()> {
        set_subsidiary_managers(&mut self.conn.borrow_mut(), id, user_ids)
    }
    fn set_subsidiary_missions(&self, id: Id, mission_ids: &[Id]) -> Result<()> {
        set_subsidiary_missions(&mut self.conn.borrow_mut(), id, mission_ids)
    }

    fn get_subsidiary(&self, id: Id) -> Result<Subsidiary> {
        get_subsidiary(&mut self.conn.borrow_mut(), id)
    }
    fn all_subsidiaries(&self) -> Result<Vec<Subsidiary>> {
        all_subsidiaries(&mut self.conn.borrow_mut())
    }
    fn subsidiaries_by_ids(&self, ids: &[Id]) -> Result<Vec<Subsidiary>> {
        subsidiaries_by_ids(&mut self.conn.borrow_mut(), ids)
    }
    fn subsidiary_ids_managed_by(&self, user_id: Id) -> Result<Vec<Id>> {
        subsidiary_ids_managed_by(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> SubsidiaryRepo for DbConnection<'a> {
    fn create_subsidiary(&self, subsidiary: &Subsidiary) -> Result<Id> {
        create_subsidiary(&mut self.conn.borrow_mut(), subsidiary)
    }
    fn update_subsidiary(&self, subsidiary: &Subsidiary) -> Result<()> {
        update_subsidiary(&mut self.conn.borrow_mut(), subsidiary)
    }
    fn delete_subsidiaries(&self, ids: &[Id]) -> Result<usize> {
        delete_subsidiaries(&mut self.conn.borrow_mut(), ids)
    }
    fn set_subsidiary_managers(&self, id: Id, user_ids: &[Id]) -> Result<()> {
        set_subsidiary_managers(&mut self.conn.borrow_mut(), id, user_ids)
    }
    fn set_subsidiary_missions(&self, id: Id, mission_ids: &[Id]) -> Result<()> {
        set_subsidiary_missions(&mut self.conn.borrow_mut(), id, mission_ids)
    }

    fn get_subsidiary(&self, id: Id) -> Result<Subsidiary> {
        get_subsidiary(&mut self.conn.borrow_mut(), id)
    }
    fn all_subsidiaries(&self) -> Result<Vec<Subsidiary>> {
        all_subsidiaries(&mut self.conn.borrow_mut())
    }
    fn subsidiaries_by_ids(&self, ids: &[Id]) -> Result<Vec<Subsidiary>> {
        subsidiaries_by_ids(&mut self.conn.borrow_mut(), ids)
    }
    fn subsidiary_ids_managed_by(&self, user_id: Id) -> Result<Vec<Id>> {
        subsidiary_ids_managed_by(&mut self.conn.borrow_mut(), user_id)
    }
}

fn load_mission_ids(conn: &mut SqliteConnection, subsidiary_rowid: i64) -> Result<Vec<Id>> {
    use schema::subsidiaries_missions::dsl;
    Ok(dsl::subsidiaries_missions
        .select(dsl::mission_id)
        .filter(dsl::subsidiary_id.eq(subsidiary_rowid))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn new_subsidiary_record<'a>(
    subsidiary: &'a Subsidiary,
    updated_at: i64,
) -> models::NewSubsidiary<'a> {
    models::NewSubsidiary {
        name: &subsidiary.name,
        main_organization_id: subsidiary.main_organization.map(Id::value),
        address_id: subsidiary.address.map(Id::value),
        photo_set_id: subsidiary.photo_set.map(Id::value),
        news_set_id: subsidiary.news_set.map(Id::value),
        comment_set_id: subsidiary.comment_set.map(Id::value),
        created_at: subsidiary.created_at.into_seconds(),
        updated_at,
    }
}

fn create_subsidiary(conn: &mut SqliteConnection, subsidiary: &Subsidiary) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::subsidiaries::table)
        .values(&new_subsidiary_record(subsidiary, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_subsidiary(conn: &mut SqliteConnection, subsidiary: &Subsidiary) -> Result<()> {
    use schema::subsidiaries::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::subsidiaries.filter(dsl::id.eq(subsidiary.id.value())))
        .set(&new_subsidiary_record(subsidiary, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_subsidiaries(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::subsidiaries::dsl;
    diesel::delete(dsl::subsidiaries.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_subsidiary(conn: &mut SqliteConnection, id: Id) -> Result<Subsidiary> {
    use schema::subsidiaries::dsl;
    let entity = dsl::subsidiaries
        .filter(dsl::id.eq(id.value()))
        .first::<models::SubsidiaryEntity>(conn)
        .map_err(from_diesel_err)?;
    let missions = load_mission_ids(conn, entity.id)?;
    Ok(entity.into_subsidiary(missions))
}

fn all_subsidiaries(conn: &mut SqliteConnection) -> Result<Vec<Subsidiary>> {
    let entities = schema::subsidiaries::table
        .load::<models::SubsidiaryEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| {
            let missions = load_mission_ids(conn, entity.id)?;
            Ok(entity.into_subsidiary(missions))
        })
        .collect()
}

fn subsidiaries_by_ids(conn: &mut SqliteConnection, ids: &[Id]) -> Result<Vec<Subsidiary>> {
    use schema::subsidiaries::dsl;
    let entities = dsl::subsidiaries
        .filter(dsl::id.eq_any(to_rowids(ids)))
        .load::<models::SubsidiaryEntity>(conn)
        .map_err(from_diesel_err)?;
    entities
        .into_iter()
        .map(|entity| {
            let missions = load_mission_ids(conn, entity.id)?;
            Ok(entity.into_subsidiary(missions))
        })
        .collect()
}

fn subsidiary_ids_managed_by(conn: &mut SqliteConnection, user_id: Id) -> Result<Vec<Id>> {
    use schema::subsidiaries_users::dsl;
    Ok(dsl::subsidiaries_users
        .select(dsl::subsidiary_id)
        .filter(dsl::user_id.eq(user_id.value()))
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn set_subsidiary_managers(
    conn: &mut SqliteConnection,
    id: Id,
    user_ids: &[Id],
) -> Result<()> {
    use schema::subsidiaries_users::dsl;
    diesel::delete(dsl::subsidiaries_users.filter(dsl::subsidiary_id.eq(id.value())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let mut rowids = to_rowids(user_ids);
    rowids.sort_unstable();
    rowids.dedup();
    let new_managers: Vec<_> = rowids
        .into_iter()
        .map(|user_id| models::NewSubsidiaryUser {
            subsidiary_id: id.value(),
            user_id,
        })
        .collect();
    diesel::insert_into(schema::subsidiaries_users::table)
        .values(&new_managers)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn set_subsidiary_missions(
    conn: &mut SqliteConnection,
    id: Id,
    mission_ids: &[Id],
) -> Result<()> {
    use schema::subsidiaries_missions::dsl;
    diesel::delete(dsl::subsidiaries_missions.filter(dsl::subsidiary_id.eq(id.value())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let mut rowids = to_rowids(mission_ids);
    rowids.sort_unstable();
    rowids.dedup();
    let new_missions: Vec<_> = rowids
        .into_iter()
        .map(|mission_id| models::NewSubsidiaryMission {
            subsidiary_id: id.value(),
            mission_id,
        })
        .collect();
    diesel::insert_into(schema::subsidiaries_missions::table)
        .values(&new_missions)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}
