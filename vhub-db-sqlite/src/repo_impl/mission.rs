use super::*;

impl<'a> MissionRepo for DbReadOnly<'a> {
    fn create_mission(&self, _mission: &Mission) -> Result<Id> {
        unreachable!();
    }
    fn update_mission(&self, _mission: &Mission) -> Result<()> {
        unreachable!();
    }
    fn delete_missions(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_mission(&self, id: Id) -> Result<Mission> {
        get_mission(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_mission_by_name(&self, name: &str) -> Result<Option<Mission>> {
        try_get_mission_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_missions(&self) -> Result<Vec<Mission>> {
        all_missions(&mut self.conn.borrow_mut())
    }
    fn missions_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Mission>> {
        missions_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> MissionRepo for DbReadWrite<'a> {
    fn create_mission(&self, mission: &Mission) -> Result<Id> {
        create_mission(&mut self.conn.borrow_mut(), mission)
    }
    fn update_mission(&self, mission: &Mission) -> Result<()> {
        update_mission(&mut self.conn.borrow_mut(), mission)
    }
    fn delete_missions(&self, ids: &[Id]) -> Result<usize> {
        delete_missions(&mut self.conn.borrow_mut(), ids)
    }

    fn get_mission(&self, id: Id) -> Result<Mission> {
        get_mission(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_mission_by_name(&self, name: &str) -> Result<Option<Mission>> {
        try_get_mission_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_missions(&self) -> Result<Vec<Mission>> {
        all_missions(&mut self.conn.borrow_mut())
    }
    fn missions_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Mission>> {
        missions_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> MissionRepo for DbConnection<'a> {
    fn create_mission(&self, mission: &Mission) -> Result<Id> {
        create_mission(&mut self.conn.borrow_mut(), mission)
    }
    fn update_mission(&self, mission: &Mission) -> Result<()> {
        update_mission(&mut self.conn.borrow_mut(), mission)
    }
    fn delete_missions(&self, ids: &[Id]) -> Result<usize> {
        delete_missions(&mut self.conn.borrow_mut(), ids)
    }

    fn get_mission(&self, id: Id) -> Result<Mission> {
        get_mission(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_mission_by_name(&self, name: &str) -> Result<Option<Mission>> {
        try_get_mission_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_missions(&self) -> Result<Vec<Mission>> {
        all_missions(&mut self.conn.borrow_mut())
    }
    fn missions_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Mission>> {
        missions_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

fn new_mission_record<'a>(mission: &'a Mission, updated_at: i64) -> models::NewMission<'a> {
    models::NewMission {
        name: &mission.name,
        description: mission.description.as_deref(),
        created_at: mission.created_at.into_seconds(),
        updated_at,
    }
}

fn create_mission(conn: &mut SqliteConnection, mission: &Mission) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::missions::table)
        .values(&new_mission_record(mission, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_mission(conn: &mut SqliteConnection, mission: &Mission) -> Result<()> {
    use schema::missions::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::missions.filter(dsl::id.eq(mission.id.value())))
        .set(&new_mission_record(mission, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_missions(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::missions::dsl;
    diesel::delete(dsl::missions.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_mission(conn: &mut SqliteConnection, id: Id) -> Result<Mission> {
    use schema::missions::dsl;
    Ok(dsl::missions
        .filter(dsl::id.eq(id.value()))
        .first::<models::MissionEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_mission_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Mission>> {
    use schema::missions::dsl;
    Ok(dsl::missions
        .filter(dsl::name.eq(name))
        .first::<models::MissionEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_missions(conn: &mut SqliteConnection) -> Result<Vec<Mission>> {
    Ok(schema::missions::table
        .load::<models::MissionEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn missions_of_subsidiaries(
    conn: &mut SqliteConnection,
    subsidiary_ids: &[Id],
) -> Result<Vec<Mission>> {
    let mission_ids: Vec<i64> = {
        use schema::subsidiaries_missions::dsl;
        dsl::subsidiaries_missions
            .select(dsl::mission_id)
            .filter(dsl::subsidiary_id.eq_any(to_rowids(subsidiary_ids)))
            .load::<i64>(conn)
            .map_err(from_diesel_err)?
    };
    use schema::missions::dsl;
    Ok(dsl::missions
        .filter(dsl::id.eq_any(mission_ids))
        .load::<models::MissionEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
