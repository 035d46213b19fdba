use super::*;

impl<'a> OrganizationRepo for DbReadOnly<'a> {
    fn create_organization(&self, _org: &MainOrganization) -> Result<Id> {
        unreachable!();
    }
    fn update_organization(&self, _org: &MainOrganization) -> Result<()> {
        unreachable!();
    }
    fn delete_organizations(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_organization(&self, id: Id) -> Result<MainOrganization> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_organization_by_name(&self, name: &str) -> Result<Option<MainOrganization>> {
        try_get_organization_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_organizations(&self) -> Result<Vec<MainOrganization>> {
        all_organizations(&mut self.conn.borrow_mut())
    }
    fn organizations_of_subsidiaries(
        &self,
        subsidiary_ids: &[Id],
    ) -> Result<Vec<MainOrganization>> {
        organizations_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> OrganizationRepo for DbReadWrite<'a> {
    fn create_organization(&self, org: &MainOrganization) -> Result<Id> {
        create_organization(&mut self.conn.borrow_mut(), org)
    }
    fn update_organization(&self, org: &MainOrganization) -> Result<()> {
        update_organization(&mut self.conn.borrow_mut(), org)
    }
    fn delete_organizations(&self, ids: &[Id]) -> Result<usize> {
        delete_organizations(&mut self.conn.borrow_mut(), ids)
    }

    fn get_organization(&self, id: Id) -> Result<MainOrganization> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_organization_by_name(&self, name: &str) -> Result<Option<MainOrganization>> {
        try_get_organization_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_organizations(&self) -> Result<Vec<MainOrganization>> {
        all_organizations(&mut self.conn.borrow_mut())
    }
    fn organizations_of_subsidiaries(
        &self,
        subsidiary_ids: &[Id],
    ) -> Result<Vec<MainOrganization>> {
        organizations_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> OrganizationRepo for DbConnection<'a> {
    fn create_organization(&self, org: &MainOrganization) -> Result<Id> {
        create_organization(&mut self.conn.borrow_mut(), org)
    }
    fn update_organization(&self, org: &MainOrganization) -> Result<()> {
        update_organization(&mut self.conn.borrow_mut(), org)
    }
    fn delete_organizations(&self, ids: &[Id]) -> Result<usize> {
        delete_organizations(&mut self.conn.borrow_mut(), ids)
    }

    fn get_organization(&self, id: Id) -> Result<MainOrganization> {
        get_organization(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_organization_by_name(&self, name: &str) -> Result<Option<MainOrganization>> {
        try_get_organization_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn all_organizations(&self) -> Result<Vec<MainOrganization>> {
        all_organizations(&mut self.conn.borrow_mut())
    }
    fn organizations_of_subsidiaries(
        &self,
        subsidiary_ids: &[Id],
    ) -> Result<Vec<MainOrganization>> {
        organizations_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

fn new_org_record<'a>(
    org: &'a MainOrganization,
    updated_at: i64,
) -> models::NewMainOrganization<'a> {
    models::NewMainOrganization {
        name: &org.name,
        description: org.description.as_deref(),
        created_at: org.created_at.into_seconds(),
        updated_at,
    }
}

fn create_organization(conn: &mut SqliteConnection, org: &MainOrganization) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::main_organizations::table)
        .values(&new_org_record(org, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_organization(conn: &mut SqliteConnection, org: &MainOrganization) -> Result<()> {
    use schema::main_organizations::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::main_organizations.filter(dsl::id.eq(org.id.value())))
        .set(&new_org_record(org, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_organizations(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::main_organizations::dsl;
    diesel::delete(dsl::main_organizations.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_organization(conn: &mut SqliteConnection, id: Id) -> Result<MainOrganization> {
    use schema::main_organizations::dsl;
    Ok(dsl::main_organizations
        .filter(dsl::id.eq(id.value()))
        .first::<models::MainOrganizationEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_organization_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<MainOrganization>> {
    use schema::main_organizations::dsl;
    Ok(dsl::main_organizations
        .filter(dsl::name.eq(name))
        .first::<models::MainOrganizationEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_organizations(conn: &mut SqliteConnection) -> Result<Vec<MainOrganization>> {
    Ok(schema::main_organizations::table
        .load::<models::MainOrganizationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn organizations_of_subsidiaries(
    conn: &mut SqliteConnection,
    subsidiary_ids: &[Id],
) -> Result<Vec<MainOrganization>> {
    let org_ids: Vec<i64> = {
        use schema::subsidiaries::dsl;
        dsl::subsidiaries
            .select(dsl::main_organization_id)
            .filter(dsl::id.eq_any(to_rowids(subsidiary_ids)))
            .load::<Option<i64>>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .flatten()
            .collect()
    };
    use schema::main_organizations::dsl;
    Ok(dsl::main_organizations
        .filter(dsl::id.eq_any(org_ids))
        .load::<models::MainOrganizationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
