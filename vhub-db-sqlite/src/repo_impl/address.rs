use super::*;

impl<'a> AddressRepo for DbReadOnly<'a> {
    fn create_address(&self, _address: &Address) -> Result<Id> {
        unreachable!();
    }
    fn update_address(&self, _address: &Address) -> Result<()> {
        unreachable!();
    }
    fn delete_addresses(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_address(&self, id: Id) -> Result<Address> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn addresses_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Address>> {
        addresses_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> AddressRepo for DbReadWrite<'a> {
    fn create_address(&self, address: &Address) -> Result<Id> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, address: &Address) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), address)
    }
    fn delete_addresses(&self, ids: &[Id]) -> Result<usize> {
        delete_addresses(&mut self.conn.borrow_mut(), ids)
    }

    fn get_address(&self, id: Id) -> Result<Address> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn addresses_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Address>> {
        addresses_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

impl<'a> AddressRepo for DbConnection<'a> {
    fn create_address(&self, address: &Address) -> Result<Id> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, address: &Address) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), address)
    }
    fn delete_addresses(&self, ids: &[Id]) -> Result<usize> {
        delete_addresses(&mut self.conn.borrow_mut(), ids)
    }

    fn get_address(&self, id: Id) -> Result<Address> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<Address>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn addresses_of_subsidiaries(&self, subsidiary_ids: &[Id]) -> Result<Vec<Address>> {
        addresses_of_subsidiaries(&mut self.conn.borrow_mut(), subsidiary_ids)
    }
}

fn new_address_record<'a>(address: &'a Address, updated_at: i64) -> models::NewAddress<'a> {
    models::NewAddress {
        street: address.street.as_deref(),
        zip: address.zip.as_deref(),
        city: &address.city,
        country: &address.country,
        state: address.state.as_deref(),
        created_at: address.created_at.into_seconds(),
        updated_at,
    }
}

fn create_address(conn: &mut SqliteConnection, address: &Address) -> Result<Id> {
    let now = Timestamp::now().into_seconds();
    diesel::insert_into(schema::addresses::table)
        .values(&new_address_record(address, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn update_address(conn: &mut SqliteConnection, address: &Address) -> Result<()> {
    use schema::addresses::dsl;
    let now = Timestamp::now().into_seconds();
    let count = diesel::update(dsl::addresses.filter(dsl::id.eq(address.id.value())))
        .set(&new_address_record(address, now))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_addresses(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::addresses::dsl;
    diesel::delete(dsl::addresses.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_address(conn: &mut SqliteConnection, id: Id) -> Result<Address> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .filter(dsl::id.eq(id.value()))
        .first::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<Address>> {
    Ok(schema::addresses::table
        .load::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn addresses_of_subsidiaries(
    conn: &mut SqliteConnection,
    subsidiary_ids: &[Id],
) -> Result<Vec<Address>> {
    let rowids = to_rowids(subsidiary_ids);
    let mut address_ids: Vec<i64> = {
        use schema::subsidiaries::dsl;
        dsl::subsidiaries
            .select(dsl::address_id)
            .filter(dsl::id.eq_any(&rowids))
            .load::<Option<i64>>(conn)
            .map_err(from_diesel_err)?
            .into_iter()
            .flatten()
            .collect()
    };
    {
        use schema::events::dsl;
        address_ids.extend(
            dsl::events
                .select(dsl::address_id)
                .filter(dsl::subsidiary_id.eq_any(&rowids))
                .load::<Option<i64>>(conn)
                .map_err(from_diesel_err)?
                .into_iter()
                .flatten(),
        );
    }
    address_ids.sort_unstable();
    address_ids.dedup();
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .filter(dsl::id.eq_any(address_ids))
        .load::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
