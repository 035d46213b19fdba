use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: String,
    pub country: String,
    pub state: Option<String>,
}

fn parse_new_address(new: NewAddress) -> Result<Address> {
    if new.city.trim().is_empty() {
        return Err(Error::EmptyField("city"));
    }
    if new.country.trim().is_empty() {
        return Err(Error::EmptyField("country"));
    }
    Ok(Address {
        id: Id::default(),
        street: new.street,
        zip: new.zip,
        city: new.city,
        country: new.country,
        state: new.state,
        created_at: Timestamp::now(),
    })
}

pub fn create_address<R: AddressRepo>(repo: &R, new: NewAddress) -> Result<Address> {
    let address = parse_new_address(new)?;
    let id = repo.create_address(&address)?;
    Ok(Address { id, ..address })
}

pub fn update_address<R: AddressRepo>(repo: &R, id: Id, new: NewAddress) -> Result<()> {
    let old = repo.get_address(id)?;
    let address = Address {
        id,
        created_at: old.created_at,
        ..parse_new_address(new)?
    };
    repo.update_address(&address)?;
    Ok(())
}

pub fn delete_addresses<R: AddressRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_addresses(ids)?)
}

pub fn list_addresses<R: AddressRepo>(repo: &R, visibility: &Visibility) -> Result<Vec<Address>> {
    let addresses = match visibility {
        Visibility::All => repo.all_addresses()?,
        Visibility::Subsidiaries(ids) => repo.addresses_of_subsidiaries(ids)?,
    };
    Ok(addresses)
}
