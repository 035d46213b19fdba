use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewMainOrganization {
    pub name: String,
    pub description: Option<String>,
}

pub fn create_organization<R: OrganizationRepo>(
    repo: &R,
    new: NewMainOrganization,
) -> Result<MainOrganization> {
    validated_name("organization name", &new.name)?;
    if repo.try_get_organization_by_name(&new.name)?.is_some() {
        return Err(Error::DuplicateName("organization"));
    }
    let org = MainOrganization {
        id: Id::default(),
        name: new.name,
        description: new.description,
        created_at: Timestamp::now(),
    };
    let id = repo.create_organization(&org)?;
    Ok(MainOrganization { id, ..org })
}

pub fn update_organization<R: OrganizationRepo>(
    repo: &R,
    id: Id,
    new: NewMainOrganization,
) -> Result<()> {
    validated_name("organization name", &new.name)?;
    if let Some(existing) = repo.try_get_organization_by_name(&new.name)? {
        if existing.id != id {
            return Err(Error::DuplicateName("organization"));
        }
    }
    let old = repo.get_organization(id)?;
    let org = MainOrganization {
        id,
        name: new.name,
        description: new.description,
        created_at: old.created_at,
    };
    repo.update_organization(&org)?;
    Ok(())
}

pub fn delete_organizations<R: OrganizationRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_organizations(ids)?)
}

pub fn list_organizations<R: OrganizationRepo>(
    repo: &R,
    visibility: &Visibility,
) -> Result<Vec<MainOrganization>> {
    let orgs = match visibility {
        Visibility::All => repo.all_organizations()?,
        Visibility::Subsidiaries(ids) => repo.organizations_of_subsidiaries(ids)?,
    };
    Ok(orgs)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn reject_duplicate_name() {
        let db = MockDb::default();
        let new = NewMainOrganization {
            name: "Helping Hands".into(),
            description: None,
        };
        assert!(create_organization(&db, new.clone()).is_ok());
        assert!(matches!(
            create_organization(&db, new),
            Err(Error::DuplicateName("organization"))
        ));
    }

    #[test]
    fn reject_invalid_name() {
        let db = MockDb::default();
        let new = NewMainOrganization {
            name: "<script>".into(),
            description: None,
        };
        assert!(matches!(
            create_organization(&db, new),
            Err(Error::InvalidField("organization name"))
        ));
    }

    #[test]
    fn update_keeps_own_name() {
        let db = MockDb::default();
        let org = create_organization(
            &db,
            NewMainOrganization {
                name: "Helping Hands".into(),
                description: None,
            },
        )
        .unwrap();
        // Updating without renaming must not trip the duplicate check.
        let update = NewMainOrganization {
            name: "Helping Hands".into(),
            description: Some("now with a description".into()),
        };
        assert!(update_organization(&db, org.id, update).is_ok());
    }
}
