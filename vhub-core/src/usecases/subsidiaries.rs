use super::prelude::*;
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone, Default)]
pub struct NewSubsidiary {
    pub name: String,
    pub main_organization: Option<Id>,
    pub address: Option<Id>,
    pub missions: Vec<Id>,
}

pub fn create_subsidiary<R>(repo: &R, new: NewSubsidiary) -> Result<Subsidiary>
where
    R: SubsidiaryRepo + SetRepo,
{
    validated_name("subsidiary name", &new.name)?;
    let subsidiary = Subsidiary {
        id: Id::default(),
        name: new.name,
        main_organization: new.main_organization,
        address: new.address,
        photo_set: Some(repo.create_photo_set()?),
        news_set: Some(repo.create_news_set()?),
        comment_set: Some(repo.create_comment_set()?),
        missions: new.missions,
        created_at: Timestamp::now(),
    };
    let id = repo.create_subsidiary(&subsidiary)?;
    repo.set_subsidiary_missions(id, &subsidiary.missions)?;
    Ok(Subsidiary { id, ..subsidiary })
}

pub fn update_subsidiary<R: SubsidiaryRepo>(repo: &R, id: Id, new: NewSubsidiary) -> Result<()> {
    validated_name("subsidiary name", &new.name)?;
    let mut subsidiary = repo.get_subsidiary(id)?;
    subsidiary.name = new.name;
    subsidiary.main_organization = new.main_organization;
    subsidiary.address = new.address;
    repo.update_subsidiary(&subsidiary)?;
    repo.set_subsidiary_missions(id, &new.missions)?;
    Ok(())
}

/// Delete subsidiaries together with their owned photo/news/comment
/// sets. The events of a deleted subsidiary are removed by the
/// cascading foreign key, so their set rows are collected up front;
/// photos and news of the deleted sets are preserved with a null set
/// reference while comments go down with their comment set.
pub fn delete_subsidiaries<R>(repo: &R, ids: &[Id]) -> Result<usize>
where
    R: SubsidiaryRepo + EventRepo + SetRepo,
{
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    let subsidiaries = repo.subsidiaries_by_ids(ids)?;
    let events = repo.events_of_subsidiaries(ids)?;
    let count = repo.delete_subsidiaries(ids)?;
    delete_owned_sets(
        repo,
        subsidiaries
            .iter()
            .map(|s| (s.photo_set, s.news_set, s.comment_set))
            .chain(
                events
                    .iter()
                    .map(|e| (e.photo_set, e.news_set, e.comment_set)),
            ),
    )?;
    Ok(count)
}

// Owners are deleted first, the aggregator rows afterwards.
pub(super) fn delete_owned_sets<R: SetRepo>(
    repo: &R,
    sets: impl IntoIterator<Item = (Option<Id>, Option<Id>, Option<Id>)>,
) -> Result<()> {
    let mut photo_sets = Vec::new();
    let mut news_sets = Vec::new();
    let mut comment_sets = Vec::new();
    for (photo_set, news_set, comment_set) in sets {
        photo_sets.extend(photo_set);
        news_sets.extend(news_set);
        comment_sets.extend(comment_set);
    }
    if !photo_sets.is_empty() {
        repo.delete_photo_sets(&photo_sets)?;
    }
    if !news_sets.is_empty() {
        repo.delete_news_sets(&news_sets)?;
    }
    if !comment_sets.is_empty() {
        repo.delete_comment_sets(&comment_sets)?;
    }
    Ok(())
}

pub fn list_subsidiaries<R: SubsidiaryRepo>(
    repo: &R,
    visibility: &Visibility,
) -> Result<Vec<Subsidiary>> {
    let subsidiaries = match visibility {
        Visibility::All => repo.all_subsidiaries()?,
        Visibility::Subsidiaries(ids) => repo.subsidiaries_by_ids(ids)?,
    };
    Ok(subsidiaries)
}

pub fn set_subsidiary_managers<R>(repo: &R, id: Id, user_ids: &[Id]) -> Result<()>
where
    R: SubsidiaryRepo + UserRepo,
{
    repo.get_subsidiary(id)?;
    for user_id in user_ids {
        repo.get_user(*user_id).map_err(|err| match err {
            RepoError::NotFound => Error::UserDoesNotExist,
            err => Error::Repo(err),
        })?;
    }
    repo.set_subsidiary_managers(id, user_ids)?;
    Ok(())
}
