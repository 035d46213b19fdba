use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewMission {
    pub name: String,
    pub description: Option<String>,
}

pub fn create_mission<R: MissionRepo>(repo: &R, new: NewMission) -> Result<Mission> {
    validated_name("mission name", &new.name)?;
    if repo.try_get_mission_by_name(&new.name)?.is_some() {
        return Err(Error::DuplicateName("mission"));
    }
    let mission = Mission {
        id: Id::default(),
        name: new.name,
        description: new.description,
        created_at: Timestamp::now(),
    };
    let id = repo.create_mission(&mission)?;
    Ok(Mission { id, ..mission })
}

pub fn update_mission<R: MissionRepo>(repo: &R, id: Id, new: NewMission) -> Result<()> {
    validated_name("mission name", &new.name)?;
    if let Some(existing) = repo.try_get_mission_by_name(&new.name)? {
        if existing.id != id {
            return Err(Error::DuplicateName("mission"));
        }
    }
    let old = repo.get_mission(id)?;
    let mission = Mission {
        id,
        name: new.name,
        description: new.description,
        created_at: old.created_at,
    };
    repo.update_mission(&mission)?;
    Ok(())
}

pub fn delete_missions<R: MissionRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_missions(ids)?)
}

pub fn list_missions<R: MissionRepo>(repo: &R, visibility: &Visibility) -> Result<Vec<Mission>> {
    let missions = match visibility {
        Visibility::All => repo.all_missions()?,
        Visibility::Subsidiaries(ids) => repo.missions_of_subsidiaries(ids)?,
    };
    Ok(missions)
}
