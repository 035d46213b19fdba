use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub url: String,
    pub caption: Option<String>,
    pub photo_set: Option<Id>,
}

pub fn create_photo<R: PhotoRepo>(repo: &R, new: NewPhoto) -> Result<Photo> {
    if new.url.trim().is_empty() {
        return Err(Error::EmptyField("url"));
    }
    let photo = Photo {
        id: Id::default(),
        url: new.url,
        caption: new.caption,
        photo_set: new.photo_set,
        created_at: Timestamp::now(),
    };
    let id = repo.create_photo(&photo)?;
    Ok(Photo { id, ..photo })
}

pub fn delete_photos<R: PhotoRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_photos(ids)?)
}

pub fn photos_of_set<R: PhotoRepo>(repo: &R, photo_set_id: Id) -> Result<Vec<Photo>> {
    Ok(repo.photos_of_set(photo_set_id)?)
}
