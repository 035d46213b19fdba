use super::*;

impl<'a> PhotoRepo for DbReadOnly<'a> {
    fn create_photo(&self, _photo: &Photo) -> Result<Id> {
        unreachable!();
    }
    fn delete_photos(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_photo(&self, id: Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn photos_of_set(&self, photo_set_id: Id) -> Result<Vec<Photo>> {
        photos_of_set(&mut self.conn.borrow_mut(), photo_set_id)
    }
}

impl<'a> PhotoRepo for DbReadWrite<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<Id> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photos(&self, ids: &[Id]) -> Result<usize> {
        delete_photos(&mut self.conn.borrow_mut(), ids)
    }

    fn get_photo(&self, id: Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn photos_of_set(&self, photo_set_id: Id) -> Result<Vec<Photo>> {
        photos_of_set(&mut self.conn.borrow_mut(), photo_set_id)
    }
}

impl<'a> PhotoRepo for DbConnection<'a> {
    fn create_photo(&self, photo: &Photo) -> Result<Id> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn delete_photos(&self, ids: &[Id]) -> Result<usize> {
        delete_photos(&mut self.conn.borrow_mut(), ids)
    }

    fn get_photo(&self, id: Id) -> Result<Photo> {
        get_photo(&mut self.conn.borrow_mut(), id)
    }
    fn photos_of_set(&self, photo_set_id: Id) -> Result<Vec<Photo>> {
        photos_of_set(&mut self.conn.borrow_mut(), photo_set_id)
    }
}

fn create_photo(conn: &mut SqliteConnection, photo: &Photo) -> Result<Id> {
    let new_photo = models::NewPhoto {
        url: &photo.url,
        caption: photo.caption.as_deref(),
        photo_set_id: photo.photo_set.map(Id::value),
        created_at: photo.created_at.into_seconds(),
    };
    diesel::insert_into(schema::photos::table)
        .values(&new_photo)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn delete_photos(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::photos::dsl;
    diesel::delete(dsl::photos.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_photo(conn: &mut SqliteConnection, id: Id) -> Result<Photo> {
    use schema::photos::dsl;
    Ok(dsl::photos
        .filter(dsl::id.eq(id.value()))
        .first::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn photos_of_set(conn: &mut SqliteConnection, photo_set_id: Id) -> Result<Vec<Photo>> {
    use schema::photos::dsl;
    Ok(dsl::photos
        .filter(dsl::photo_set_id.eq(photo_set_id.value()))
        .order_by(dsl::created_at)
        .load::<models::PhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
