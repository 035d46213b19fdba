use super::*;

impl<'a> CommentRepo for DbReadOnly<'a> {
    fn create_comment(&self, _comment: &Comment) -> Result<Id> {
        unreachable!();
    }
    fn delete_comments(&self, _ids: &[Id]) -> Result<usize> {
        unreachable!();
    }

    fn get_comment(&self, id: Id) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_set(&self, comment_set_id: Id) -> Result<Vec<Comment>> {
        comments_of_set(&mut self.conn.borrow_mut(), comment_set_id)
    }
}

impl<'a> CommentRepo for DbReadWrite<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comments(&self, ids: &[Id]) -> Result<usize> {
        delete_comments(&mut self.conn.borrow_mut(), ids)
    }

    fn get_comment(&self, id: Id) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_set(&self, comment_set_id: Id) -> Result<Vec<Comment>> {
        comments_of_set(&mut self.conn.borrow_mut(), comment_set_id)
    }
}

impl<'a> CommentRepo for DbConnection<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<Id> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn delete_comments(&self, ids: &[Id]) -> Result<usize> {
        delete_comments(&mut self.conn.borrow_mut(), ids)
    }

    fn get_comment(&self, id: Id) -> Result<Comment> {
        get_comment(&mut self.conn.borrow_mut(), id)
    }
    fn comments_of_set(&self, comment_set_id: Id) -> Result<Vec<Comment>> {
        comments_of_set(&mut self.conn.borrow_mut(), comment_set_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<Id> {
    let new_comment = models::NewComment {
        comment_set_id: comment.comment_set.value(),
        created_by: comment.created_by.map(Id::value),
        created_at: comment.created_at.into_seconds(),
        text: &comment.text,
    };
    diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_rowid(conn)
}

fn delete_comments(conn: &mut SqliteConnection, ids: &[Id]) -> Result<usize> {
    use schema::comments::dsl;
    diesel::delete(dsl::comments.filter(dsl::id.eq_any(to_rowids(ids))))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn get_comment(conn: &mut SqliteConnection, id: Id) -> Result<Comment> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::id.eq(id.value()))
        .first::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn comments_of_set(conn: &mut SqliteConnection, comment_set_id: Id) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::comment_set_id.eq(comment_set_id.value()))
        .order_by(dsl::created_at)
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
