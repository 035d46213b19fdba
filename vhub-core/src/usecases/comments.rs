use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub comment_set: Id,
    pub created_by: Option<Id>,
    pub text: String,
}

pub fn create_comment<R: CommentRepo>(repo: &R, new: NewComment) -> Result<Comment> {
    if new.text.trim().is_empty() {
        return Err(Error::EmptyField("text"));
    }
    let comment = Comment {
        id: Id::default(),
        comment_set: new.comment_set,
        created_by: new.created_by,
        created_at: Timestamp::now(),
        text: new.text,
    };
    let id = repo.create_comment(&comment)?;
    Ok(Comment { id, ..comment })
}

pub fn delete_comments<R: CommentRepo>(repo: &R, ids: &[Id]) -> Result<usize> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    Ok(repo.delete_comments(ids)?)
}

pub fn comments_of_set<R: CommentRepo>(repo: &R, comment_set_id: Id) -> Result<Vec<Comment>> {
    Ok(repo.comments_of_set(comment_set_id)?)
}
