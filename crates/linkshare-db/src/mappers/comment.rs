//! Comment entity <-> model mapper

use linkshare_core::entities::{Comment, CommentView};
use linkshare_core::value_objects::{Guid, RecordId};

use crate::models::{CommentModel, CommentViewModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: RecordId::new(model.id),
            guid: Guid::from_uuid(model.guid),
            user_id: RecordId::new(model.user_id),
            post_id: RecordId::new(model.post_id),
            body: model.body,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentViewModel> for CommentView {
    fn from(model: CommentViewModel) -> Self {
        CommentView::new(model.comment.into(), model.author_username)
    }
}
