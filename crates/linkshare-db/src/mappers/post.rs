//! Post entity <-> model mapper

use linkshare_core::entities::{Post, PostView};
use linkshare_core::value_objects::{Guid, RecordId};

use crate::models::{PostModel, PostViewModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: RecordId::new(model.id),
            guid: Guid::from_uuid(model.guid),
            user_id: RecordId::new(model.user_id),
            title: model.title,
            description: model.description,
            votes: model.votes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<PostViewModel> for PostView {
    fn from(model: PostViewModel) -> Self {
        PostView::new(model.post.into(), model.author_username, model.voted)
    }
}
