//! Vote entity <-> model mapper

use linkshare_core::entities::Vote;
use linkshare_core::value_objects::RecordId;

use crate::models::VoteModel;

impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            post_id: RecordId::new(model.post_id),
            created_at: model.created_at,
        }
    }
}
