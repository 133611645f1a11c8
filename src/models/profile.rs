use super::{PostRecord, UserRecord};

/// Everything the profile screen shows: one user plus that user's posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user: UserRecord,
    pub posts: Vec<PostRecord>,
}

impl Profile {
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
