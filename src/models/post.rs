use serde::{Deserialize, Serialize};

use super::UserId;

/// One post, as returned by `GET /posts?userId={id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u64,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}
