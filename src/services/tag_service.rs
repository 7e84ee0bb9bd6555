use crate::errors::Result;
use crate::models::{NewTag, Tag};
use crate::services::ApiClient;
use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct TagService<T> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> TagService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// Tags on a game; with a user id, scoped to that user's own tagging.
    pub async fn get_tags_for_game(
        &self,
        game_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Tag>> {
        let mut query = Vec::new();
        if let Some(uid) = user_id {
            query.push(("uid", uid.to_string()));
        }
        self.api
            .get_with_query(&format!("games/{game_id}/tags"), query)
            .await
    }

    pub async fn get_tag_suggestions(&self, q: &str) -> Result<Vec<Tag>> {
        // trailing slash matters, the bare collection path is name lookup
        let query = vec![("q", q.to_string())];
        self.api.get_with_query("tags/", query).await
    }

    pub async fn get_tag(&self, id: i64) -> Result<Tag> {
        self.api.get(&format!("tags/{id}")).await
    }

    /// Exact-name lookup. Zero matches and ambiguous matches both come back
    /// as `None`; only a single hit is returned.
    pub async fn get_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let query = vec![("name", name.to_string())];
        let mut tags: Vec<Tag> = self.api.get_with_query("tags", query).await?;
        if tags.len() == 1 {
            Ok(Some(tags.remove(0)))
        } else {
            Ok(None)
        }
    }

    pub async fn set_tags(&self, game_id: i64, tag_ids: &[i64]) -> Result<serde_json::Value> {
        self.api
            .post(&format!("games/{game_id}/tags"), &tag_ids)
            .await
    }

    pub async fn add_tag(&self, tag: &NewTag) -> Result<Tag> {
        self.api.post("tags", tag).await
    }
}
