use crate::errors::Result;
use crate::models::ListMembership;
use crate::services::ApiClient;
use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct ListService<T> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> ListService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn get_lists_for_user_game(
        &self,
        user_id: i64,
        game_id: i64,
    ) -> Result<Vec<ListMembership>> {
        self.api
            .get(&format!("users/{user_id}/games/{game_id}/lists"))
            .await
    }

    /// Add or remove a game from one of a user's lists; the server answers
    /// with the refreshed membership set.
    pub async fn update_list(
        &self,
        list_id: i64,
        user_id: i64,
        game_id: i64,
        value: bool,
    ) -> Result<Vec<ListMembership>> {
        let body = serde_json::json!({
            "userId": user_id,
            "gameId": game_id,
            "value": value,
        });
        self.api.post(&format!("lists/{list_id}"), &body).await
    }
}
