use crate::errors::Result;
use crate::models::Review;
use crate::services::ApiClient;
use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct ReviewService<T> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> ReviewService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn get_reviews(&self, page: u32, limit: u32) -> Result<Vec<Review>> {
        let query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        self.api.get_with_query("reviews", query).await
    }

    pub async fn get_review(&self, id: i64) -> Result<Review> {
        self.api.get(&format!("reviews/{id}")).await
    }

    pub async fn get_reviews_for_game(&self, game_id: i64) -> Result<Vec<Review>> {
        let query = vec![("textReviewsFirst", "true".to_string())];
        self.api
            .get_with_query(&format!("games/{game_id}/reviews"), query)
            .await
    }

    /// The reviews a given user left on a game, the owner's included.
    pub async fn get_reviews_for_user_game(
        &self,
        game_id: i64,
        user_id: i64,
    ) -> Result<Vec<Review>> {
        let query = vec![
            ("byUserId", user_id.to_string()),
            ("includeOwnerReview", "true".to_string()),
        ];
        self.api
            .get_with_query(&format!("games/{game_id}/reviews"), query)
            .await
    }

    pub async fn get_reviews_for_user(&self, user_id: i64) -> Result<Vec<Review>> {
        self.api.get(&format!("users/{user_id}/reviews")).await
    }

    /// Upsert: the server replaces the caller's existing review for the game.
    pub async fn submit_review(&self, game_id: i64, review: &Review) -> Result<serde_json::Value> {
        self.api
            .put(&format!("games/{game_id}/reviews"), review)
            .await
    }

    pub async fn like_review(&self, review_id: i64, user_id: i64) -> Result<serde_json::Value> {
        self.api
            .put(
                &format!("reviews/{review_id}/likes/{user_id}"),
                &serde_json::json!({}),
            )
            .await
    }

    pub async fn unlike_review(&self, review_id: i64, user_id: i64) -> Result<serde_json::Value> {
        self.api
            .delete(&format!("reviews/{review_id}/likes/{user_id}"))
            .await
    }

    pub async fn is_liked(&self, review_id: i64, user_id: i64) -> Result<serde_json::Value> {
        self.api
            .get(&format!("reviews/{review_id}/likes/{user_id}"))
            .await
    }
}
