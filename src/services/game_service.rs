use crate::errors::Result;
use crate::models::{Game, ListResult, Screenshot};
use crate::search::SearchFilter;
use crate::services::ApiClient;
use crate::transport::{HttpTransport, ScreenshotUpload};

#[derive(Clone)]
pub struct GameService<T> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> GameService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// Paged game search. `total` comes from the `total-count` header.
    pub async fn get_games(&self, filter: &SearchFilter) -> Result<ListResult<Game>> {
        self.api.get_with_total("games", filter.to_params()).await
    }

    pub async fn get_game(&self, id: i64) -> Result<Game> {
        self.api.get(&format!("games/{id}")).await
    }

    pub async fn update_game(&self, game: &Game) -> Result<Game> {
        self.api.patch(&format!("games/{}", game.id), game).await
    }

    pub async fn add_game(&self, game: &Game) -> Result<Game> {
        self.api.post("games", game).await
    }

    pub async fn add_screenshot(
        &self,
        game_id: i64,
        description: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Screenshot> {
        let upload = ScreenshotUpload {
            description: description.to_string(),
            file_name: file_name.to_string(),
            bytes,
        };
        self.api
            .post_multipart(&format!("games/{game_id}/screenshots"), upload)
            .await
    }

    pub async fn get_screenshots_for_game(&self, game_id: i64) -> Result<Vec<Screenshot>> {
        // the server forces approved=1 for non-admins anyway
        let query = vec![("approved", "1".to_string())];
        self.api
            .get_with_query(&format!("games/{game_id}/screenshots"), query)
            .await
    }
}
