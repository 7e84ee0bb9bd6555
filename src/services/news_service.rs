use crate::errors::Result;
use crate::models::NewsItem;
use crate::services::ApiClient;
use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct NewsService<T> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> NewsService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn get_news(&self) -> Result<Vec<NewsItem>> {
        self.api.get("news").await
    }

    pub async fn add_news(&self, news: &NewsItem) -> Result<serde_json::Value> {
        self.api.post("news", news).await
    }
}
