pub mod api_client;
pub mod game_service;
pub mod list_service;
pub mod news_service;
pub mod review_service;
pub mod tag_service;
pub mod user_service;

pub use api_client::ApiClient;
pub use game_service::GameService;
pub use list_service::ListService;
pub use news_service::NewsService;
pub use review_service::ReviewService;
pub use tag_service::TagService;
pub use user_service::UserService;
