pub mod badge;
pub mod errors;
pub mod logging;
pub mod models;
pub mod search;
pub mod services;
pub mod transport;

pub use badge::BadgeText;
pub use errors::{ApiError, Result};
pub use models::ListResult;
pub use search::SearchFilter;
pub use services::{
    ApiClient, GameService, ListService, NewsService, ReviewService, TagService, UserService,
};
pub use transport::{HttpTransport, ReqwestTransport};
