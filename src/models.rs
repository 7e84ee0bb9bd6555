use serde::{Deserialize, Serialize};

/// One page of a list endpoint plus the `total-count` header, when the
/// server sent a parseable one.
#[derive(Clone, Debug)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u64>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub removed: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub date_created: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Body for creating a tag; the server assigns the id.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewTag {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Screenshot {
    pub id: i64,
    #[serde(default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub approved: Option<bool>,
    #[serde(default)]
    pub added_by_id: Option<i64>,
}

/// A user list (favorites, clear list, ...) and whether the game at hand is
/// on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListMembership {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub has_game: Option<bool>,
}

/// The profile shape the server returns for anyone.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub twitch_link: Option<String>,
    #[serde(default)]
    pub youtube_link: Option<String>,
}

/// The richer shape returned by the admin-facing user listing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub date_created: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewsItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub news: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}
