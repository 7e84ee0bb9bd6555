//! Search filter for the game listing and its wire serialization.
//!
//! The server reads parameters positionally-insensitively, but the emission
//! order is fixed so request lines stay byte-comparable across versions.

/// Filter criteria for `GET /api/games`. Everything is optional; a field
/// only reaches the wire when it holds a truthy value (non-empty string,
/// non-zero number, `true`, non-empty tag list).
#[derive(Clone, Debug, Default)]
pub struct SearchFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_col: Option<String>,
    pub order_dir: Option<String>,
    pub q: Option<String>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub tags: Vec<i64>,
    pub author: Option<String>,
    pub has_download: bool,
    pub created_from: Option<String>,
    pub created_to: Option<String>,
    pub cleared_by_user_id: Option<i64>,
    pub reviewed_by_user_id: Option<i64>,
    pub rating_from: Option<f64>,
    pub rating_to: Option<f64>,
    pub difficulty_from: Option<f64>,
    pub difficulty_to: Option<f64>,
    pub owner_user_id: Option<i64>,
}

impl SearchFilter {
    /// Serialize into the ordered parameter list.
    ///
    /// `page` and `limit` are always emitted, defaulting to `0` and `25`.
    /// A zero `page` or `limit` is treated as unset and falls back to the
    /// default, matching the server's historical behavior. A real `limit=0`
    /// cannot be expressed.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let entries: [(&'static str, Option<String>); 19] = [
            ("page", Some(truthy_u32(self.page).unwrap_or_else(|| "0".into()))),
            ("limit", Some(truthy_u32(self.limit).unwrap_or_else(|| "25".into()))),
            ("order_col", truthy_str(&self.order_col)),
            ("order_dir", truthy_str(&self.order_dir)),
            ("q", truthy_str(&self.q)),
            ("id", truthy_i64(self.id)),
            ("name", truthy_str(&self.name)),
            ("tags", tag_literal(&self.tags)),
            ("author", truthy_str(&self.author)),
            ("hasDownload", self.has_download.then(|| "1".to_string())),
            ("createdFrom", truthy_str(&self.created_from)),
            ("createdTo", truthy_str(&self.created_to)),
            ("clearedByUserId", truthy_i64(self.cleared_by_user_id)),
            ("reviewedByUserId", truthy_i64(self.reviewed_by_user_id)),
            ("ratingFrom", truthy_f64(self.rating_from)),
            ("ratingTo", truthy_f64(self.rating_to)),
            ("difficultyFrom", truthy_f64(self.difficulty_from)),
            ("difficultyTo", truthy_f64(self.difficulty_to)),
            ("ownerUserId", truthy_i64(self.owner_user_id)),
        ];

        entries
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }
}

fn truthy_str(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn truthy_u32(value: Option<u32>) -> Option<String> {
    value.filter(|n| *n != 0).map(|n| n.to_string())
}

fn truthy_i64(value: Option<i64>) -> Option<String> {
    value.filter(|n| *n != 0).map(|n| n.to_string())
}

fn truthy_f64(value: Option<f64>) -> Option<String> {
    value.filter(|n| *n != 0.0).map(|n| n.to_string())
}

/// JSON array literal, e.g. `[3,7,9]`. The server parses the parameter as
/// JSON rather than as a repeated key.
fn tag_literal(tags: &[i64]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let ids: Vec<String> = tags.iter().map(ToString::to_string).collect();
    Some(format!("[{}]", ids.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_emits_only_defaults() {
        let params = SearchFilter::default().to_params();
        assert_eq!(
            params,
            vec![("page", "0".to_string()), ("limit", "25".to_string())]
        );
    }

    #[test]
    fn zero_page_and_limit_fall_back_to_defaults() {
        let filter = SearchFilter {
            page: Some(0),
            limit: Some(0),
            ..Default::default()
        };
        let params = filter.to_params();
        assert_eq!(
            params,
            vec![("page", "0".to_string()), ("limit", "25".to_string())]
        );
    }

    #[test]
    fn falsy_optionals_are_omitted() {
        let filter = SearchFilter {
            q: Some(String::new()),
            id: Some(0),
            rating_from: Some(0.0),
            tags: Vec::new(),
            has_download: false,
            ..Default::default()
        };
        let params = filter.to_params();
        assert_eq!(params.len(), 2);
        assert!(params.iter().all(|(k, _)| *k == "page" || *k == "limit"));
    }

    #[test]
    fn tags_serialize_as_json_array_literal() {
        let filter = SearchFilter {
            tags: vec![3, 7, 9],
            ..Default::default()
        };
        let params = filter.to_params();
        let tags = params.iter().find(|(k, _)| *k == "tags").unwrap();
        assert_eq!(tags.1, "[3,7,9]");
    }

    #[test]
    fn has_download_emits_one() {
        let filter = SearchFilter {
            has_download: true,
            ..Default::default()
        };
        let params = filter.to_params();
        assert!(params.contains(&("hasDownload", "1".to_string())));
    }

    #[test]
    fn full_filter_preserves_declared_order() {
        let filter = SearchFilter {
            page: Some(2),
            limit: Some(50),
            order_col: Some("rating".into()),
            order_dir: Some("DESC".into()),
            q: Some("boshy".into()),
            id: Some(11),
            name: Some("I Wanna".into()),
            tags: vec![1, 2],
            author: Some("kamilia".into()),
            has_download: true,
            created_from: Some("2020-01-01".into()),
            created_to: Some("2021-01-01".into()),
            cleared_by_user_id: Some(4),
            reviewed_by_user_id: Some(5),
            rating_from: Some(3.5),
            rating_to: Some(9.0),
            difficulty_from: Some(40.0),
            difficulty_to: Some(80.0),
            owner_user_id: Some(6),
        };
        let names: Vec<&str> = filter.to_params().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "page",
                "limit",
                "order_col",
                "order_dir",
                "q",
                "id",
                "name",
                "tags",
                "author",
                "hasDownload",
                "createdFrom",
                "createdTo",
                "clearedByUserId",
                "reviewedByUserId",
                "ratingFrom",
                "ratingTo",
                "difficultyFrom",
                "difficultyTo",
                "ownerUserId"
            ]
        );
    }

    #[test]
    fn numeric_fields_stringify_base_ten() {
        let filter = SearchFilter {
            rating_from: Some(3.5),
            difficulty_to: Some(80.0),
            cleared_by_user_id: Some(42),
            ..Default::default()
        };
        let params = filter.to_params();
        assert!(params.contains(&("ratingFrom", "3.5".to_string())));
        assert!(params.contains(&("difficultyTo", "80".to_string())));
        assert!(params.contains(&("clearedByUserId", "42".to_string())));
    }
}
