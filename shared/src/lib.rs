use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTH_TOKEN: &str = "auth-token";

pub const STORAGE_TOKEN_KEY: &str = "token";
pub const STORAGE_USER_ID_KEY: &str = "userId";
pub const STORAGE_LOGGED_IN_KEY: &str = "isLoggedIn";

/// Placeholder cover used when a new game is submitted without an image.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/500/500";

/// Separator used to fold the selected platform tags into one field.
pub const PLATFORM_SEPARATOR: &str = ", ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// A game record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub platform: String,
    pub genre: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    #[serde(rename = "_createdBy")]
    pub created_by: String,
}

impl Game {
    /// Hash over every displayed field. Two fetches of the same record
    /// compare equal only if nothing visible changed, so list views can
    /// key rows on `(id, revision)` and re-render edited entries.
    pub fn revision(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.title.hash(&mut h);
        self.description.hash(&mut h);
        self.image_url.hash(&mut h);
        self.price.to_bits().hash(&mut h);
        self.rating.to_bits().hash(&mut h);
        self.platform.hash(&mut h);
        self.genre.hash(&mut h);
        self.release_date.hash(&mut h);
        self.created_by.hash(&mut h);
        h.finish()
    }

    /// Individual platform tags of the comma-joined `platform` field.
    pub fn platforms(&self) -> Vec<&str> {
        self.platform
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

/// Payload for creating a game. `created_by` is filled from the session
/// right before sending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub platform: String,
    pub genre: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    #[serde(rename = "_createdBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Partial update payload; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(rename = "releaseDate", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(rename = "registerDate")]
    pub register_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Login response envelope: `{"data": {"token": .., "userId": ..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: AuthData,
}

/// Error body returned by the backend on non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Fields accepted by the query endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryField {
    Platform,
    Genre,
    Title,
}

impl QueryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryField::Platform => "platform",
            QueryField::Genre => "genre",
            QueryField::Title => "title",
        }
    }
}

/// Fold selected platform tags into the single `platform` field.
pub fn join_platforms<S: AsRef<str>>(platforms: &[S]) -> String {
    platforms
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PLATFORM_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_uses_backend_field_names() {
        let json = r#"{
            "_id": "g1",
            "title": "Hades",
            "description": "Roguelike",
            "imageURL": "https://img/1.png",
            "price": 24.99,
            "rating": 4.9,
            "platform": "PC, Switch",
            "genre": "Action",
            "releaseDate": "2020-09-17",
            "_createdBy": "u1"
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, "g1");
        assert_eq!(game.image_url, "https://img/1.png");
        assert_eq!(game.created_by, "u1");
        assert_eq!(game.platforms(), vec!["PC", "Switch"]);
    }

    #[test]
    fn revision_tracks_visible_fields() {
        let json = r#"{"_id":"g1","title":"E2E Game","description":"","imageURL":"",
            "price":59.99,"rating":4.6,"platform":"pc, ps","genre":"E2E Genre",
            "releaseDate":"2023-05-16","_createdBy":"u1"}"#;
        let original: Game = serde_json::from_str(json).unwrap();
        let refetched = original.clone();
        assert_eq!(original.revision(), refetched.revision());

        let mut edited = original.clone();
        edited.title = "E2E Game Updated".into();
        assert_eq!(edited.id, original.id);
        assert_ne!(edited.revision(), original.revision());

        let mut repriced = original.clone();
        repriced.price = 49.99;
        assert_ne!(repriced.revision(), original.revision());
    }

    #[test]
    fn new_game_omits_missing_creator() {
        let draft = NewGame {
            title: "E2E Game".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("_createdBy").is_none());
        assert_eq!(value["imageURL"], "");

        let owned = NewGame {
            created_by: Some("u1".into()),
            ..draft
        };
        let value = serde_json::to_value(&owned).unwrap();
        assert_eq!(value["_createdBy"], "u1");
    }

    #[test]
    fn game_update_only_sends_present_fields() {
        let patch = GameUpdate {
            title: Some("E2E Game Updated".into()),
            platform: Some("PC".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["title"], "E2E Game Updated");
    }

    #[test]
    fn user_password_is_never_serialized() {
        let user = User {
            id: "u1".into(),
            name: "E2E User".into(),
            email: "e2e_email@email.com".into(),
            password: "secret".into(),
            register_date: "2024-01-01".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn login_response_reads_nested_data() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"error":null,"data":{"token":"abc","userId":"1"}}"#).unwrap();
        assert_eq!(resp.data.token, "abc");
        assert_eq!(resp.data.user_id, "1");
    }

    #[test]
    fn join_platforms_keeps_selection_order() {
        assert_eq!(join_platforms(&["PS5", "PC", "Xbox"]), "PS5, PC, Xbox");
        assert_eq!(join_platforms::<&str>(&[]), "");
    }
}
