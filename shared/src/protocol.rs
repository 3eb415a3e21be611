use crate::{Game, GameUpdate, LoginRequest, LoginResponse, NewGame, QueryField, RegisterRequest};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// The request value itself is serialized as the JSON body for methods that
/// carry one; path parameters are marked `#[serde(skip)]`.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the session token must be attached.
    const REQUIRES_AUTH: bool;
    /// The URL path including any query string.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

/// List all games
#[derive(Debug, Serialize)]
pub struct ListGamesRequest;

impl ApiRequest for ListGamesRequest {
    type Response = Vec<Game>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        "/api/games".to_string()
    }
}

/// Create a game
impl ApiRequest for NewGame {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> String {
        "/api/games".to_string()
    }
}

/// Partially update a game by id
#[derive(Debug, Serialize)]
pub struct UpdateGameRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub update: GameUpdate,
}

impl ApiRequest for UpdateGameRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> String {
        format!("/api/games/{}", encode(&self.id))
    }
}

/// Delete a game by id
#[derive(Debug, Serialize)]
pub struct DeleteGameRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteGameRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const REQUIRES_AUTH: bool = true;

    fn path(&self) -> String {
        format!("/api/games/{}", encode(&self.id))
    }
}

/// Filter or search games by a single field
#[derive(Debug, Serialize)]
pub struct QueryGamesRequest {
    #[serde(skip)]
    pub field: QueryField,
    #[serde(skip)]
    pub value: String,
}

impl ApiRequest for QueryGamesRequest {
    type Response = Vec<Game>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        format!(
            "/api/query/games?field={}&value={}&populate=false",
            self.field.as_str(),
            encode(&self.value)
        )
    }
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        "/api/user/login".to_string()
    }
}

impl ApiRequest for RegisterRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;

    fn path(&self) -> String {
        "/api/user/register".to_string()
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}
