//! Typed endpoint calls. Stateless: every method is one round trip and
//! returns a [`ClientResult`].

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, MSG_NO_DATA, MSG_NOT_AUTHENTICATED};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use gameshelf_shared::protocol::{
    ApiRequest, DeleteGameRequest, ListGamesRequest, QueryGamesRequest, UpdateGameRequest,
};
use gameshelf_shared::{
    AuthData, Game, GameUpdate, HEADER_AUTH_TOKEN, LoginRequest, NewGame, QueryField,
    RegisterRequest,
};

#[derive(Clone)]
pub struct GameShelfApi<C> {
    client: C,
    config: ClientConfig,
}

impl<C: HttpClient> GameShelfApi<C> {
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build<R: ApiRequest>(&self, req: &R, token: Option<&str>) -> ClientResult<HttpRequest> {
        let mut http = HttpRequest::new(&self.config.url(&req.path()), R::METHOD);

        if R::REQUIRES_AUTH {
            let token = token
                .filter(|t| !t.is_empty())
                .ok_or_else(|| ClientError::Unauthenticated(MSG_NOT_AUTHENTICATED.to_string()))?;
            http = http.with_header(HEADER_AUTH_TOKEN, token);
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_string(req)
                .map_err(|e| ClientError::decode(format_args!("request body: {e}")))?;
            http = http
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        Ok(http)
    }

    /// Send without interpreting the status.
    pub async fn send_raw<R: ApiRequest>(
        &self,
        req: &R,
        token: Option<&str>,
    ) -> ClientResult<HttpResponse> {
        let http = self.build(req, token)?;
        self.client.send(http).await
    }

    /// Send, reject non-success statuses and decode the body.
    pub async fn send<R: ApiRequest>(
        &self,
        req: &R,
        token: Option<&str>,
        fallback: &str,
    ) -> ClientResult<R::Response> {
        let resp = self.send_raw(req, token).await?;
        if !resp.is_success() {
            return Err(ClientError::rejected(resp.status, &resp.body, fallback));
        }
        resp.json::<R::Response>()
    }

    /// Like [`send`](Self::send) but the success body is never read; write
    /// endpoints may answer with plain text.
    async fn send_ack<R: ApiRequest>(
        &self,
        req: &R,
        token: Option<&str>,
        fallback: &str,
    ) -> ClientResult<()> {
        let resp = self.send_raw(req, token).await?;
        if !resp.is_success() {
            return Err(ClientError::rejected(resp.status, &resp.body, fallback));
        }
        Ok(())
    }

    // =========================================================
    // Games
    // =========================================================

    pub async fn list_games(&self) -> ClientResult<Vec<Game>> {
        let resp = self.send_raw(&ListGamesRequest, None).await?;
        if !resp.is_success() {
            return Err(ClientError::Rejected {
                status: resp.status,
                message: MSG_NO_DATA.to_string(),
            });
        }
        resp.json()
    }

    pub async fn create_game(&self, token: &str, game: &NewGame) -> ClientResult<()> {
        self.send_ack(game, Some(token), "unknown error").await
    }

    pub async fn update_game(&self, token: &str, id: &str, update: GameUpdate) -> ClientResult<()> {
        let req = UpdateGameRequest {
            id: id.to_string(),
            update,
        };
        self.send_ack(&req, Some(token), "unknown error").await
    }

    pub async fn delete_game(&self, token: &str, id: &str) -> ClientResult<()> {
        let req = DeleteGameRequest { id: id.to_string() };
        self.send_ack(&req, Some(token), "unknown error").await
    }

    /// Filter/search. A rejection carries the raw response text, since the
    /// query endpoint may answer in plain text.
    pub async fn query_games(&self, field: QueryField, value: &str) -> ClientResult<Vec<Game>> {
        let req = QueryGamesRequest {
            field,
            value: value.to_string(),
        };
        let resp = self.send_raw(&req, None).await?;
        if !resp.is_success() {
            return Err(ClientError::Rejected {
                status: resp.status,
                message: resp.body,
            });
        }
        resp.json()
    }

    // =========================================================
    // Users
    // =========================================================

    pub async fn login(&self, req: &LoginRequest, fallback: &str) -> ClientResult<AuthData> {
        let resp = self.send(req, None, fallback).await?;
        Ok(resp.data)
    }

    pub async fn register(&self, req: &RegisterRequest, fallback: &str) -> ClientResult<()> {
        self.send(req, None, fallback).await?;
        Ok(())
    }
}
