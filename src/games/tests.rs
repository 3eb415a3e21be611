use super::*;
use crate::config::ClientConfig;
use crate::error::{ErrorKind, MSG_NO_DATA, MSG_NOT_AUTHENTICATED};
use crate::request::{HttpMethod, MockHttpClient};
use crate::session::MemoryStore;
use crate::state::LocalState;
use gameshelf_shared::AuthData;
use serde_json::json;
use std::rc::Rc;

const GAMES_URL: &str = "http://api.test/api/games";

// =========================================================
// Shared Mock Components
// =========================================================

type TestCatalog = GameCatalog<Rc<MockHttpClient>, MemoryStore, LocalState<GamesState>>;

struct TestContext {
    client: Rc<MockHttpClient>,
    store: MemoryStore,
    state: LocalState<GamesState>,
    catalog: TestCatalog,
}

impl TestContext {
    fn new() -> Self {
        let client = Rc::new(MockHttpClient::new());
        let store = MemoryStore::new();
        let state = LocalState::new(GamesState::default());
        let api = GameShelfApi::new(Rc::clone(&client), ClientConfig::new("http://api.test"));
        let catalog = GameCatalog::new(api, SessionStore::new(store.clone()), state.clone());
        Self {
            client,
            store,
            state,
            catalog,
        }
    }

    fn logged_in() -> Self {
        let ctx = Self::new();
        SessionStore::new(ctx.store.clone()).set_session(&AuthData {
            token: "abc".into(),
            user_id: "u1".into(),
        })
        .unwrap();
        ctx
    }

    fn snapshot(&self) -> GamesState {
        self.state.snapshot()
    }

    fn serve_list(&self, games: serde_json::Value) {
        self.client
            .mock_response(HttpMethod::Get, GAMES_URL, 200, games);
    }
}

fn game_json(id: &str, title: &str, platform: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "description": "desc",
        "imageURL": "https://img",
        "price": 59.99,
        "rating": 4.6,
        "platform": platform,
        "genre": "E2E Genre",
        "releaseDate": "2023-05-16",
        "_createdBy": "u1"
    })
}

fn draft(title: &str) -> NewGame {
    NewGame {
        title: title.into(),
        description: "E2E Game Description".into(),
        price: 59.99,
        rating: 4.6,
        genre: "E2E Genre".into(),
        release_date: "2023-05-16".into(),
        ..Default::default()
    }
}

// =========================================================
// fetch
// =========================================================

#[tokio::test]
async fn fetch_replaces_collection() {
    let ctx = TestContext::new();
    ctx.serve_list(json!([game_json("g1", "A", "PC"), game_json("g2", "B", "PS5")]));

    ctx.catalog.fetch_games().await.unwrap();
    ctx.catalog.fetch_games().await.unwrap();

    let state = ctx.snapshot();
    assert_eq!(state.games.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn fetch_failure_sets_error_and_keeps_games() {
    let ctx = TestContext::new();
    ctx.serve_list(json!([game_json("g1", "A", "PC")]));
    ctx.catalog.fetch_games().await.unwrap();

    ctx.client
        .mock_response(HttpMethod::Get, GAMES_URL, 503, json!({}));
    let err = ctx.catalog.fetch_games().await.unwrap_err();

    let state = ctx.snapshot();
    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(state.error.as_deref(), Some(MSG_NO_DATA));
    assert_eq!(state.games.len(), 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn transport_failure_drops_loading() {
    let ctx = TestContext::new();
    ctx.client.mock_unreachable(HttpMethod::Get, GAMES_URL);

    let err = ctx.catalog.fetch_games().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    let state = ctx.snapshot();
    assert!(!state.loading);
    assert!(state.error.is_some());
}

// =========================================================
// add
// =========================================================

#[tokio::test]
async fn add_joins_platforms_and_resyncs() {
    let ctx = TestContext::logged_in();
    ctx.client
        .mock_response(HttpMethod::Post, GAMES_URL, 201, json!({"_id": "g9"}));
    ctx.serve_list(json!([game_json("g9", "E2E Game", "PC, PlayStation")]));

    ctx.catalog
        .add_game(draft("E2E Game"), &["PC", "PlayStation"])
        .await
        .unwrap();

    let requests = ctx.client.requests.borrow();
    assert_eq!(requests.len(), 2);
    let create = &requests[0];
    assert_eq!(create.method, HttpMethod::Post);
    assert_eq!(create.headers.get("auth-token").map(String::as_str), Some("abc"));
    let body: serde_json::Value = serde_json::from_str(create.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["platform"], "PC, PlayStation");
    assert_eq!(body["_createdBy"], "u1");
    assert_eq!(body["imageURL"], DEFAULT_IMAGE_URL);
    assert_eq!(requests[1].method, HttpMethod::Get);

    let state = ctx.snapshot();
    assert_eq!(state.games.len(), 1);
    assert_eq!(state.games[0].platform, "PC, PlayStation");
    assert!(state.add_error.is_none());
    assert!(!state.loading);
}

#[tokio::test]
async fn add_keeps_given_image() {
    let ctx = TestContext::logged_in();
    ctx.client
        .mock_response(HttpMethod::Post, GAMES_URL, 201, json!({}));
    ctx.serve_list(json!([]));

    let mut game = draft("Covered");
    game.image_url = "https://cdn/cover.png".into();
    ctx.catalog.add_game(game, &["PC"]).await.unwrap();

    let body = ctx.client.requests.borrow()[0].body.clone().unwrap();
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["imageURL"], "https://cdn/cover.png");
}

#[tokio::test]
async fn add_without_session_sends_nothing() {
    let ctx = TestContext::new();

    let err = ctx
        .catalog
        .add_game(draft("E2E Game"), &["PC"])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    assert_eq!(ctx.client.request_count(), 0);
    assert_eq!(ctx.snapshot().add_error.as_deref(), Some(MSG_NOT_AUTHENTICATED));
}

#[tokio::test]
async fn add_without_platform_sends_nothing() {
    let ctx = TestContext::logged_in();

    let err = ctx
        .catalog
        .add_game::<&str>(draft("E2E Game"), &[])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(ctx.client.request_count(), 0);
    let state = ctx.snapshot();
    assert_eq!(state.add_error.as_deref(), Some(MSG_NO_PLATFORM));
    assert!(state.error.is_none());
}

#[tokio::test]
async fn add_rejection_goes_to_add_error_only() {
    let ctx = TestContext::logged_in();
    ctx.client.mock_response(
        HttpMethod::Post,
        GAMES_URL,
        400,
        json!({"error": "\"price\" must be a number"}),
    );

    ctx.catalog
        .add_game(draft("E2E Game"), &["PC"])
        .await
        .unwrap_err();

    let state = ctx.snapshot();
    assert_eq!(
        state.add_error.as_deref(),
        Some("Failed to add game! \"price\" must be a number")
    );
    assert!(state.error.is_none());
    assert_eq!(ctx.client.request_count(), 1);
}

// =========================================================
// update
// =========================================================

#[tokio::test]
async fn update_merges_platforms_and_resyncs() {
    let ctx = TestContext::logged_in();
    let url = "http://api.test/api/games/g1";
    ctx.client.mock_response(HttpMethod::Put, url, 200, json!({}));
    ctx.serve_list(json!([game_json("g1", "E2E Game Updated", "Switch")]));

    let update = GameUpdate {
        title: Some("E2E Game Updated".into()),
        ..Default::default()
    };
    ctx.catalog
        .update_game("g1", update, &["Switch"])
        .await
        .unwrap();

    let requests = ctx.client.requests.borrow();
    assert_eq!(requests[0].url, url);
    let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"title": "E2E Game Updated", "platform": "Switch"}));

    assert_eq!(ctx.snapshot().games[0].title, "E2E Game Updated");
}

#[tokio::test]
async fn update_preconditions() {
    let ctx = TestContext::new();
    let err = ctx
        .catalog
        .update_game("g1", GameUpdate::default(), &["PC"])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);

    let ctx = TestContext::logged_in();
    let err = ctx
        .catalog
        .update_game::<&str>("g1", GameUpdate::default(), &[])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(ctx.client.request_count(), 0);
    assert_eq!(ctx.snapshot().update_error.as_deref(), Some(MSG_NO_PLATFORM));
}

#[tokio::test]
async fn update_rejection_sets_update_error() {
    let ctx = TestContext::logged_in();
    ctx.client.mock_response(
        HttpMethod::Put,
        "http://api.test/api/games/g1",
        403,
        json!({"error": "forbidden"}),
    );

    ctx.catalog
        .update_game("g1", GameUpdate::default(), &["PC"])
        .await
        .unwrap_err();

    let state = ctx.snapshot();
    assert_eq!(state.update_error.as_deref(), Some("Failed to update game! forbidden"));
    assert!(state.add_error.is_none());
}

// =========================================================
// delete
// =========================================================

#[tokio::test]
async fn delete_removes_matching_entry() {
    let ctx = TestContext::logged_in();
    ctx.serve_list(json!([game_json("g1", "A", "PC"), game_json("g2", "B", "PC")]));
    ctx.catalog.fetch_games().await.unwrap();
    ctx.client
        .mock_text(HttpMethod::Delete, "http://api.test/api/games/g1", 204, "");

    ctx.catalog.delete_game("g1").await.unwrap();

    let state = ctx.snapshot();
    assert_eq!(state.games.len(), 1);
    assert_eq!(state.games[0].id, "g2");
}

#[tokio::test]
async fn delete_accepts_plain_text_confirmation() {
    let ctx = TestContext::logged_in();
    ctx.serve_list(json!([game_json("g1", "A", "PC"), game_json("g2", "B", "PC")]));
    ctx.catalog.fetch_games().await.unwrap();
    ctx.client.mock_text(
        HttpMethod::Delete,
        "http://api.test/api/games/g1",
        200,
        "Game was deleted successfully.",
    );

    ctx.catalog.delete_game("g1").await.unwrap();

    let state = ctx.snapshot();
    assert_eq!(state.games.len(), 1);
    assert_eq!(state.games[0].id, "g2");
    assert!(state.error.is_none());
}

#[tokio::test]
async fn delete_rejection_keeps_collection() {
    let ctx = TestContext::logged_in();
    ctx.serve_list(json!([game_json("g1", "A", "PC")]));
    ctx.catalog.fetch_games().await.unwrap();
    ctx.client.mock_response(
        HttpMethod::Delete,
        "http://api.test/api/games/g1",
        404,
        json!({"error": "not found"}),
    );

    ctx.catalog.delete_game("g1").await.unwrap_err();

    let state = ctx.snapshot();
    assert_eq!(state.games.len(), 1);
    assert!(state.error.as_deref().unwrap().contains("not found"));
}

#[tokio::test]
async fn logout_then_delete_is_unauthenticated() {
    let ctx = TestContext::logged_in();
    SessionStore::new(ctx.store.clone()).clear();

    let err = ctx.catalog.delete_game("g1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    assert_eq!(ctx.client.request_count(), 0);
}

// =========================================================
// filters
// =========================================================

#[tokio::test]
async fn filters_hit_query_endpoint() {
    let ctx = TestContext::new();
    let base = "http://api.test/api/query/games";
    ctx.client.mock_response(
        HttpMethod::Get,
        &format!("{base}?field=platform&value=PC&populate=false"),
        200,
        json!([game_json("g1", "A", "PC")]),
    );
    ctx.client.mock_response(
        HttpMethod::Get,
        &format!("{base}?field=genre&value=RPG&populate=false"),
        200,
        json!([]),
    );
    ctx.client.mock_response(
        HttpMethod::Get,
        &format!("{base}?field=title&value=Hades%20II&populate=false"),
        200,
        json!([game_json("g3", "Hades II", "PC"), game_json("g4", "Hades II", "Switch")]),
    );

    ctx.catalog.filter_games_by_platform("PC").await.unwrap();
    assert_eq!(ctx.snapshot().games.len(), 1);

    ctx.catalog.filter_games_by_genre("RPG").await.unwrap();
    assert!(ctx.snapshot().games.is_empty());

    ctx.catalog.search_games_by_title("Hades II").await.unwrap();
    assert_eq!(ctx.snapshot().games.len(), 2);
}

#[tokio::test]
async fn filter_failure_records_raw_text_and_keeps_games() {
    let ctx = TestContext::new();
    ctx.serve_list(json!([game_json("g1", "A", "PC")]));
    ctx.catalog.fetch_games().await.unwrap();
    ctx.client.mock_text(
        HttpMethod::Get,
        "http://api.test/api/query/games?field=genre&value=Horror&populate=false",
        404,
        "No games found with genre Horror",
    );

    ctx.catalog.filter_games_by_genre("Horror").await.unwrap_err();

    let state = ctx.snapshot();
    assert_eq!(
        state.filter_message.as_deref(),
        Some("No games found with genre Horror")
    );
    assert!(state.error.is_none());
    assert_eq!(state.games.len(), 1);
}

#[tokio::test]
async fn stale_errors_survive_success_until_cleared() {
    let ctx = TestContext::new();
    ctx.client
        .mock_response(HttpMethod::Get, GAMES_URL, 500, json!({}));
    ctx.catalog.fetch_games().await.unwrap_err();

    ctx.serve_list(json!([]));
    ctx.catalog.fetch_games().await.unwrap();
    assert!(ctx.snapshot().error.is_some());

    ctx.state.update(GamesState::clear_errors);
    assert!(ctx.snapshot().error.is_none());
}

#[test]
fn prepare_new_game_fills_server_fields() {
    let game = prepare_new_game(draft("X"), &["PC", "Xbox"], "u1").unwrap();
    assert_eq!(game.platform, "PC, Xbox");
    assert_eq!(game.created_by.as_deref(), Some("u1"));
    assert_eq!(game.image_url, DEFAULT_IMAGE_URL);
}
