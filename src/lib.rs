//! Headless client core for the GameShelf catalog.
//!
//! - `request`: HTTP abstraction and the native transport
//! - `api`: typed endpoint calls
//! - `session`: persisted token/user id
//! - `games` / `users`: stateful clients that record outcomes into state
//! - `route` / `guard`: route table and navigation guard
//!
//! Browser bindings for the `HttpClient`, `KeyValueStore` and `StateHandle`
//! seams live in the frontend crate.

pub mod api;
pub mod config;
pub mod error;
pub mod games;
pub mod guard;
pub mod request;
pub mod route;
pub mod session;
pub mod state;
pub mod users;

pub use api::GameShelfApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use games::{GameCatalog, GamesState};
pub use guard::{Navigation, RouteGuard};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::AppRoute;
pub use session::{Credentials, KeyValueStore, MemoryStore, SessionStore};
pub use state::{LocalState, StateHandle};
pub use users::{UserAuth, UserState};

#[cfg(not(target_arch = "wasm32"))]
pub use request::ReqwestHttpClient;

pub use gameshelf_shared as shared;
