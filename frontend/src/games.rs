//! Games context: the core `GameCatalog` writing into a signal, with each
//! operation spawned onto the local executor.

use crate::web::{FetchHttpClient, LocalStorage, SignalState};
use gameshelf::shared::{GameUpdate, NewGame};
use gameshelf::{ClientConfig, GameCatalog, GameShelfApi, GamesState, SessionStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

type Catalog = GameCatalog<FetchHttpClient, LocalStorage, SignalState<GamesState>>;

#[derive(Clone)]
pub struct GamesContext {
    pub state: RwSignal<GamesState>,
    catalog: Catalog,
}

impl GamesContext {
    pub fn new(config: ClientConfig) -> Self {
        let state = RwSignal::new(GamesState::default());
        let catalog = GameCatalog::new(
            GameShelfApi::new(FetchHttpClient, config),
            SessionStore::new(LocalStorage),
            SignalState(state),
        );
        Self { state, catalog }
    }

    // Outcomes land in `state`; the returned results are only used to
    // decide whether to run `on_success`.

    pub fn fetch_games(&self) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            let _ = catalog.fetch_games().await;
        });
    }

    pub fn add_game(
        &self,
        draft: NewGame,
        platforms: Vec<String>,
        on_success: impl FnOnce() + 'static,
    ) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            if catalog.add_game(draft, &platforms).await.is_ok() {
                on_success();
            }
        });
    }

    pub fn update_game(
        &self,
        id: String,
        update: GameUpdate,
        platforms: Vec<String>,
        on_success: impl FnOnce() + 'static,
    ) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            if catalog.update_game(&id, update, &platforms).await.is_ok() {
                on_success();
            }
        });
    }

    pub fn delete_game(&self, id: String) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            let _ = catalog.delete_game(&id).await;
        });
    }

    pub fn filter_by_platform(&self, value: String) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            let _ = catalog.filter_games_by_platform(&value).await;
        });
    }

    pub fn filter_by_genre(&self, value: String) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            let _ = catalog.filter_games_by_genre(&value).await;
        });
    }

    pub fn search_by_title(&self, value: String) {
        let catalog = self.catalog.clone();
        spawn_local(async move {
            let _ = catalog.search_games_by_title(&value).await;
        });
    }

    pub fn clear_errors(&self) {
        self.state.update(GamesState::clear_errors);
    }
}

pub fn use_games() -> GamesContext {
    use_context::<GamesContext>().expect("GamesContext should be provided")
}
