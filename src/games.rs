//! Game catalog client.
//!
//! Holds the last fetched collection plus loading/error fields. Operations
//! record failures into their own slot (`error`, `add_error`,
//! `update_error`, `filter_message`) and also return them to the caller.
//! Slots are not cleared by later successes; use
//! [`GamesState::clear_errors`] for that.

use crate::api::GameShelfApi;
use crate::error::{ClientError, ClientResult, MSG_NO_PLATFORM};
use crate::request::HttpClient;
use crate::session::{KeyValueStore, SessionStore};
use crate::state::StateHandle;
use gameshelf_shared::{DEFAULT_IMAGE_URL, Game, GameUpdate, NewGame, QueryField, join_platforms};
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesState {
    pub games: Vec<Game>,
    pub loading: bool,
    pub error: Option<String>,
    pub add_error: Option<String>,
    pub update_error: Option<String>,
    pub filter_message: Option<String>,
}

impl GamesState {
    pub fn clear_errors(&mut self) {
        self.error = None;
        self.add_error = None;
        self.update_error = None;
        self.filter_message = None;
    }
}

#[derive(Debug, Clone, Copy)]
enum ErrorSlot {
    General,
    Add,
    Update,
    Filter,
}

impl ErrorSlot {
    fn write(self, state: &mut GamesState, message: String) {
        let slot = match self {
            ErrorSlot::General => &mut state.error,
            ErrorSlot::Add => &mut state.add_error,
            ErrorSlot::Update => &mut state.update_error,
            ErrorSlot::Filter => &mut state.filter_message,
        };
        *slot = Some(message);
    }
}

/// Join the selected platforms, rejecting an empty selection.
pub fn platform_field<S: AsRef<str>>(platforms: &[S]) -> ClientResult<String> {
    if platforms.is_empty() {
        return Err(ClientError::Validation(MSG_NO_PLATFORM.to_string()));
    }
    Ok(join_platforms(platforms))
}

/// Fill the server-side fields of a draft: platform string, creator id and
/// a placeholder image when none was given.
pub fn prepare_new_game<S: AsRef<str>>(
    mut draft: NewGame,
    platforms: &[S],
    user_id: &str,
) -> ClientResult<NewGame> {
    draft.platform = platform_field(platforms)?;
    draft.created_by = Some(user_id.to_string());
    if draft.image_url.trim().is_empty() {
        draft.image_url = DEFAULT_IMAGE_URL.to_string();
    }
    Ok(draft)
}

#[derive(Clone)]
pub struct GameCatalog<C, S, H> {
    api: GameShelfApi<C>,
    session: SessionStore<S>,
    state: H,
}

impl<C, S, H> GameCatalog<C, S, H>
where
    C: HttpClient,
    S: KeyValueStore,
    H: StateHandle<GamesState>,
{
    pub fn new(api: GameShelfApi<C>, session: SessionStore<S>, state: H) -> Self {
        Self {
            api,
            session,
            state,
        }
    }

    pub fn api(&self) -> &GameShelfApi<C> {
        &self.api
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    fn begin(&self) {
        self.state.update(|s| s.loading = true);
    }

    /// Record a failure into `slot` and drop the loading flag.
    fn finish<T>(&self, result: ClientResult<T>, slot: ErrorSlot) -> ClientResult<T> {
        match result {
            Ok(value) => {
                self.state.update(|s| s.loading = false);
                Ok(value)
            }
            Err(e) => {
                debug!(?slot, error = %e, "game operation failed");
                let message = e.to_string();
                self.state.update(|s| {
                    slot.write(s, message);
                    s.loading = false;
                });
                Err(e)
            }
        }
    }

    /// Replace the collection with the server's list.
    pub async fn fetch_games(&self) -> ClientResult<()> {
        self.begin();
        let result = match self.api.list_games().await {
            Ok(games) => {
                info!(count = games.len(), "Games fetched");
                self.state.update(|s| s.games = games);
                Ok(())
            }
            Err(e) => Err(e),
        };
        self.finish(result, ErrorSlot::General)
    }

    /// Re-sync after a mutation. A failed re-fetch lands in `error` but does
    /// not fail the mutation that already succeeded.
    async fn resync(&self) {
        if let Err(e) = self.fetch_games().await {
            warn!(error = %e, "re-fetch after mutation failed");
        }
    }

    pub async fn add_game<P: AsRef<str>>(&self, draft: NewGame, platforms: &[P]) -> ClientResult<()> {
        self.begin();
        let result = self.try_add(draft, platforms).await;
        self.finish(result, ErrorSlot::Add)
    }

    async fn try_add<P: AsRef<str>>(&self, draft: NewGame, platforms: &[P]) -> ClientResult<()> {
        let creds = self.session.credentials()?;
        let game = prepare_new_game(draft, platforms, &creds.user_id)?;

        self.api
            .create_game(&creds.token, &game)
            .await
            .map_err(|e| e.context("Failed to add game!"))?;
        info!(title = %game.title, "Game added");

        self.resync().await;
        Ok(())
    }

    pub async fn update_game<P: AsRef<str>>(
        &self,
        id: &str,
        update: GameUpdate,
        platforms: &[P],
    ) -> ClientResult<()> {
        self.begin();
        let result = self.try_update(id, update, platforms).await;
        self.finish(result, ErrorSlot::Update)
    }

    async fn try_update<P: AsRef<str>>(
        &self,
        id: &str,
        mut update: GameUpdate,
        platforms: &[P],
    ) -> ClientResult<()> {
        let creds = self.session.credentials()?;
        update.platform = Some(platform_field(platforms)?);

        self.api
            .update_game(&creds.token, id, update)
            .await
            .map_err(|e| e.context("Failed to update game!"))?;
        info!(id, "Game updated");

        self.resync().await;
        Ok(())
    }

    /// Delete on the server, then drop the entry locally (no re-fetch).
    pub async fn delete_game(&self, id: &str) -> ClientResult<()> {
        self.begin();
        let result = self.try_delete(id).await;
        self.finish(result, ErrorSlot::General)
    }

    async fn try_delete(&self, id: &str) -> ClientResult<()> {
        let creds = self.session.credentials()?;

        self.api
            .delete_game(&creds.token, id)
            .await
            .map_err(|e| e.context("Failed to delete game!"))?;

        self.state.update(|s| s.games.retain(|g| g.id != id));
        info!(id, "Game deleted by id");
        Ok(())
    }

    pub async fn filter_games_by_platform(&self, value: &str) -> ClientResult<()> {
        self.query(QueryField::Platform, value).await
    }

    pub async fn filter_games_by_genre(&self, value: &str) -> ClientResult<()> {
        self.query(QueryField::Genre, value).await
    }

    pub async fn search_games_by_title(&self, value: &str) -> ClientResult<()> {
        self.query(QueryField::Title, value).await
    }

    async fn query(&self, field: QueryField, value: &str) -> ClientResult<()> {
        self.begin();
        let result = match self.api.query_games(field, value).await {
            Ok(games) => {
                debug!(field = field.as_str(), count = games.len(), "Games filtered");
                self.state.update(|s| s.games = games);
                Ok(())
            }
            Err(e) => Err(e),
        };
        self.finish(result, ErrorSlot::Filter)
    }
}
