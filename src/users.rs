//! Login, registration and logout.
//!
//! `is_logged_in` is never set directly: it is re-derived from the session
//! store after every operation.

use crate::api::GameShelfApi;
use crate::error::{
    ClientError, ClientResult, MSG_INVALID_CREDENTIALS, MSG_LOGIN_FAILED, MSG_REGISTER_FAILED,
};
use crate::request::HttpClient;
use crate::session::{KeyValueStore, SessionStore};
use crate::state::StateHandle;
use gameshelf_shared::{LoginRequest, RegisterRequest};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub loading: bool,
    pub token: Option<String>,
    pub is_logged_in: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct UserAuth<C, S, H> {
    api: GameShelfApi<C>,
    session: SessionStore<S>,
    state: H,
}

impl<C, S, H> UserAuth<C, S, H>
where
    C: HttpClient,
    S: KeyValueStore,
    H: StateHandle<UserState>,
{
    /// Builds the client and seeds the state from the stored session.
    pub fn new(api: GameShelfApi<C>, session: SessionStore<S>, state: H) -> Self {
        let auth = Self {
            api,
            session,
            state,
        };
        auth.sync_from_session();
        auth
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    fn sync_from_session(&self) {
        let logged_in = self.session.sync_flag();
        let token = self.session.token();
        self.state.update(|s| {
            s.is_logged_in = logged_in;
            s.token = token;
        });
    }

    /// Log in; `true` on success.
    pub async fn fetch_token(&self, email: &str, password: &str) -> bool {
        self.login(email, password).await.is_ok()
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        self.state.update(|s| s.loading = true);

        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self
            .api
            .login(&req, MSG_INVALID_CREDENTIALS)
            .await
            .map_err(|e| match e {
                ClientError::Transport(_) => ClientError::Transport(MSG_LOGIN_FAILED.to_string()),
                other => other,
            })
            .and_then(|auth| {
                self.session.set_session(&auth)?;
                info!(user_id = %auth.user_id, "User logged in");
                Ok(())
            });

        if let Err(e) = &result {
            // A failed login never leaves an older token behind.
            self.session.clear();
            warn!(error = %e, "login failed");
            let message = e.to_string();
            self.state.update(|s| s.error = Some(message));
        }

        self.sync_from_session();
        self.state.update(|s| s.loading = false);
        result
    }

    /// Register; `true` on success. Does not log in.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> bool {
        self.register(name, email, password).await.is_ok()
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<()> {
        self.state.update(|s| s.loading = true);

        let req = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = match self.api.register(&req, MSG_REGISTER_FAILED).await {
            Ok(()) => {
                info!(email, "User registered");
                Ok(())
            }
            Err(e) => {
                let e = match e {
                    ClientError::Transport(_) => {
                        ClientError::Transport(MSG_REGISTER_FAILED.to_string())
                    }
                    other => other,
                };
                warn!(error = %e, "registration failed");
                let message = e.to_string();
                self.state.update(|s| s.error = Some(message));
                Err(e)
            }
        };

        self.state.update(|s| s.loading = false);
        result
    }

    /// Local only; the backend is not called.
    pub fn logout(&self) {
        self.session.clear();
        self.sync_from_session();
        info!("User logged out");
    }
}
