//! 认证模块
//!
//! Wraps the core `UserAuth` with reactive state. The logged-in flag in
//! that state is derived from localStorage after every operation, so the
//! router's guard and the views never disagree about the session.

use crate::web::{FetchHttpClient, LocalStorage, SignalState};
use gameshelf::{ClientConfig, GameShelfApi, SessionStore, UserAuth, UserState};
use leptos::prelude::*;

type Auth = UserAuth<FetchHttpClient, LocalStorage, SignalState<UserState>>;

/// 认证上下文
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<UserState>,
    auth: Auth,
}

impl AuthContext {
    /// Seeded from localStorage.
    pub fn new(config: ClientConfig) -> Self {
        let state = RwSignal::new(UserState::default());
        let auth = UserAuth::new(
            GameShelfApi::new(FetchHttpClient, config),
            SessionStore::new(LocalStorage),
            SignalState(state),
        );
        Self { state, auth }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_logged_in))
    }

    pub async fn login(&self, email: String, password: String) -> bool {
        self.auth.fetch_token(&email, &password).await
    }

    pub async fn register(&self, name: String, email: String, password: String) -> bool {
        self.auth.register_user(&name, &email, &password).await
    }

    /// 注销并清除状态
    ///
    /// 导航将由路由服务的认证状态监听自动处理。
    pub fn logout(&self) {
        self.auth.logout();
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
