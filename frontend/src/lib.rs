//! GameShelf 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `web`: 浏览器端的 HTTP / localStorage / 信号实现与路由服务
//! - `auth` / `games`: 包装核心库的上下文
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod admin;
    mod game_card;
    mod game_form;
    pub mod games_page;
    pub mod login;
    mod navbar;
    pub mod register;
}
mod games;
pub(crate) mod web;

use crate::auth::AuthContext;
use crate::components::admin::AdminPage;
use crate::components::games_page::GamesPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::games::GamesContext;
use crate::web::router::{Link, Router, RouterOutlet};

use gameshelf::{AppRoute, ClientConfig};
use leptos::prelude::*;

/// 后端地址在编译期注入，未设置时使用默认值
fn client_config() -> ClientConfig {
    option_env!("GAMESHELF_API_URL")
        .or(option_env!("API_BASE_URL"))
        .filter(|url| !url.trim().is_empty())
        .map(ClientConfig::new)
        .unwrap_or_default()
}

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Games => view! { <GamesPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to="/" class="btn btn-primary mt-6">"Back to games"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = client_config();

    // 1. 认证上下文（从 localStorage 初始化）
    let auth_ctx = AuthContext::new(config.clone());
    provide_context(auth_ctx.clone());

    provide_context(GamesContext::new(config));

    // 2. 认证状态信号注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
