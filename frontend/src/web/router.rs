//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API：所有对 window.history 的操作都集中在此模块。
//! 每次导航（包括浏览器后退/前进）都先交给 `RouteGuard`，
//! 守卫直接读取 localStorage 中的会话。

use gameshelf::{AppRoute, RouteGuard, SessionStore};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::LocalStorage;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证信号由外部注入，只用于登录/注销后的自动跳转。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
    guard: RouteGuard<LocalStorage>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let guard = RouteGuard::new(SessionStore::new(LocalStorage));

        // 首次加载没有来源路由
        let requested = AppRoute::from_path(&current_path());
        let initial_route = guard.resolve(requested, None);
        if initial_route != requested {
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            guard,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 加载
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        let from = self.current_route.get_untracked();
        let resolved = self.guard.resolve(target, Some(from));
        if resolved != target {
            log(&format!("[Router] {target} blocked, redirecting to {resolved}."));
        }
        push_history_state(resolved.to_path());
        self.set_route.set(resolved);
    }

    /// 浏览器后退/前进按钮同样经过守卫
    fn init_popstate_listener(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let guard = self.guard;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let from = current_route.get_untracked();
            let resolved = guard.resolve(target, Some(from));
            if resolved != target {
                replace_history_state(resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            let redirect = if is_auth && route.should_redirect_when_authenticated() {
                AppRoute::auth_success_redirect()
            } else if !is_auth && route.requires_auth() {
                AppRoute::auth_failure_redirect()
            } else {
                return;
            };
            log(&format!(
                "[Router] Auth state changed (logged in: {is_auth}), redirecting to {redirect}."
            ));
            push_history_state(redirect.to_path());
            set_route.set(redirect);
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击并走守卫导航
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
