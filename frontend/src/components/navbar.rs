use crate::auth::use_auth;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let is_logged_in = auth.is_authenticated_signal();

    // 注销后的跳转由路由服务的认证状态监听处理
    let on_logout = move |_| auth.logout();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to="/" class="btn btn-ghost text-xl">"GameShelf"</Link>
            </div>
            <div class="flex-none gap-2">
                <Link to="/" class="btn btn-ghost">"Games"</Link>
                <Show
                    when=move || is_logged_in.get()
                    fallback=|| view! {
                        <Link to="/login" class="btn btn-ghost">"Login"</Link>
                        <Link to="/register" class="btn btn-primary">"Register"</Link>
                    }
                >
                    <Link to="/admin" class="btn btn-ghost">"Admin"</Link>
                    <button on:click=on_logout.clone() class="btn btn-outline btn-error">"Logout"</button>
                </Show>
            </div>
        </div>
    }
}
