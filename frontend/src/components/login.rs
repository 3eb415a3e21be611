use crate::auth::use_auth;
use crate::components::navbar::Navbar;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let auth = auth.clone();
        // 成功后的跳转由路由服务的认证状态监听完成
        spawn_local(async move {
            auth.login(email.get_untracked(), password.get_untracked()).await;
        });
    };

    let is_submitting = move || state.with(|s| s.loading);
    let error_msg = move || state.with(|s| s.error.clone());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />
                <div class="hero">
                    <div class="hero-content flex-col w-full max-w-md">
                        <h1 class="text-3xl font-bold">"Login"</h1>
                        <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                            <form class="card-body" on:submit=on_submit>
                                <Show when=move || error_msg().is_some()>
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{move || error_msg().unwrap_or_default()}</span>
                                    </div>
                                </Show>

                                <div class="form-control">
                                    <label class="label" for="email">
                                        <span class="label-text">"Email"</span>
                                    </label>
                                    <input
                                        id="email"
                                        name="email"
                                        type="email"
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:value=email
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="password">
                                        <span class="label-text">"Password"</span>
                                    </label>
                                    <input
                                        id="password"
                                        name="password"
                                        type="password"
                                        placeholder="••••••••"
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        prop:value=password
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control mt-6">
                                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                                        {move || if is_submitting() {
                                            view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                        } else {
                                            "Login".into_any()
                                        }}
                                    </button>
                                </div>
                                <p class="text-sm text-center">
                                    "No account yet? "
                                    <Link to="/register" class="link link-primary">"Register"</Link>
                                </p>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
