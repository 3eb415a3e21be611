use crate::auth::use_auth;
use crate::components::navbar::Navbar;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let state = auth.state;

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // 注册成功后前往登录页
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let auth = auth.clone();
        spawn_local(async move {
            let ok = auth
                .register(
                    name.get_untracked(),
                    email.get_untracked(),
                    password.get_untracked(),
                )
                .await;
            if ok {
                router.navigate("/login");
            }
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
                        <h1 class="text-3xl font-bold">"Register"</h1>
                        <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                            <form class="card-body" on:submit=on_submit>
                                <Show when=move || error_msg().is_some()>
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{move || error_msg().unwrap_or_default()}</span>
                                    </div>
                                </Show>

                                <div class="form-control">
                                    <label class="label" for="name">
                                        <span class="label-text">"Name"</span>
                                    </label>
                                    <input
                                        id="name"
                                        name="name"
                                        type="text"
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                        prop:value=name
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
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
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        prop:value=password
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control mt-6">
                                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                                        {move || if is_submitting() {
                                            view! { <span class="loading loading-spinner"></span> "Registering..." }.into_any()
                                        } else {
                                            "Register".into_any()
                                        }}
                                    </button>
                                </div>
                                <p class="text-sm text-center">
                                    "Already registered? "
                                    <Link to="/login" class="link link-primary">"Login"</Link>
                                </p>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
