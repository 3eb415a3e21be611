//! Shared add/edit form for the admin page.

mod form_state;

pub use form_state::{FormState, PLATFORM_OPTIONS};

use leptos::prelude::*;

/// 表单字段名：编辑模式下加 `Update` 后缀，避免与添加表单冲突
fn field_name(base: &str, editing: bool) -> String {
    if editing {
        format!("{base}Update")
    } else {
        base.to_string()
    }
}

#[component]
fn TextField(
    label: &'static str,
    name: String,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=name.clone()>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=name.clone()
                name=name
                type=kind
                step="any"
                required=required
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
                class="input input-bordered w-full"
            />
        </div>
    }
}

#[component]
pub fn GameForm(
    form: FormState,
    /// 编辑模式
    #[prop(optional)]
    editing: bool,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let (heading, submit_label) = if editing {
        ("Edit game", "Update")
    } else {
        ("Add game", "Add")
    };

    view! {
        <form on:submit=submit class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-2">
                <h3 class="card-title">{heading}</h3>

                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <TextField label="Title" name=field_name("title", editing) value=form.title required=true />
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        name=field_name("description", editing)
                        class="textarea textarea-bordered w-full"
                        prop:value=form.description
                        on:input=move |ev| form.description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <TextField label="Image URL" name=field_name("imageURL", editing) value=form.image_url />

                <div class="grid grid-cols-2 gap-4">
                    <TextField label="Price" name=field_name("price", editing) value=form.price kind="number" />
                    <TextField label="Rating" name=field_name("rating", editing) value=form.rating kind="number" />
                </div>

                <div class="form-control">
                    <span class="label-text">"Platforms"</span>
                    <div class="flex flex-wrap gap-4 py-2">
                        {PLATFORM_OPTIONS
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <label class="label cursor-pointer gap-2">
                                        <input
                                            type="checkbox"
                                            class="checkbox checkbox-primary"
                                            name=field_name(&format!("platform_{value}"), editing)
                                            prop:checked=move || form.has_platform(value)
                                            on:change=move |ev| form.set_platform(value, event_target_checked(&ev))
                                        />
                                        <span class="label-text">{*label}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <TextField label="Genre" name=field_name("genre", editing) value=form.genre />
                    <TextField label="Release date" name=field_name("release_date", editing) value=form.release_date kind="date" />
                </div>

                <div class="card-actions justify-end">
                    {on_cancel.map(|cancel| view! {
                        <button type="button" class="btn btn-ghost" on:click=move |_| cancel.run(())>"Cancel"</button>
                    })}
                    <button
                        type="submit"
                        name=field_name("submit", editing)
                        class="btn btn-primary"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() {
                            view! { <span class="loading loading-spinner"></span> }.into_any()
                        } else {
                            submit_label.into_any()
                        }}
                    </button>
                </div>
            </div>
        </form>
    }
}
