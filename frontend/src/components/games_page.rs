//! Public catalog: every game, with platform/genre filters and title search.

use crate::components::game_card::GameCard;
use crate::components::game_form::PLATFORM_OPTIONS;
use crate::components::navbar::Navbar;
use crate::games::use_games;
use gameshelf::shared::Game;
use leptos::prelude::*;

#[component]
pub fn GamesPage() -> impl IntoView {
    let games = use_games();
    let state = games.state;

    let (platform, set_platform) = signal(String::new());
    let (genre, set_genre) = signal(String::new());
    let (title, set_title) = signal(String::new());

    // 初始加载
    games.fetch_games();

    // 空条件回到完整列表
    let on_platform = {
        let games = games.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            set_platform.set(value.clone());
            if value.is_empty() {
                games.fetch_games();
            } else {
                games.filter_by_platform(value);
            }
        }
    };

    let on_genre = {
        let games = games.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let value = genre.get_untracked().trim().to_string();
            if value.is_empty() {
                games.fetch_games();
            } else {
                games.filter_by_genre(value);
            }
        }
    };

    let on_search = {
        let games = games.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let value = title.get_untracked().trim().to_string();
            if value.is_empty() {
                games.fetch_games();
            } else {
                games.search_by_title(value);
            }
        }
    };

    let on_reset = move |_| {
        set_platform.set(String::new());
        set_genre.set(String::new());
        set_title.set(String::new());
        games.clear_errors();
        games.fetch_games();
    };

    let loading = move || state.with(|s| s.loading);
    let error = move || state.with(|s| s.error.clone());
    let filter_message = move || state.with(|s| s.filter_message.clone());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />

                <div class="flex flex-wrap gap-4 items-end bg-base-100 rounded-box shadow p-4">
                    <select class="select select-bordered" on:change=on_platform prop:value=platform>
                        <option value="">"All platforms"</option>
                        {PLATFORM_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                    <form on:submit=on_genre class="join">
                        <input
                            type="text"
                            placeholder="Genre"
                            class="input input-bordered join-item"
                            prop:value=genre
                            on:input=move |ev| set_genre.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn join-item">"Filter"</button>
                    </form>
                    <form on:submit=on_search class="join">
                        <input
                            type="search"
                            placeholder="Search by title"
                            class="input input-bordered join-item"
                            prop:value=title
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn-primary join-item">"Search"</button>
                    </form>
                    <button class="btn btn-ghost" on:click=on_reset>"Reset"</button>
                </div>

                <Show when=move || error().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error().unwrap_or_default()}</span>
                    </div>
                </Show>
                <Show when=move || filter_message().is_some()>
                    <div role="alert" class="alert alert-info">
                        <span>{move || filter_message().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !loading()
                    fallback=|| view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || state.with(|s| s.games.clone())
                            key=|game: &Game| (game.id.clone(), game.revision())
                            let:game
                        >
                            <GameCard game=game />
                        </For>
                    </div>
                </Show>
            </div>
        </div>
    }
}
