//! 管理页面：添加、编辑、删除游戏
//!
//! Only reachable with a stored session; the router guard redirects
//! anonymous visitors to the login page.

use crate::components::game_card::GameCard;
use crate::components::game_form::{FormState, GameForm};
use crate::components::navbar::Navbar;
use crate::games::use_games;
use gameshelf::shared::Game;
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let games = use_games();
    let state = games.state;

    let show_add = RwSignal::new(false);
    let add_form = FormState::new();
    let edit_form = FormState::new();
    let editing = RwSignal::new(Option::<String>::None);
    let pending_delete = RwSignal::new(Option::<Game>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    games.fetch_games();

    // 删除确认框与 pending_delete 同步
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if pending_delete.with(Option::is_some) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_add = {
        let games = games.clone();
        move |()| {
            games.add_game(add_form.to_new_game(), add_form.selected_platforms(), move || {
                add_form.reset();
                show_add.set(false);
            });
        }
    };

    let on_update = {
        let games = games.clone();
        move |()| {
            let Some(id) = editing.get_untracked() else {
                return;
            };
            games.update_game(id, edit_form.to_update(), edit_form.selected_platforms(), move || {
                editing.set(None);
            });
        }
    };

    let start_edit = move |game: &Game| {
        edit_form.fill_from(game);
        editing.set(Some(game.id.clone()));
    };

    let confirm_delete = {
        let games = games.clone();
        move |_| {
            if let Some(game) = pending_delete.get_untracked() {
                games.delete_game(game.id);
            }
            pending_delete.set(None);
        }
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let error = move || state.with(|s| s.error.clone());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />

                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Admin"</h1>
                    <button
                        id="addGame"
                        class="btn btn-primary"
                        on:click=move |_| show_add.update(|open| *open = !*open)
                    >
                        {move || if show_add.get() { "Close" } else { "Add game" }}
                    </button>
                </div>

                <Show when=move || show_add.get()>
                    <GameForm
                        form=add_form
                        error=Signal::derive(move || state.with(|s| s.add_error.clone()))
                        loading=loading
                        on_submit=on_add.clone()
                        on_cancel=move |()| show_add.set(false)
                    />
                </Show>

                <Show when=move || editing.with(Option::is_some)>
                    <GameForm
                        form=edit_form
                        editing=true
                        error=Signal::derive(move || state.with(|s| s.update_error.clone()))
                        loading=loading
                        on_submit=on_update.clone()
                        on_cancel=move |()| editing.set(None)
                    />
                </Show>

                <Show when=move || error().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || state.with(|s| s.games.clone())
                        key=|game: &Game| (game.id.clone(), game.revision())
                        let:game
                    >
                        {
                            let edit_target = game.clone();
                            let delete_target = game.clone();
                            view! {
                                <GameCard game=game>
                                    <button
                                        class="btn btn-sm btn-outline"
                                        on:click=move |_| start_edit(&edit_target)
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-sm btn-error"
                                        on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                                    >
                                        "Delete"
                                    </button>
                                </GameCard>
                            }
                        }
                    </For>
                </div>
            </div>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| pending_delete.set(None)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"Delete game"</h3>
                    <p class="py-4">
                        "Are you sure you want to delete "
                        <strong>{move || pending_delete.with(|g| g.as_ref().map(|g| g.title.clone()))}</strong>
                        "?"
                    </p>
                    <div class="modal-action">
                        <button class="btn btn-ghost" on:click=move |_| pending_delete.set(None)>"Cancel"</button>
                        <button class="btn btn-error" on:click=confirm_delete>"Delete"</button>
                    </div>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
