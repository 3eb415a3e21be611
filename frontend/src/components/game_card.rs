use gameshelf::shared::Game;
use leptos::prelude::*;

#[component]
pub fn GameCard(
    game: Game,
    /// 管理页面的操作按钮
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let platforms = game
        .platforms()
        .into_iter()
        .map(|p| view! { <span class="badge badge-outline">{p.to_string()}</span> })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <figure>
                <img src=game.image_url.clone() alt=game.title.clone() class="h-48 w-full object-cover" />
            </figure>
            <div class="card-body">
                <h2 class="card-title">{game.title.clone()}</h2>
                <p class="text-base-content/70 text-sm">{game.description.clone()}</p>
                <div class="flex flex-wrap gap-1">{platforms}</div>
                <div class="flex justify-between text-sm">
                    <span class="badge badge-secondary">{game.genre.clone()}</span>
                    <span>{game.release_date.clone()}</span>
                </div>
                <div class="flex justify-between items-center">
                    <span class="text-lg font-bold">{format!("${:.2}", game.price)}</span>
                    <span class="text-warning">{format!("★ {:.1}", game.rating)}</span>
                </div>
                {children.map(|actions| view! {
                    <div class="card-actions justify-end">{actions()}</div>
                })}
            </div>
        </div>
    }
}
