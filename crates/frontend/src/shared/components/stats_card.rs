use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard stat tile: icon, caption and a reactive value. The value is a
/// signal so the card re-renders as its source loads.
#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    icon_name: &'static str,
    #[prop(into, optional)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <div class="stats-card__icon">{icon(icon_name)}</div>
            <div class="stats-card__body">
                <p class="stats-card__title">{title}</p>
                <p class="stats-card__value">{move || value.get()}</p>
                {subtitle.map(|text| view! { <p class="stats-card__subtitle">{text}</p> })}
            </div>
        </div>
    }
}
