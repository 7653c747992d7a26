use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppRoutes />
    }
}
