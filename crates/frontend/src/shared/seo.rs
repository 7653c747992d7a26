use leptos::prelude::*;
use serde_json::Value;

/// Emits a JSON-LD structured-data block so search engines can read the
/// business schema from the marketing pages.
#[component]
pub fn JsonLd(schema: Value) -> impl IntoView {
    let payload = schema.to_string();
    view! {
        <script type="application/ld+json">{payload}</script>
    }
}
