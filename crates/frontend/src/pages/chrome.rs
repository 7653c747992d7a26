//! Shared header/footer for the public marketing pages.

use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn PublicHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                {icon("dumbbell")}
                <span>"Pulse Fitness Addis"</span>
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/services">"Services"</a>
                <a href="/faq">"FAQ"</a>
            </nav>
            <a href="/services" class="btn-primary site-header__cta">"Join Now"</a>
        </header>
    }
}

#[component]
pub fn PublicFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div>
                    <h4>"Pulse Fitness Addis"</h4>
                    <p>"Bole, behind Friendship Mall"</p>
                    <p>"Addis Ababa, Ethiopia"</p>
                </div>
                <div>
                    <h4>"Hours"</h4>
                    <p>"Standard: 6:00 AM - 10:00 PM daily"</p>
                    <p>"Premium: open 24/7"</p>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <p>"hello@pulsefitness.et"</p>
                    <p>"+251 911 000 000"</p>
                </div>
            </div>
            <p class="site-footer__copyright">"© 2026 Pulse Fitness Addis. All rights reserved."</p>
        </footer>
    }
}
