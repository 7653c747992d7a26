use leptos::prelude::*;
use serde_json::json;

use super::chrome::{PublicFooter, PublicHeader};
use crate::shared::icons::icon;
use crate::shared::seo::JsonLd;

#[component]
pub fn HomePage() -> impl IntoView {
    let schema = json!({
        "@context": "https://schema.org",
        "@type": "HealthClub",
        "name": "Pulse Fitness Addis",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Addis Ababa",
            "addressCountry": "ET"
        },
        "openingHours": "Mo-Su 06:00-22:00",
        "telephone": "+251911000000"
    });

    view! {
        <div class="site-page">
            <JsonLd schema=schema />
            <PublicHeader />

            <main>
                <section class="hero">
                    <h1>
                        "Stronger Every Day." <br />
                        <span class="hero__accent">"Start in Bole."</span>
                    </h1>
                    <p class="hero__lede">
                        "Modern equipment, certified trainers, and a community of achievers in the heart of Addis Ababa."
                    </p>
                    <div class="hero__actions">
                        <a href="/services" class="btn-primary">"See Memberships"</a>
                        <a href="/faq" class="btn-secondary">"Common Questions"</a>
                    </div>
                </section>

                <section class="feature-grid">
                    <div class="feature-card">
                        {icon("dumbbell")}
                        <h3>"Full Gym Floor"</h3>
                        <p>"Free weights, machines, and a dedicated functional training zone."</p>
                    </div>
                    <div class="feature-card">
                        {icon("customers")}
                        <h3>"Personal Training"</h3>
                        <p>"Certified trainers for weight loss, bodybuilding, and general fitness."</p>
                    </div>
                    <div class="feature-card">
                        {icon("schedule")}
                        <h3>"Open Late"</h3>
                        <p>"6 AM to 10 PM for Standard members, around the clock for Premium."</p>
                    </div>
                </section>

                <section class="cta-band">
                    <h2>"Ready to start?"</h2>
                    <p>"Book a free visit and see the club before you commit."</p>
                    <a href="/services" class="btn-primary">"Choose a Plan"</a>
                </section>
            </main>

            <PublicFooter />
        </div>
    }
}
