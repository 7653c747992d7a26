use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::customers::ui::list::PotentialCustomersPage;
use crate::domain::dashboard::ui::DashboardPage;
use crate::domain::sms::ui::page::SmsPage;
use crate::layout::AdminSection;
use crate::pages::faq::FaqPage;
use crate::pages::home::HomePage;
use crate::pages::services::ServicesPage;
use crate::system::pages::login::LoginPage;

/// Full route surface: public marketing pages plus the admin section.
/// Everything under `/admin` renders through [`AdminSection`], which owns
/// the session guard; `/admin` itself lands on the dashboard.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/services") view=ServicesPage />
                <Route path=path!("/faq") view=FaqPage />
                <ParentRoute path=path!("/admin") view=AdminSection>
                    <Route
                        path=path!("")
                        view=|| view! { <Redirect path="/admin/dashboard" /> }
                    />
                    <Route path=path!("login") view=LoginPage />
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("potential-customers") view=PotentialCustomersPage />
                    <Route path=path!("sms") view=SmsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/">"Back to the gym"</a>
        </div>
    }
}
