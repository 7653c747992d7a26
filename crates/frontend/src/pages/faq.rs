use leptos::prelude::*;
use once_cell::sync::Lazy;

use super::chrome::{PublicFooter, PublicHeader};
use crate::shared::icons::icon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: u32,
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

static FAQ_CATALOGUE: Lazy<Vec<FaqEntry>> = Lazy::new(|| {
    vec![
        FaqEntry {
            id: 1,
            category: "timings",
            question: "What are your opening hours?",
            answer: "We know life in Addis is busy. That's why we are open 24/7 for Premium members. For Standard members, our hours are 6:00 AM to 10:00 PM daily. We are centrally located in Bole, just behind Friendship Mall.",
        },
        FaqEntry {
            id: 2,
            category: "payments",
            question: "What payment methods do you accept?",
            answer: "We accept cash at the front desk, major credit/debit cards, and mobile payments. You can easily pay via Telebirr or CBE Birr. Just show the confirmation SMS to our receptionist.",
        },
        FaqEntry {
            id: 3,
            category: "trainers",
            question: "Do you offer personal training?",
            answer: "Absolutely! We have a team of certified trainers specializing in weight loss, bodybuilding, and general fitness. You can book a free 30-minute consultation to discuss your goals before committing to a package.",
        },
        FaqEntry {
            id: 4,
            category: "membership",
            question: "Can I freeze my membership?",
            answer: "Yes. If you are traveling or have a medical issue, you can freeze your membership for up to 3 months within a 12-month period. A small administrative fee of 200 ETB applies per freeze request.",
        },
        FaqEntry {
            id: 5,
            category: "timings",
            question: "Is there parking available?",
            answer: "We provide free underground parking for all members for up to 2 hours. The entrance is on the side street. Security guards are present 24/7 to ensure vehicle safety.",
        },
    ]
});

const CATEGORIES: [(&str, &str, &str); 5] = [
    ("all", "All", "check"),
    ("membership", "Membership", "customers"),
    ("trainers", "Trainers", "dumbbell"),
    ("payments", "Payments", "wallet"),
    ("timings", "Timings", "schedule"),
];

/// Case-insensitive filter over question and answer, narrowed by category
/// first. "all" matches every category.
pub fn filter_faqs<'a>(faqs: &'a [FaqEntry], category: &str, query: &str) -> Vec<&'a FaqEntry> {
    let query = query.trim().to_lowercase();
    faqs.iter()
        .filter(|faq| category == "all" || faq.category == category)
        .filter(|faq| {
            query.is_empty()
                || faq.question.to_lowercase().contains(&query)
                || faq.answer.to_lowercase().contains(&query)
        })
        .collect()
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let active_category = RwSignal::new("all".to_string());
    let open_id = RwSignal::new(None::<u32>);

    view! {
        <div class="site-page">
            <PublicHeader />

            <main>
                <section class="hero hero--compact">
                    <h1>
                        "Got Questions?" <br />
                        <span class="hero__accent">"Let's Get You Moving."</span>
                    </h1>
                    <p class="hero__lede">
                        "Find answers to common questions about memberships, payments, trainers, and gym etiquette."
                    </p>
                    <div class="faq-search">
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Search questions..."
                            value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>
                </section>

                <section class="faq-body">
                    <div class="faq-categories">
                        {CATEGORIES
                            .iter()
                            .map(|(id, label, icon_name)| {
                                let id = *id;
                                view! {
                                    <button
                                        class="faq-category"
                                        class:faq-category--active=move || {
                                            active_category.get() == id
                                        }
                                        on:click=move |_| active_category.set(id.to_string())
                                    >
                                        {icon(*icon_name)}
                                        <span>{*label}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="faq-list">
                        {move || {
                            let matches = filter_faqs(
                                &FAQ_CATALOGUE,
                                &active_category.get(),
                                &search.get(),
                            );
                            if matches.is_empty() {
                                view! {
                                    <p class="faq-list__empty">
                                        "No questions match your search."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                matches
                                    .into_iter()
                                    .map(|faq| {
                                        let id = faq.id;
                                        view! {
                                            <div class="faq-item">
                                                <button
                                                    class="faq-item__question"
                                                    on:click=move |_| {
                                                        open_id
                                                            .update(|open| {
                                                                *open = if *open == Some(id) {
                                                                    None
                                                                } else {
                                                                    Some(id)
                                                                };
                                                            })
                                                    }
                                                >
                                                    {faq.question}
                                                </button>
                                                <Show when=move || open_id.get() == Some(id)>
                                                    <p class="faq-item__answer">{faq.answer}</p>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </section>
            </main>

            <PublicFooter />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_shows_everything() {
        let matches = filter_faqs(&FAQ_CATALOGUE, "all", "");
        assert_eq!(matches.len(), FAQ_CATALOGUE.len());
    }

    #[test]
    fn category_narrows_the_list() {
        let matches = filter_faqs(&FAQ_CATALOGUE, "timings", "");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|faq| faq.category == "timings"));
    }

    #[test]
    fn search_is_case_insensitive_over_text() {
        let matches = filter_faqs(&FAQ_CATALOGUE, "all", "TELEBIRR");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, "payments");
    }

    #[test]
    fn search_composes_with_category() {
        let matches = filter_faqs(&FAQ_CATALOGUE, "membership", "parking");
        assert!(matches.is_empty());
    }
}
