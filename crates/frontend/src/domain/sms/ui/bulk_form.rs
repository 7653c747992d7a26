use contracts::sms::{BulkSmsRequest, SendReport};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sms::api;
use crate::system::auth::context::use_auth;

/// One phone number per line; blanks and surrounding whitespace are
/// dropped, duplicates are kept (the provider dedupes on its side).
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn BulkForm() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let recipients = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (report, set_report) = signal(None::<SendReport>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let phone_numbers = parse_recipients(&recipients.get());
        if phone_numbers.is_empty() {
            set_error.set(Some("Add at least one phone number.".to_string()));
            return;
        }

        let token = auth_state.get_untracked().token.unwrap_or_default();
        let request = BulkSmsRequest {
            phone_numbers,
            message: message.get(),
        };

        set_sending.set(true);
        set_error.set(None);
        set_report.set(None);

        spawn_local(async move {
            match api::send_bulk(&token, &request).await {
                Ok(result) => {
                    set_report.set(Some(result));
                    recipients.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    set_error.set(Some(
                        err.form_message("Failed to send bulk SMS. Please try again."),
                    ));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <form class="sms-form" on:submit=on_submit>
            <div class="form-group">
                <label for="bulk-recipients">"Recipients"</label>
                <textarea
                    id="bulk-recipients"
                    rows="6"
                    placeholder="One phone number per line"
                    prop:value=move || recipients.get()
                    on:input=move |ev| recipients.set(event_target_value(&ev))
                    required
                    disabled=move || sending.get()
                />
                <p class="form-hint">
                    {move || format!("{} recipients", parse_recipients(&recipients.get()).len())}
                </p>
            </div>

            <div class="form-group">
                <label for="bulk-message">"Message"</label>
                <textarea
                    id="bulk-message"
                    rows="4"
                    placeholder="Your message..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                    required
                    disabled=move || sending.get()
                />
            </div>

            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                report
                    .get()
                    .map(|result| {
                        view! {
                            <div class="send-report">
                                <h4>"Results"</h4>
                                <p>"Total: " {result.total} " recipients"</p>
                                <p class="send-report__success">
                                    "Success: " {result.success} " sent"
                                </p>
                                <Show when=move || { result.failed > 0 }>
                                    <p class="send-report__failed">"Failed: " {result.failed}</p>
                                </Show>
                            </div>
                        }
                    })
            }}

            <button type="submit" class="btn-primary" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Bulk SMS" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_and_trims() {
        let raw = "+251911000001\n  +251911000002  \n\n+251911000003\n";
        assert_eq!(
            parse_recipients(raw),
            vec!["+251911000001", "+251911000002", "+251911000003"]
        );
    }

    #[test]
    fn empty_input_means_no_recipients() {
        assert!(parse_recipients("").is_empty());
        assert!(parse_recipients("  \n \n").is_empty());
    }
}
