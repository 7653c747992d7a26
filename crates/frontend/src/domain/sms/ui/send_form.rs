use contracts::sms::SendSmsRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::sms::api;
use crate::system::auth::context::use_auth;

#[component]
pub fn SendForm() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let phone_number = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (sent_to, set_sent_to) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let token = auth_state.get_untracked().token.unwrap_or_default();
        let request = SendSmsRequest {
            phone_number: phone_number.get().trim().to_string(),
            message: message.get(),
        };

        set_sending.set(true);
        set_error.set(None);
        set_sent_to.set(None);

        spawn_local(async move {
            match api::send_sms(&token, &request).await {
                Ok(record) => {
                    set_sent_to.set(Some(record.phone_number));
                    phone_number.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    set_error.set(Some(err.form_message("Failed to send SMS. Please try again.")));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <form class="sms-form" on:submit=on_submit>
            <div class="form-group">
                <label for="sms-phone">"Phone Number"</label>
                <input
                    type="tel"
                    id="sms-phone"
                    placeholder="+2519..."
                    value=move || phone_number.get()
                    on:input=move |ev| phone_number.set(event_target_value(&ev))
                    required
                    disabled=move || sending.get()
                />
            </div>

            <div class="form-group">
                <label for="sms-message">"Message"</label>
                <textarea
                    id="sms-message"
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
            <Show when=move || sent_to.get().is_some()>
                <p class="form-success">
                    "Message sent to " {move || sent_to.get().unwrap_or_default()}
                </p>
            </Show>

            <button type="submit" class="btn-primary" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send SMS" }}
            </button>
        </form>
    }
}
