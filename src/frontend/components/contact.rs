//! Contact section: details column plus the relay-backed message form.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::ExternalLink;
use crate::form::{ContactMessage, FieldErrors, FormField, RelayRequest, RELAY_ENDPOINT};
use crate::frontend::anim::reveal::{Reveal, RevealDirection};

/// Success banner lifetime.
const SUCCESS_BANNER_MS: u32 = 5_000;
const SEND_FAILED: &str = "Failed to send email. Please try again later.";

async fn send_relay(payload: RelayRequest) -> Result<(), String> {
    let request = Request::post(RELAY_ENDPOINT)
        .json(&payload)
        .map_err(|_| SEND_FAILED.to_string())?;
    let response = request.send().await.map_err(|error| {
        log::warn!("relay call failed: {error:?}");
        SEND_FAILED.to_string()
    })?;

    if response.ok() {
        Ok(())
    } else {
        log::warn!("relay rejected the message: HTTP {}", response.status());
        Err(SEND_FAILED.to_string())
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactMessage::default);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state_eq(|| false);
    let success = use_state_eq(|| false);
    let submit_error = use_state(|| Option::<String>::None);

    {
        let success = success.clone();
        use_effect_with(*success, move |shown| {
            let handle = shown.then(|| {
                let success = success.clone();
                Timeout::new(SUCCESS_BANNER_MS, move || success.set(false))
            });
            move || drop(handle)
        });
    }

    let edit_field = {
        let form = form.clone();
        let errors = errors.clone();
        move |field: FormField, value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.contains_key(&field) {
                let mut next = (*errors).clone();
                next.remove(&field);
                errors.set(next);
            }
        }
    };

    let on_input = |field: FormField| {
        let edit_field = edit_field.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            edit_field(field, value);
        })
    };
    let on_message_input = {
        let edit_field = edit_field.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlTextAreaElement>().value();
            edit_field(FormField::Message, value);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let success = success.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submit_error.set(None);

            let validation = form.validate();
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(FieldErrors::new());
            submitting.set(true);

            let payload = RelayRequest::new(&form);
            let form = form.clone();
            let submitting = submitting.clone();
            let success = success.clone();
            let submit_error = submit_error.clone();
            spawn_local(async move {
                let outcome = send_relay(payload).await;
                submitting.set(false);
                match outcome {
                    Ok(()) => {
                        form.set(ContactMessage::default());
                        success.set(true);
                    }
                    Err(message) => submit_error.set(Some(message)),
                }
            });
        })
    };

    let field_error = |field: FormField| -> Html {
        match errors.get(&field) {
            Some(message) => html! { <p class="field-error" role="alert">{*message}</p> },
            None => Html::default(),
        }
    };

    let contact_details = [
        ("Email", "harshshandilya1605@gmail.com"),
        ("Phone", "+91 9263372595"),
        ("Location", "Bhubaneswar, India"),
    ];
    let social_links = [
        ("LinkedIn", "https://www.linkedin.com/in/harsh-shandilya-b63b87358"),
        ("GitHub", "https://github.com/HarshShandilya16"),
        ("Twitter", "https://twitter.com/"),
        ("Instagram", "https://instagram.com/"),
    ];

    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <Reveal>
                    <header class="section-header">
                        <h2 class="section-title">{"Get In Touch"}</h2>
                        <p class="section-subtitle">{"Let's work together"}</p>
                    </header>
                </Reveal>

                <div class="contact-grid">
                    <Reveal direction={RevealDirection::Left} delay_ms={200}>
                        <div class="contact-info">
                            <h3>{"Let's discuss your project"}</h3>
                            <p class="contact-blurb">
                                {"I'm currently pursuing my Bachelor's degree at KIIT University \
                                  while actively working on exciting projects. Feel free to reach \
                                  out if you want to collaborate or discuss potential opportunities."}
                            </p>
                            <ul class="contact-details">
                                { for contact_details.iter().map(|(kind, value)| html! {
                                    <li>
                                        <span class="contact-detail-type">{*kind}{":"}</span>
                                        <span class="contact-detail-value">{*value}</span>
                                    </li>
                                }) }
                            </ul>
                            <div class="social-links">
                                <p class="social-title">{"Find me on:"}</p>
                                { for social_links.iter().map(|(name, url)| html! {
                                    <ExternalLink
                                        class="social-icon"
                                        href={*url}
                                        label={*name}
                                    />
                                }) }
                            </div>
                        </div>
                    </Reveal>

                    <Reveal direction={RevealDirection::Right} delay_ms={400}>
                        <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                            <h3 class="form-header">{"Send a Message"}</h3>

                            if *success {
                                <p class="banner banner-success" role="status">
                                    {"Message sent! I'll get back to you soon."}
                                </p>
                            }
                            if let Some(message) = submit_error.as_ref() {
                                <p class="banner banner-error" role="alert">
                                    {message.clone()}
                                </p>
                            }

                            <div class="form-field">
                                <label for="from_name">{"Your Name"}</label>
                                <input
                                    id="from_name"
                                    name="from_name"
                                    type="text"
                                    value={form.from_name.clone()}
                                    oninput={on_input(FormField::FromName)}
                                />
                                { field_error(FormField::FromName) }
                            </div>

                            <div class="form-field">
                                <label for="from_email">{"Your Email"}</label>
                                <input
                                    id="from_email"
                                    name="from_email"
                                    type="email"
                                    value={form.from_email.clone()}
                                    oninput={on_input(FormField::FromEmail)}
                                />
                                { field_error(FormField::FromEmail) }
                            </div>

                            <div class="form-field">
                                <label for="subject">{"Subject"}</label>
                                <input
                                    id="subject"
                                    name="subject"
                                    type="text"
                                    value={form.subject.clone()}
                                    oninput={on_input(FormField::Subject)}
                                />
                                { field_error(FormField::Subject) }
                            </div>

                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    value={form.message.clone()}
                                    oninput={on_message_input}
                                />
                                { field_error(FormField::Message) }
                            </div>

                            <button class="btn btn-primary" type="submit" disabled={*submitting}>
                                { if *submitting { "Sending…" } else { "Send Message" } }
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
