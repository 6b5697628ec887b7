//! Contact section: the enquiry form and its feedback messages.
//!
//! The form's decisions live in [`behavior::ContactForm`]; this component
//! mirrors its snapshots into a signal and forwards user input to it.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use behavior::{ContactForm, Field, FormSnapshot, SubmitRejected, SubmitStatus, ValidationError};
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Glyph;
use crate::components::section_header::SectionHeader;
use crate::config::SiteConfig;
use crate::content::Icon;
use crate::net::api::HttpDelivery;
use crate::util::timers::BrowserScheduler;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you shortly.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

type SiteForm = ContactForm<BrowserScheduler, HttpDelivery>;

/// Dismissible message shown after an attempt settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub class: &'static str,
    pub message: &'static str,
}

pub fn feedback(status: SubmitStatus) -> Option<Feedback> {
    match status {
        SubmitStatus::Success => Some(Feedback {
            class: "feedback-message feedback-message--success",
            message: SUCCESS_MESSAGE,
        }),
        SubmitStatus::Error => Some(Feedback { class: "feedback-message feedback-message--error", message: ERROR_MESSAGE }),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}

pub fn submit_label(status: SubmitStatus) -> &'static str {
    if status == SubmitStatus::Submitting { "Sending..." } else { "Send Message" }
}

fn spawn_delivery(task: LocalBoxFuture<'static, ()>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    futures::executor::block_on(task);
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let delivery = HttpDelivery::new(config.contact_endpoint, config.submit_timeout);
    let site_form: SiteForm = ContactForm::new(BrowserScheduler, delivery, config.reset_after);

    let snapshot = RwSignal::new(site_form.snapshot());
    let hint = RwSignal::new(None::<ValidationError>);
    site_form.subscribe(move |snap| snapshot.set(snap.clone()));
    let form = StoredValue::new_local(site_form);

    // Leaving the page orphans any in-flight attempt and its timer.
    on_cleanup(move || {
        form.try_with_value(SiteForm::reset);
    });

    let on_input = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            hint.set(None);
            form.with_value(|f| f.set_field(field, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_value(SiteForm::submit) {
            Ok(task) => spawn_delivery(task),
            Err(SubmitRejected::Invalid(err)) => hint.set(Some(err)),
            Err(SubmitRejected::InFlight) => log::debug!("contact: submit ignored while in flight"),
        }
    };

    let on_dismiss = move |_| {
        form.with_value(SiteForm::dismiss);
    };

    let field_value = move |field: Field| move || snapshot.with(|s| s.fields.get(field).to_owned());

    view! {
        <AnimatedSection id="contact" labelled_by="contact-heading" class="section section--navy">
            <div class="container">
                <SectionHeader
                    title="Get in Touch"
                    id="contact-heading"
                    subtitle="We're here to help. Reach out to us for a consultation."
                />
                <div class="contact">
                    <form class="contact-form" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Your Name"
                            required
                            class="contact-form__input"
                            prop:value=field_value(Field::Name)
                            on:input=on_input(Field::Name)
                        />
                        <input
                            type="email"
                            placeholder="Your Email"
                            required
                            class="contact-form__input"
                            prop:value=field_value(Field::Email)
                            on:input=on_input(Field::Email)
                        />
                        <input
                            type="text"
                            placeholder="Subject"
                            required
                            class="contact-form__input"
                            prop:value=field_value(Field::Subject)
                            on:input=on_input(Field::Subject)
                        />
                        <textarea
                            placeholder="Your Message"
                            rows="5"
                            required
                            class="contact-form__input"
                            prop:value=field_value(Field::Message)
                            on:input=on_input(Field::Message)
                        ></textarea>
                        {move || {
                            hint.get().map(|err| view! { <p class="contact-form__hint" role="alert">{err.to_string()}</p> })
                        }}
                        <div class="contact-form__actions">
                            <button
                                type="submit"
                                class="button button--gold interactive-element"
                                disabled=move || snapshot.with(FormSnapshot::submit_disabled)
                            >
                                {move || submit_label(snapshot.with(|s| s.status))}
                            </button>
                        </div>
                    </form>
                    {move || {
                        feedback(snapshot.with(|s| s.status))
                            .map(|fb| {
                                view! {
                                    <div class=fb.class role="status">
                                        <span>{fb.message}</span>
                                        <button type="button" aria-label="Dismiss message" on:click=on_dismiss>
                                            <Glyph icon=Icon::Close class="feedback-message__close"/>
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </AnimatedSection>
    }
}
