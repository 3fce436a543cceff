use horizon_listing::PropertyListing;
use horizon_listing::data::copy;
use horizon_listing::icons::{ICON_MAIL, ICON_PHONE};
use horizon_listing::inquiry::{self, ContactInquiry, InquiryField};
use horizon_listing::nav::SectionId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::debug;

use super::Icon;

#[component]
pub fn ContactSection(listing: &'static PropertyListing) -> impl IntoView {
    let draft = RwSignal::new(ContactInquiry::default());

    // No delivery channel: keep the browser from navigating and drop it
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = draft.with_untracked(inquiry::submit);
        debug!("contact form submit: {outcome:?}");
    };

    view! {
        <section id=SectionId::Contact.as_str() class="contact">
            <div class="container contact-grid">
                <div>
                    <h2 class="section-title">{copy::CONTACT_TITLE}</h2>
                    <p class="contact-intro">{copy::CONTACT_INTRO}</p>

                    <div class="contact-lines">
                        <ContactLine icon=ICON_PHONE caption=copy::CALL_US value=listing.contact.phone.as_str() />
                        <ContactLine icon=ICON_MAIL caption=copy::EMAIL_US value=listing.contact.email.as_str() />
                    </div>
                </div>

                <form class="inquiry-form" on:submit=on_submit>
                    <div class="form-row">
                        <FormField field=InquiryField::LastName draft=draft />
                        <FormField field=InquiryField::FirstName draft=draft />
                    </div>
                    <FormField field=InquiryField::Email draft=draft />
                    <FormField field=InquiryField::Message draft=draft />
                    <button type="submit" class="form-submit">{copy::SUBMIT}</button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn ContactLine(icon: &'static str, caption: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="contact-line">
            <div class="contact-badge">
                <Icon path=icon size="20" />
            </div>
            <div>
                <p class="contact-caption">{caption}</p>
                <p class="contact-value">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn FormField(field: InquiryField, draft: RwSignal<ContactInquiry>) -> impl IntoView {
    let current = move || draft.with(|d| d.get(field).to_string());

    let control = match field.input_type() {
        Some(kind) => view! {
            <input
                type=kind
                class="form-input"
                prop:value=current
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        None => view! {
            <textarea
                rows="4"
                class="form-input form-textarea"
                prop:value=current
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="form-label">{field.label()}</label>
            {control}
        </div>
    }
}
