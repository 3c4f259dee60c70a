use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{self, Timings};
use crate::controllers::contact_form::{
    ContactForm, ContactMessage, Field, FormEvent, FormOutput, SubmitError, SubmitStatus,
};
use crate::hooks::{use_controller, ControllerDispatcher};

/// POST the message to the backend.
async fn send_contact_message(message: &ContactMessage) -> Result<(), SubmitError> {
    let request = Request::post(&config::contact_endpoint())
        .json(message)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

fn deliver(message: ContactMessage, form: ControllerDispatcher<ContactForm>) {
    spawn_local(async move {
        match send_contact_message(&message).await {
            Ok(()) => {
                log::info!("Contact message delivered");
                form.dispatch(FormEvent::Delivered);
            }
            Err(err) => form.dispatch(FormEvent::DeliveryFailed(err)),
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub office_lines: Vec<String>,
    pub email: String,
    pub phone: String,
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let on_output = Callback::from(
        |(output, form): (FormOutput, ControllerDispatcher<ContactForm>)| match output {
            FormOutput::Deliver(message) => deliver(message, form),
        },
    );
    let delivery = config::contact_delivery(&props.timings);
    let form = use_controller(move || ContactForm::new(delivery), on_output);

    let onsubmit = {
        let form = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormEvent::Submit);
        })
    };
    let on_input = |field: Field| {
        form.callback(move |e: InputEvent| {
            FormEvent::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_message_input = form.callback(|e: InputEvent| {
        FormEvent::SetField(
            Field::Message,
            e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        )
    });
    let send_another = form.callback(|_: MouseEvent| FormEvent::Reset);
    let retry = form.callback(|_: MouseEvent| FormEvent::Submit);

    let error_text = |field: Field| match form.error(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    };
    let field_class = |field: Field| classes!(form.error(field).is_some().then(|| "invalid"));
    let submitting = *form.status() == SubmitStatus::Submitting;

    let panel = if *form.status() == SubmitStatus::Submitted {
        html! {
            <div class="contact-success">
                <div class="success-icon">{ "✓" }</div>
                <h3>{ "Thank You!" }</h3>
                <p>{ "Your message has been sent successfully. We'll get back to you shortly." }</p>
                <button class="contact-button" onclick={send_another}>{ "Send Another Message" }</button>
            </div>
        }
    } else {
        let failure = match form.status() {
            SubmitStatus::Failed(reason) => html! {
                <div class="contact-failure" role="alert">
                    <p>{ format!("Your message could not be sent: {}", reason) }</p>
                    <button type="button" class="contact-button" onclick={retry}>{ "Try Again" }</button>
                </div>
            },
            _ => html! {},
        };
        html! {
            <form {onsubmit} novalidate=true>
                <h3>{ "Send Us a Message" }</h3>
                { failure }
                <div class="form-field">
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name *"
                        class={field_class(Field::Name)}
                        value={form.value(Field::Name).to_string()}
                        oninput={on_input(Field::Name)}
                    />
                    { error_text(Field::Name) }
                </div>
                <div class="form-field">
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email *"
                        class={field_class(Field::Email)}
                        value={form.value(Field::Email).to_string()}
                        oninput={on_input(Field::Email)}
                    />
                    { error_text(Field::Email) }
                </div>
                <div class="form-field">
                    <input
                        type="text"
                        name="company"
                        placeholder="Your Company"
                        value={form.value(Field::Company).to_string()}
                        oninput={on_input(Field::Company)}
                    />
                </div>
                <div class="form-field">
                    <textarea
                        name="message"
                        placeholder="Your Message *"
                        rows="5"
                        class={field_class(Field::Message)}
                        value={form.value(Field::Message).to_string()}
                        oninput={on_message_input}
                    />
                    { error_text(Field::Message) }
                </div>
                <button type="submit" class="contact-button wide" disabled={submitting}>
                    if submitting {
                        <span class="spinner"></span>
                        { "Sending..." }
                    } else {
                        { "Send Message ➤" }
                    }
                </button>
            </form>
        }
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        position: relative;
                        padding: 6rem 1rem;
                        overflow: hidden;
                    }
                    .contact-bg {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .contact-bg img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .contact-bg::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .contact-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .contact-header {
                        text-align: center;
                        color: #fff;
                        margin-bottom: 3rem;
                    }
                    .contact-header h2 {
                        font-size: 2.75rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .contact-header p {
                        font-size: 1.2rem;
                        color: #e5e7eb;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .contact-details {
                        color: #fff;
                    }
                    .contact-details h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                    .contact-details h4 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 0.5rem; }
                    .contact-details p { color: #d1d5db; }
                    .contact-card {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 8px;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    }
                    .contact-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1f2937;
                        margin-bottom: 1.5rem;
                    }
                    .form-field { margin-bottom: 1rem; }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        font: inherit;
                    }
                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #000;
                    }
                    .form-field .invalid { border-color: #ef4444; }
                    .field-error {
                        margin-top: 0.25rem;
                        font-size: 0.85rem;
                        color: #ef4444;
                    }
                    .contact-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 6px;
                        background: #000;
                        color: #fff;
                        cursor: pointer;
                    }
                    .contact-button:hover { background: #1f2937; }
                    .contact-button:disabled { opacity: 0.7; cursor: not-allowed; }
                    .contact-button.wide { width: 100%; padding: 1.25rem; }
                    .spinner {
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid #fff;
                        border-top-color: transparent;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .contact-success {
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .success-icon {
                        font-size: 3.5rem;
                        color: #22c55e;
                        margin-bottom: 1.5rem;
                    }
                    .contact-success p { color: #4b5563; margin-bottom: 1.5rem; }
                    .contact-failure {
                        margin-bottom: 1rem;
                        padding: 1rem;
                        border-radius: 6px;
                        background: #fef2f2;
                        color: #b91c1c;
                    }
                    .contact-failure p { margin-bottom: 0.75rem; }
                    @media (max-width: 768px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="contact-bg">
                <img src={props.background_image.clone()} alt="Office background" />
            </div>
            <div class="contact-inner">
                <div class="contact-header">
                    <h2>{ &props.title }</h2>
                    <p>{ &props.subtitle }</p>
                </div>
                <div class="contact-grid">
                    <div class="contact-details">
                        <h3>{ "Get in Touch" }</h3>
                        <p>{ "We're always looking for new challenges and exciting projects. Let's discuss how we can help your brand stand out in today's competitive landscape." }</p>
                        <h4>{ "Our Office" }</h4>
                        <p>
                            { for props.office_lines.iter().map(|line| html! { <>{ line }<br /></> }) }
                        </p>
                        <h4>{ "Contact Info" }</h4>
                        <p>
                            { &props.email }
                            <br />
                            { &props.phone }
                        </p>
                    </div>
                    <div class="contact-card">
                        { panel }
                    </div>
                </div>
            </div>
        </section>
    }
}
