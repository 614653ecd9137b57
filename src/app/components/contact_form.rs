//! Contact form. Nothing is sent anywhere: a complete form is
//! acknowledged with a notice and cleared.

use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::controller::UiEvent;

#[component]
pub fn ContactPanel(email: String) -> Element {
    let page = use_page();
    let form = page.contact();

    rsx! {
        p { class: "contact-lead",
            "Écrivez-moi à "
            a { href: "mailto:{email}", "{email}" }
            " ou via le formulaire."
        }
        form {
            id: "contact-form",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                page.dispatch(UiEvent::ContactSubmitted(page.contact()));
            },
            label { r#for: "email", "E-mail" }
            input {
                id: "email",
                name: "email",
                r#type: "email",
                value: "{form.email}",
                oninput: move |evt: FormEvent| page.set_contact_email(evt.value()),
            }
            label { r#for: "message", "Message" }
            textarea {
                id: "message",
                name: "message",
                rows: "5",
                value: "{form.message}",
                oninput: move |evt: FormEvent| page.set_contact_message(evt.value()),
            }
            button { class: "button-primary", r#type: "submit", "Envoyer" }
        }
    }
}
