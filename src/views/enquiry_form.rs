use dioxus::prelude::*;

use crate::config::CONTACTS;
use crate::enquiry::Enquiry;
use crate::utils;

/// Collects a name, email and message and opens the visitor's mail client
/// with a pre-filled draft addressed to the shop. No server round trip.
#[component]
pub fn EnquiryForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let send = move |event: FormEvent| {
        event.prevent_default();
        let enquiry = Enquiry {
            name: name(),
            email: email(),
            message: message(),
        };
        utils::navigate_to(&enquiry.mailto_href(CONTACTS.email));
    };

    rsx! {
        form { class: "enquiry-form", onsubmit: send,
            div { class: "form-field",
                label { r#for: "enquiry-name", "Your name" }
                input {
                    id: "enquiry-name",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    oninput: move |event| name.set(event.value()),
                }
            }
            div { class: "form-field",
                label { r#for: "enquiry-email", "Email" }
                input {
                    id: "enquiry-email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
            }
            div { class: "form-field",
                label { r#for: "enquiry-message", "Message" }
                textarea {
                    id: "enquiry-message",
                    rows: "4",
                    required: true,
                    value: "{message}",
                    oninput: move |event| message.set(event.value()),
                }
            }
            div { class: "form-actions",
                button { class: "button primary", r#type: "submit", "Send Message" }
                div { class: "form-note",
                    "Or call us: "
                    a { href: CONTACTS.tel_href(), "{CONTACTS.phone}" }
                }
            }
        }
    }
}
