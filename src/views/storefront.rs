use chrono::Datelike;
use dioxus::prelude::*;
use gloo::dialogs::{alert, confirm, prompt};

use crate::catalog;
use crate::config::{self, CONTACTS};
use crate::prices::PriceBook;
use crate::storage;
use crate::views::EnquiryForm;

const LOGO: Asset = asset!("/assets/logo.svg");

/// The whole page. Owns the price book and the volatile session flags;
/// every other section renders from compiled-in configuration.
///
/// Admin mode only unlocks the editing controls in this page. The passcode
/// lives in the bundle and resets on reload, so it gates presentation, not
/// access.
#[component]
pub fn Storefront() -> Element {
    let mut prices = use_signal(storage::load_price_book);
    let mut show_prices = use_signal(|| false);
    let mut is_admin = use_signal(|| false);
    let mut editing = use_signal(|| None::<String>);
    let mut draft = use_signal(String::new);

    // Mirror every book change to localStorage, full overwrite.
    use_effect(move || {
        storage::save_price_book(&prices.read());
    });

    let enter_admin = move |_| {
        // A dismissed prompt is not an attempt.
        if let Some(attempt) = prompt("Enter admin passcode to edit prices", None) {
            if config::passcode_matches(&attempt) {
                is_admin.set(true);
                alert("Admin mode enabled — you can now edit prices.");
            } else {
                alert("Incorrect passcode.");
            }
        }
    };

    let reset_prices = move |_| {
        if confirm("Reset all saved prices to empty?") {
            prices.set(PriceBook::default());
        }
    };

    let year = chrono::Local::now().year();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "header-inner",
                    div { class: "brand",
                        img { class: "logo-img", src: LOGO, alt: "JS PHARMAS logo" }
                        div {
                            h1 { "{CONTACTS.name}" }
                            p { class: "tagline", "Pharmaceuticals — Trusted. Reliable. Local." }
                        }
                    }
                    nav { class: "header-nav",
                        a { href: "#products", "Products" }
                        a { href: "#contact", "Contact" }
                        button {
                            class: "button",
                            title: "Toggle public price visibility",
                            onclick: move |_| {
                                let shown = show_prices();
                                show_prices.set(!shown);
                            },
                            if show_prices() { "Hide Prices" } else { "Show Prices" }
                        }
                        button { class: "button primary", onclick: enter_admin, "Admin" }
                    }
                }
            }

            main {
                section { class: "hero",
                    div { class: "hero-inner",
                        div { class: "hero-copy",
                            h2 { "Reliable pharmaceutical products for your community" }
                            p {
                                "JS PHARMAS provides quality medicines and healthcare products "
                                "with a focus on safety and local availability. Contact us for "
                                "wholesale or pharmacy stocking."
                            }
                            div { class: "hero-actions",
                                a { class: "button primary", href: CONTACTS.tel_href(), "Call Us" }
                                a { class: "button", href: CONTACTS.mailto_href(), "Email" }
                            }
                        }
                        div { class: "quick-contact",
                            h3 { "Quick Contact" }
                            p {
                                strong { "Phone: " }
                                a { href: CONTACTS.tel_href(), "{CONTACTS.phone}" }
                            }
                            p {
                                strong { "Email: " }
                                a { href: CONTACTS.mailto_href(), "{CONTACTS.email}" }
                            }
                            p {
                                strong { "Address: " }
                                "{CONTACTS.address}"
                            }
                        }
                    }
                }

                section { id: "products", class: "catalog",
                    div { class: "catalog-header",
                        h2 { "Products" }
                        p { class: "catalog-note",
                            "Prices are hidden publicly. Admin can add and edit prices."
                        }
                    }
                    div { class: "product-grid",
                        for product in catalog::PRODUCTS {
                            div { key: "{product.id}", class: "product-card",
                                div { class: "product-info",
                                    h3 { "{product.name}" }
                                    p { "{product.description}" }
                                }
                                div { class: "product-footer",
                                    div { class: "price",
                                        span { class: "price-label", "Price:" }
                                        span { class: "price-value",
                                            {
                                                prices
                                                    .read()
                                                    .display_price(product.id, show_prices())
                                                    .unwrap_or_else(|| "—".to_string())
                                            }
                                        }
                                    }
                                    if is_admin() {
                                        button {
                                            class: "button small",
                                            onclick: move |_| {
                                                let current = prices
                                                    .read()
                                                    .get(product.id)
                                                    .unwrap_or_default()
                                                    .to_string();
                                                draft.set(current);
                                                editing.set(Some(product.id.to_string()));
                                            },
                                            "Edit Price"
                                        }
                                    } else {
                                        button {
                                            class: "button small",
                                            onclick: move |_| {
                                                alert(
                                                    "To order or see prices, please contact us using the contact information.",
                                                )
                                            },
                                            "Enquire"
                                        }
                                    }
                                }
                                if is_admin() && editing.read().as_deref() == Some(product.id) {
                                    div { class: "price-editor",
                                        label { r#for: "price-{product.id}",
                                            "Enter numeric price (no currency):"
                                        }
                                        div { class: "price-editor-row",
                                            input {
                                                id: "price-{product.id}",
                                                r#type: "text",
                                                value: "{draft}",
                                                oninput: move |event| draft.set(event.value()),
                                            }
                                            button {
                                                class: "button small save",
                                                onclick: move |_| {
                                                    let value = draft.read().clone();
                                                    prices.write().set(product.id, &value);
                                                    editing.set(None);
                                                },
                                                "Save"
                                            }
                                            button {
                                                class: "button small",
                                                onclick: move |_| editing.set(None),
                                                "Cancel"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if is_admin() {
                        div { class: "admin-panel",
                            button {
                                class: "button primary",
                                onclick: move |_| show_prices.set(true),
                                "Show Prices Publicly"
                            }
                            button {
                                class: "button",
                                onclick: move |_| show_prices.set(false),
                                "Hide Prices Publicly"
                            }
                            button { class: "button", onclick: reset_prices, "Reset Saved Prices" }
                        }
                    }
                }

                section { id: "contact", class: "contact",
                    div { class: "contact-inner",
                        div { class: "contact-details",
                            h2 { "Contact Us" }
                            p {
                                "For orders, wholesale inquiries, or distribution requests, "
                                "reach out using the form or contact details."
                            }
                            div { class: "contact-lines",
                                div {
                                    strong { "Phone: " }
                                    a { href: CONTACTS.tel_href(), "{CONTACTS.phone}" }
                                }
                                div {
                                    strong { "Email: " }
                                    a { href: CONTACTS.mailto_href(), "{CONTACTS.email}" }
                                }
                                div {
                                    strong { "Address: " }
                                    "{CONTACTS.address}"
                                }
                            }
                        }
                        EnquiryForm {}
                    }
                }
            }

            footer { class: "app-footer",
                div { class: "footer-inner",
                    div { class: "footer-brand",
                        img { class: "footer-logo", src: LOGO, alt: "logo" }
                        div {
                            div { class: "footer-name", "{CONTACTS.name}" }
                            div { class: "footer-address", "{CONTACTS.address}" }
                        }
                    }
                    div { class: "footer-copyright",
                        "© {year} {CONTACTS.name}. All rights reserved."
                    }
                }
            }
        }
    }
}
