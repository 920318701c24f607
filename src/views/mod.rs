//! Web interface components for the JS PHARMAS storefront.
//!
//! This module contains the Dioxus components that make up the page:
//! the single-page storefront (header, hero, catalog, contact, footer)
//! and the enquiry form it embeds.

/// Single-page storefront component
mod storefront;
pub use storefront::Storefront;

/// Contact enquiry form component
mod enquiry_form;
pub use enquiry_form::EnquiryForm;
