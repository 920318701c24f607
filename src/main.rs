mod catalog;
mod config;
mod enquiry;
mod prices;
mod storage;
mod utils;
mod views;

use dioxus::prelude::*;

use crate::views::Storefront;

const FAVICON: Asset = asset!("/assets/logo.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        Storefront {}
    }
}
