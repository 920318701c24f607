/// Point the page at `href`. Hands the generated `mailto:` draft to the
/// platform's mail-client handling.
pub fn navigate_to(href: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!("no window, cannot navigate to {href}");
        return;
    };
    if let Err(err) = window.location().set_href(href) {
        tracing::warn!("navigation to {href} failed: {err:?}");
    }
}
