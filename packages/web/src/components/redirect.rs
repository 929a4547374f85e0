//! Declarative redirect component

use dioxus::prelude::*;

use crate::routes::Route;

/// Replaces the current location with `to` when rendered.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();

    use_hook(move || {
        navigator.replace(to);
    });

    VNode::empty()
}
