use leptos::prelude::*;

use crate::components::footer::Footer;

/// Page chrome: the children in a content container with the footer below.
#[component]
pub fn Layout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="core-container">
            <div class="container">{children.map(|children| children())}</div>
            <div class="footer-container">
                <Footer />
            </div>
        </div>
    }
}
