use leptos::prelude::*;

/// Top bar: brand link back to the search screen.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="site-brand">
                <img class="site-brand-icon" src="/wine.svg" alt="" />
                <span>"Vintry"</span>
            </a>
        </header>
    }
}
