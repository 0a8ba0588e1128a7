use crate::components::Header;
use crate::config::{provide_search_config, SearchConfig};
use crate::pages::{HomePage, LotDetailPage};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/output.css" />
                <link rel="shortcut icon" type="image/svg+xml" href="/wine.svg" />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_search_config(SearchConfig::default());

    view! {
        <Title text="Wine search" />
        <Router>
            <div class="app-shell">
                <Header />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/detail/:lot_code") view=LotDetailPage />
                </Routes>
            </div>
        </Router>
    }
}
