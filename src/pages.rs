use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::components::SearchBox;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page-title">
                "Wine search" <img src="/wine.svg" alt="" class="page-title-icon" />
            </h1>
            <SearchBox />
        </main>
    }
}

#[derive(Params, Debug, PartialEq)]
struct LotDetailParams {
    lot_code: String,
}

/// Route target for result links. The detail view proper belongs to another
/// part of the inventory app; this page resolves the route and echoes the
/// requested lot.
#[component]
pub fn LotDetailPage() -> impl IntoView {
    let params = use_params::<LotDetailParams>();
    let lot_code = move || {
        params.with(|p| match p {
            Ok(params) => params.lot_code.clone(),
            Err(_) => "Unknown lot".to_string(),
        })
    };

    view! {
        <main class="page">
            <div class="lot-detail-card">
                <h1 class="lot-detail-code">{lot_code}</h1>
                <p class="lot-detail-note">"Lot detail"</p>
            </div>
        </main>
    }
}
