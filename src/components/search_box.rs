use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::config::use_search_config;
use crate::search::{
    FetchSearchClient, LotSummary, QueryAction, SearchClient, SearchSession, SearchState,
};

/// The wine-lot search widget: a text input that queries the search
/// endpoint on every keystroke and lists the matching lots as links into
/// the detail view.
///
/// Every keystroke supersedes the one before it. The session cancels the
/// outstanding request before issuing the next, so at most one request is
/// in flight and only the newest response ever reaches the result list.
#[component]
pub fn SearchBox(
    /// Base URL of the search endpoint. Falls back to the injected
    /// [`SearchConfig`](crate::config::SearchConfig).
    #[prop(optional)]
    endpoint: Option<String>,
    /// Data-fetching collaborator. Tests and embedders inject their own.
    #[prop(optional)]
    client: Option<Rc<dyn SearchClient>>,
) -> impl IntoView {
    let endpoint = endpoint.unwrap_or_else(|| use_search_config().endpoint);
    let client: Rc<dyn SearchClient> =
        client.unwrap_or_else(|| Rc::new(FetchSearchClient::new(endpoint)));

    let state = RwSignal::new(SearchState::default());
    let session = StoredValue::new_local(SearchSession::new(client));

    // Outstanding work must not survive the widget.
    on_cleanup(move || session.with_value(|s| s.cancel_inflight()));

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        let action = state.write().on_query_change(&text);
        match action {
            QueryAction::SkipRequest => session.with_value(|s| s.cancel_inflight()),
            QueryAction::Dispatch => {
                let request = session.with_value(|s| s.dispatch(&text));
                spawn_local(async move {
                    let outcome = request.await;
                    state.update(|s| s.apply(outcome));
                });
            }
        }
    };

    view! {
        <div class="search-box">
            <input
                type="search"
                class="search-input"
                placeholder="Search by lot code and description..."
                prop:value=move || state.with(|s| s.query.clone())
                aria-busy=move || state.with(|s| s.loading).to_string()
                on:input=on_input
            />
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| {
                        view! { <p class="search-error">"Search failed: " {message}</p> }
                    })
            }}
            <Show when=move || state.with(|s| s.has_results()) fallback=|| ()>
                <ul class="lot-list" aria-label="matching lots">
                    {move || {
                        with_dividers(state.with(|s| s.results.clone()))
                            .into_iter()
                            .map(lot_row)
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

struct LotRow {
    lot: LotSummary,
    divided: bool,
}

/// Pairs each result with whether a separator follows it: between
/// consecutive rows only, never after the last.
fn with_dividers(results: Vec<LotSummary>) -> Vec<LotRow> {
    let count = results.len();
    results
        .into_iter()
        .enumerate()
        .map(|(index, lot)| LotRow {
            lot,
            divided: index + 1 != count,
        })
        .collect()
}

fn detail_href(lot_code: &str) -> String {
    format!("/detail/{}", urlencoding::encode(lot_code))
}

fn lot_row(row: LotRow) -> impl IntoView {
    let LotRow { lot, divided } = row;
    let href = detail_href(&lot.lot_code);
    view! {
        <li>
            <A href=move || href.clone()>
                <div class="lot-row">
                    <div class="lot-identity">
                        <p class="lot-code">{lot.lot_code}</p>
                        <p class="lot-description">{lot.description}</p>
                    </div>
                    <div class="lot-meta">
                        <p>{format_volume(lot.volume)}</p>
                        <p>{lot.tank_code}</p>
                    </div>
                </div>
            </A>
            {divided.then(|| view! { <hr class="lot-divider" /> })}
        </li>
    }
}

/// Formats a lot volume the way the inventory UI shows it: thousands
/// separators, one decimal at most, trailing `.0` dropped.
fn format_volume(volume: f64) -> String {
    let text = format!("{volume:.1}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let digits = int_part.strip_prefix('-').unwrap_or(int_part);
    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    if int_part.starts_with('-') {
        grouped.push('-');
    }
    for (offset, ch) in digits.chars().enumerate() {
        if offset != 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part == "0" {
        grouped
    } else {
        format!("{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(code: &str) -> LotSummary {
        LotSummary {
            lot_code: code.to_string(),
            description: format!("{code} description"),
            volume: 2000.0,
            tank_code: "T-9".to_string(),
        }
    }

    #[test]
    fn dividers_fall_between_rows_only() {
        let rows = with_dividers(vec![lot("A"), lot("B"), lot("C")]);

        let codes: Vec<&str> = rows.iter().map(|r| r.lot.lot_code.as_str()).collect();
        assert_eq!(codes, ["A", "B", "C"]);
        let divided: Vec<bool> = rows.iter().map(|r| r.divided).collect();
        assert_eq!(divided, [true, true, false]);
    }

    #[test]
    fn single_row_has_no_divider() {
        let rows = with_dividers(vec![lot("only")]);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].divided);
    }

    #[test]
    fn no_rows_for_empty_results() {
        assert!(with_dividers(Vec::new()).is_empty());
    }

    #[test]
    fn detail_links_encode_the_lot_code() {
        assert_eq!(detail_href("2021PN-03"), "/detail/2021PN-03");
        assert_eq!(detail_href("LOT 7/A"), "/detail/LOT%207%2FA");
    }

    #[test]
    fn volumes_render_with_thousands_separators() {
        assert_eq!(format_volume(4542.7), "4,542.7");
        assert_eq!(format_volume(950.0), "950");
        assert_eq!(format_volume(1_200_000.0), "1,200,000");
        assert_eq!(format_volume(0.5), "0.5");
    }
}
