//! Dashboard header

use leptos::*;

use saeb_dashboard::view::render::{BRAND_LINES, MUNICIPALITY_TOTAL};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                {BRAND_LINES.iter().map(|line| view! { <div>{*line}</div> }).collect_view()}
            </div>
            <div class="panel">
                <div class="card-value">{MUNICIPALITY_TOTAL}</div>
                <div>"Municipios"</div>
            </div>
        </header>
    }
}
