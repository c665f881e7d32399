//! Loading and error placeholders

use leptos::*;

use saeb_dashboard::SectionKind;

/// Section loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" style="width: 2rem; height: 2rem" />
            <span>"Loading..."</span>
        </div>
    }
}

/// Generic failure text of a section
#[component]
pub fn SectionFailed(kind: SectionKind) -> impl IntoView {
    view! {
        <p class="error">{kind.failure_message()}</p>
    }
}
