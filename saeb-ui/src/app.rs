//! App Root Component

use leptos::*;

use crate::pages::Dashboard;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <main class="app">
            <Dashboard />
        </main>
    }
}
