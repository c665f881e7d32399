//! Percentage Card Component
//!
//! Shows a title and percentage; clicking toggles the municipality list.

use leptos::*;

use saeb_dashboard::view::DashboardCard;
use saeb_dashboard::Action;

use super::CityList;
use crate::state::use_global_state;

#[component]
pub fn StatCard(
    /// Position of the card, used to address toggles
    index: usize,
    card: DashboardCard,
) -> impl IntoView {
    let state = use_global_state();
    let cities = card.visible_cities().map(|cities| cities.to_vec());
    let marker = if card.expanded { "▾" } else { "▸" };

    view! {
        <div class="card" on:click=move |_| state.dispatch(Action::ToggleCard(index))>
            <div class="card-title">{marker}" "{card.title()}</div>
            <div class="card-value">{card.percentage().to_string()}</div>
            {cities.map(|cities| view! { <CityList cities=cities /> })}
        </div>
    }
}
