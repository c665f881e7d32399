//! Dashboard Page
//!
//! Starts the three section loads on mount and renders each section from its
//! own status. Loads still in flight when the page unmounts are aborted.

use leptos::*;

use saeb_dashboard::sections::{PieBreakdowns, WeeklyOverview};
use saeb_dashboard::view::{DashboardCard, PieCascade};
use saeb_dashboard::{
    cancellable, load_section, Action, FetchStatus, SectionKind, StatusDimension, WeekWindow,
};

use crate::api::GlooStatsClient;
use crate::components::{
    BarChart, CityList, Header, LineChart, Loading, PieChart, SectionFailed, StatCard,
};
use crate::state::{use_global_state, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    start_loads(state, GlooStatsClient::from_storage(), WeekWindow::now());

    view! {
        <div class="dashboard">
            <Header />
            <CardsSection />
            <WeeklySection />
            <PiesSection />
        </div>
    }
}

/// Issue every section load concurrently; each settles on its own
fn start_loads(state: GlobalState, client: GlooStatsClient, window: WeekWindow) {
    for kind in SectionKind::ALL {
        state.dispatch(Action::Started(kind));

        let client = client.clone();
        let (load, guard) =
            cancellable(async move { load_section(kind, &client, window).await });

        spawn_local(async move {
            // An aborted load leaves the state untouched
            if let Some(result) = load.await {
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("{}: {}", e, e.source).into());
                }
                state.dispatch(Action::settled(result));
            }
        });

        on_cleanup(move || guard.cancel());
    }
}

#[component]
fn CardsSection() -> impl IntoView {
    let state = use_global_state();
    let cards = create_memo(move |_| state.dashboard.with(|s| s.cards.clone()));

    view! {
        <section class="cards">
            {move || match cards.get() {
                FetchStatus::Idle => view! {}.into_view(),
                FetchStatus::Loading => view! { <Loading /> }.into_view(),
                FetchStatus::Failed(_) => {
                    view! { <SectionFailed kind=SectionKind::Cards /> }.into_view()
                }
                FetchStatus::Loaded(cards) => cards_view(cards),
            }}
        </section>
    }
}

fn cards_view(cards: Vec<DashboardCard>) -> View {
    cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| view! { <StatCard index=index card=card /> })
        .collect_view()
}

#[component]
fn WeeklySection() -> impl IntoView {
    let state = use_global_state();
    let weekly = create_memo(move |_| state.dashboard.with(|s| s.weekly.clone()));

    view! {
        <section>
            {move || match weekly.get() {
                FetchStatus::Idle => view! {}.into_view(),
                FetchStatus::Loading => view! { <Loading /> }.into_view(),
                FetchStatus::Failed(_) => {
                    view! { <SectionFailed kind=SectionKind::Weekly /> }.into_view()
                }
                FetchStatus::Loaded(overview) => weekly_view(overview),
            }}
        </section>
    }
}

fn weekly_view(overview: WeeklyOverview) -> View {
    let WeeklyOverview {
        schedule,
        top_cities,
        monthly,
        ..
    } = overview;

    view! {
        <div class="weekly">
            <div class="panel">
                <CityList title="Visitas da Semana" cities=schedule.visits />
            </div>
            <div class="panel">
                <h3>"Cidades com maior produção de CINs"</h3>
                <BarChart cities=top_cities />
            </div>
            <div class="panel">
                <CityList title="Instalações da Semana" cities=schedule.installations />
            </div>
            <div class="panel">
                <h3>"Produção CIN em todo lugar"</h3>
                <LineChart points=monthly />
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn PiesSection() -> impl IntoView {
    let state = use_global_state();
    let pies = create_memo(move |_| state.dashboard.with(|s| s.pies.clone()));
    let cascade = create_memo(move |_| state.dashboard.with(|s| s.cascade));

    view! {
        <section class="panel">
            <h2>"Status das Visitas"</h2>
            {move || match pies.get() {
                FetchStatus::Idle => view! {}.into_view(),
                FetchStatus::Loading => view! { <Loading /> }.into_view(),
                FetchStatus::Failed(_) => {
                    view! { <SectionFailed kind=SectionKind::Pies /> }.into_view()
                }
                FetchStatus::Loaded(data) => pies_view(&data, cascade.get()),
            }}
        </section>
    }
}

fn pies_view(data: &PieBreakdowns, cascade: PieCascade) -> View {
    let selected = cascade.selection();

    view! {
        <div class="pies">
            {cascade
                .visible_tiers()
                .into_iter()
                .map(|tier: StatusDimension| {
                    let breakdown = data.get(tier).clone();
                    let cities = selected
                        .filter(|s| s.tier == tier)
                        .and_then(|s| breakdown.bucket(s.slot))
                        .map(|bucket| bucket.cities.clone());

                    view! {
                        <div class="tier">
                            <PieChart breakdown=breakdown />
                            {cities.map(|cities| view! { <CityList cities=cities /> })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
