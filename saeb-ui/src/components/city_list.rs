//! Municipality name list

use leptos::*;

use saeb_dashboard::CityStat;

/// Titled list of municipality names, in input order
#[component]
pub fn CityList(
    #[prop(into, optional)]
    title: Option<String>,
    cities: Vec<CityStat>,
) -> impl IntoView {
    view! {
        <div class="city-list">
            {title.map(|t| view! { <h3>{t}</h3> })}
            <ul>
                {cities
                    .into_iter()
                    .map(|city| view! { <li>{city.nome_municipio}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
