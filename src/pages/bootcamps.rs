use leptos::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::empty_state::EmptyState;
use crate::components::load_more::LoadMoreButton;
use crate::components::search_input::SearchInput;
use crate::format::{format_date, format_rupiah, weekday_name};
use crate::list_view::{unique_categories, FilterState};
use crate::models::{Bootcamp, PagePayload};

#[component]
fn BootcampCard(bootcamp: Bootcamp) -> impl IntoView {
    let schedule = format!(
        "{}, {}",
        weekday_name(bootcamp.starts_on),
        format_date(bootcamp.starts_on)
    );

    view! {
        <article class="card bootcamp-card">
            {match bootcamp.thumbnail {
                Some(src) => view! { <img class="bootcamp-thumb" src=src alt=bootcamp.title.clone() /> }.into_any(),
                None => view! { <div class="bootcamp-thumb course-card-placeholder"></div> }.into_any(),
            }}
            <div class="course-card-body">
                <span class="badge">{bootcamp.category}</span>
                <strong class="course-card-title">{bootcamp.title}</strong>
                <p class="bootcamp-schedule">{schedule}</p>
                <p class="bootcamp-location">{bootcamp.location}</p>
            </div>
            <div class="course-card-footer">
                <span class="course-card-price">{format_rupiah(bootcamp.price)}</span>
            </div>
        </article>
    }
}

#[component]
pub fn BootcampsPage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();
    let categories = unique_categories(&payload.bootcamps);
    let bootcamps = StoredValue::new(payload.bootcamps);

    let (filter, set_filter) = signal(FilterState::new());

    view! {
        <div class="page catalog-page">
            <h2>"Bootcamps"</h2>
            <p class="page-description">
                "Intensive live batches with mentor guidance and a final project."
            </p>

            <SearchInput
                placeholder="Search bootcamps..."
                value=Signal::derive(move || filter.get().search_text.clone())
                on_input=move |text| set_filter.update(|f| f.set_search(text))
            />
            <CategoryTabs
                categories=categories
                selected=Signal::derive(move || filter.get().selected_category.clone())
                on_select=move |category| set_filter.update(|f| f.set_category(category))
            />

            {move || {
                let state = filter.get();
                let all = bootcamps.get_value();
                let slice = state.slice(&all);

                if slice.is_empty() {
                    return view! {
                        <EmptyState
                            message="No bootcamps found."
                            hint="Try a different keyword or category."
                        />
                    }
                    .into_any();
                }

                let cards: Vec<_> = slice
                    .items
                    .iter()
                    .map(|bootcamp| view! { <BootcampCard bootcamp=(*bootcamp).clone() /> })
                    .collect();
                let more = slice.has_more();

                view! {
                    <div class="card-grid">{cards}</div>
                    {more.then(|| view! {
                        <LoadMoreButton on_click=move |_| set_filter.update(|f| f.load_more()) />
                    })}
                }
                .into_any()
            }}
        </div>
    }
}
