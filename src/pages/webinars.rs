use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::load_more::LoadMoreButton;
use crate::components::search_input::SearchInput;
use crate::format::{format_date, format_rupiah, weekday_name};
use crate::list_view::FilterState;
use crate::models::{PagePayload, Webinar};

#[component]
fn WebinarRow(webinar: Webinar) -> impl IntoView {
    let time_range = match &webinar.ends_at {
        Some(end) => format!("{} - {} WIB", webinar.starts_at, end),
        None => format!("{} WIB", webinar.starts_at),
    };
    let price = if webinar.price == 0 {
        "Free".to_string()
    } else {
        format_rupiah(webinar.price)
    };

    view! {
        <article class="card webinar-row">
            <div class="webinar-date">
                <span class="webinar-day">{weekday_name(webinar.date)}</span>
                <span>{format_date(webinar.date)}</span>
                <span>{time_range}</span>
            </div>
            <div class="webinar-info">
                <strong class="course-card-title">{webinar.title}</strong>
                <p class="webinar-host">{format!("Hosted by {}", webinar.host)}</p>
            </div>
            <span class="course-card-price">{price}</span>
        </article>
    }
}

#[component]
pub fn WebinarsPage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();
    let webinars = StoredValue::new(payload.webinars);

    let (filter, set_filter) = signal(FilterState::new());

    view! {
        <div class="page catalog-page">
            <h2>"Webinars"</h2>
            <p class="page-description">
                "Live sessions with practitioners. Join from anywhere."
            </p>

            <SearchInput
                placeholder="Search webinars..."
                value=Signal::derive(move || filter.get().search_text.clone())
                on_input=move |text| set_filter.update(|f| f.set_search(text))
            />

            {move || {
                let state = filter.get();
                let all = webinars.get_value();
                let slice = state.slice(&all);

                if slice.is_empty() {
                    return view! {
                        <EmptyState message="No webinars found." hint="Try a different keyword." />
                    }
                    .into_any();
                }

                let rows: Vec<_> = slice
                    .items
                    .iter()
                    .map(|webinar| view! { <WebinarRow webinar=(*webinar).clone() /> })
                    .collect();
                let more = slice.has_more();

                view! {
                    <div class="webinar-list">{rows}</div>
                    {more.then(|| view! {
                        <LoadMoreButton on_click=move |_| set_filter.update(|f| f.load_more()) />
                    })}
                }
                .into_any()
            }}
        </div>
    }
}
