use leptos::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::course_card::CourseCard;
use crate::components::empty_state::EmptyState;
use crate::components::load_more::LoadMoreButton;
use crate::components::search_input::SearchInput;
use crate::list_view::{unique_categories, FilterState};
use crate::models::PagePayload;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();
    let categories = unique_categories(&payload.courses);
    let courses = StoredValue::new(payload.courses);

    let (filter, set_filter) = signal(FilterState::new());

    view! {
        <div class="page catalog-page">
            <h2>"Courses"</h2>
            <p class="page-description">
                "Learn job-ready skills with curriculum built by industry mentors."
            </p>

            <SearchInput
                placeholder="Search courses..."
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
                let all = courses.get_value();
                let slice = state.slice(&all);

                if slice.is_empty() {
                    return view! {
                        <EmptyState
                            message="No courses found."
                            hint="Try a different keyword or category."
                        />
                    }
                    .into_any();
                }

                let cards: Vec<_> = slice
                    .items
                    .iter()
                    .map(|course| view! { <CourseCard course=(*course).clone() /> })
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
