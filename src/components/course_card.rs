use leptos::prelude::*;

use crate::format::format_rupiah;
use crate::models::Course;

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let detail_url = format!("/courses/{}", course.slug);
    let price = if course.price == 0 {
        "Free".to_string()
    } else {
        format_rupiah(course.price)
    };
    let lesson_count = course.lessons.len();
    let rating = course
        .average_rating
        .map(|r| format!("{r:.1} / 5"))
        .unwrap_or_else(|| "Not rated yet".to_string());

    view! {
        <article class="card course-card">
            <a href=detail_url.clone() class="course-card-media">
                {match course.thumbnail {
                    Some(src) => view! { <img src=src alt=course.title.clone() /> }.into_any(),
                    None => view! { <div class="course-card-placeholder"></div> }.into_any(),
                }}
            </a>
            <div class="course-card-body">
                <span class="badge">{course.category}</span>
                <a href=detail_url class="course-card-title">{course.title}</a>
                <p class="course-card-summary">{course.summary}</p>
            </div>
            <div class="course-card-footer">
                <span class="course-card-price">{price}</span>
                <span class="course-card-meta">
                    {format!("{lesson_count} lessons")}
                    " · "
                    {rating}
                </span>
            </div>
        </article>
    }
}
