use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::bridge;
use crate::components::empty_state::EmptyState;
use crate::components::rating_dialog::RatingDialog;
use crate::components::video_embed::VideoEmbed;
use crate::format::format_rupiah;
use crate::models::{Course, PagePayload};

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();
    let courses = StoredValue::new(payload.courses);
    let params = use_params_map();

    let course = move || -> Option<Course> {
        let slug = params.read().get("slug")?;
        courses.get_value().into_iter().find(|c| c.slug == slug)
    };

    // Lessons completed during this visit, on top of the server-supplied
    // flags.
    let (completed, set_completed) = signal::<HashSet<u32>>(HashSet::new());
    let (show_rating, set_show_rating) = signal(false);

    let mark_complete = move |lesson_id: u32| {
        spawn_local(async move {
            match bridge::complete_lesson(lesson_id).await {
                Ok(()) => set_completed.update(|done| {
                    done.insert(lesson_id);
                }),
                Err(e) => log::error!("lesson {lesson_id} completion failed: {e}"),
            }
        });
    };

    view! {
        <div class="page course-detail-page">
            {move || match course() {
                None => view! {
                    <EmptyState
                        message="Course not found."
                        hint="It may have been unpublished."
                    />
                }
                .into_any(),
                Some(course) => {
                    let price = if course.price == 0 {
                        "Free".to_string()
                    } else {
                        format_rupiah(course.price)
                    };
                    let rating_line = course
                        .average_rating
                        .map(|r| format!("{r:.1} / 5"))
                        .unwrap_or_else(|| "Not rated yet".to_string());
                    let course_id = course.id;

                    let lessons: Vec<_> = course
                        .lessons
                        .iter()
                        .map(|lesson| {
                            let lesson_id = lesson.id;
                            let already_done = lesson.completed;
                            let is_done = move || {
                                already_done || completed.get().contains(&lesson_id)
                            };
                            view! {
                                <li class="lesson-row" class:done=is_done>
                                    <span class="lesson-title">{lesson.title.clone()}</span>
                                    <span class="lesson-duration">
                                        {format!("{} min", lesson.duration_minutes)}
                                    </span>
                                    {move || {
                                        if is_done() {
                                            view! { <span class="lesson-check">"\u{2713} Done"</span> }
                                                .into_any()
                                        } else {
                                            view! {
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| mark_complete(lesson_id)
                                                >
                                                    "Mark complete"
                                                </button>
                                            }
                                            .into_any()
                                        }
                                    }}
                                </li>
                            }
                        })
                        .collect();

                    view! {
                        <span class="badge">{course.category.clone()}</span>
                        <h2>{course.title.clone()}</h2>
                        <p class="page-description">{course.summary.clone()}</p>

                        <VideoEmbed source_url=course.video_url.clone() title=course.title.clone() />

                        <div class="course-detail-meta">
                            <span class="course-card-price">{price}</span>
                            <span class="course-card-meta">{rating_line}</span>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| set_show_rating.set(true)
                            >
                                "Rate this course"
                            </button>
                        </div>

                        <h3>"Lessons"</h3>
                        {if lessons.is_empty() {
                            view! { <EmptyState message="No lessons published yet." /> }.into_any()
                        } else {
                            view! { <ul class="lesson-list">{lessons}</ul> }.into_any()
                        }}

                        <RatingDialog
                            course_id=course_id
                            open=show_rating
                            on_close=move |_| set_show_rating.set(false)
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
