use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::models::{EnrollmentItem, PagePayload};

#[component]
fn EnrollmentRow(item: EnrollmentItem) -> impl IntoView {
    let progress = item.progress_percent.min(100);
    let width = format!("width: {progress}%");

    view! {
        <li class="enrollment-row">
            <div class="enrollment-head">
                <span class="enrollment-title">{item.title}</span>
                <span class="badge">{item.kind}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=width></div>
            </div>
            <span class="enrollment-progress">{format!("{progress}% complete")}</span>
        </li>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();

    let Some(user) = payload.user else {
        return view! {
            <div class="page profile-page">
                <EmptyState
                    message="You are not signed in."
                    hint="Sign in to see your profile and enrollments."
                />
            </div>
        }
        .into_any();
    };

    // Enrollments come from paid invoices; pending ones are not yet
    // accessible.
    let enrollments: Vec<EnrollmentItem> = payload
        .invoices
        .iter()
        .filter(|invoice| invoice.status == "paid")
        .flat_map(|invoice| invoice.items.iter().cloned())
        .collect();

    let rows: Vec<_> = enrollments
        .into_iter()
        .map(|item| view! { <EnrollmentRow item=item /> })
        .collect();

    view! {
        <div class="page profile-page">
            <h2>"Profile"</h2>

            <div class="card profile-card">
                {user.avatar.map(|src| view! { <img class="profile-avatar" src=src alt="" /> })}
                <div>
                    <strong class="profile-name">{user.name}</strong>
                    <p class="profile-email">{user.email}</p>
                    {user.occupation.map(|o| view! { <p class="profile-occupation">{o}</p> })}
                </div>
            </div>

            <h3>"My Classes"</h3>
            {if rows.is_empty() {
                view! {
                    <EmptyState
                        message="No enrollments yet."
                        hint="Your purchased classes will show up here."
                    />
                }
                .into_any()
            } else {
                view! { <ul class="enrollment-list">{rows}</ul> }.into_any()
            }}
        </div>
    }
    .into_any()
}
