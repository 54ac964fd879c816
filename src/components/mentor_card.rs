use leptos::prelude::*;

use crate::models::Mentor;

#[component]
pub fn MentorCard(mentor: Mentor) -> impl IntoView {
    let role_line = if mentor.company.is_empty() {
        mentor.role
    } else {
        format!("{} at {}", mentor.role, mentor.company)
    };

    view! {
        <div class="card mentor-card">
            {match mentor.photo {
                Some(src) => view! { <img class="mentor-photo" src=src alt=mentor.name.clone() /> }.into_any(),
                None => view! { <div class="mentor-photo mentor-photo-placeholder"></div> }.into_any(),
            }}
            <strong class="mentor-name">{mentor.name}</strong>
            <span class="mentor-role">{role_line}</span>
        </div>
    }
}
