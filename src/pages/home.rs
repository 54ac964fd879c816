use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::mentor_card::MentorCard;
use crate::components::review_board::ReviewBoard;
use crate::models::PagePayload;

#[component]
pub fn HomePage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();
    let mentors = payload.mentors;
    let gallery = payload.gallery;
    let reviews = payload.reviews;

    let mentor_cards: Vec<_> = mentors
        .into_iter()
        .map(|mentor| view! { <MentorCard mentor=mentor /> })
        .collect();

    view! {
        <div class="page home-page">
            <style>{include_str!("home.css")}</style>

            <section class="hero">
                <h2>"Upgrade your skills, land the career you want"</h2>
                <p class="page-description">
                    "Courses, bootcamps, and webinars built with industry mentors. \
                     Learn at your own pace and earn a certificate."
                </p>
                <div class="hero-actions">
                    <a href="/courses" class="btn btn-primary">"Browse Courses"</a>
                    <a href="/bootcamps" class="btn btn-secondary">"See Bootcamps"</a>
                </div>
            </section>

            <section class="home-section">
                <h3>"Learn from Practitioners"</h3>
                {if mentor_cards.is_empty() {
                    view! { <EmptyState message="Mentor lineup coming soon." /> }.into_any()
                } else {
                    view! { <div class="mentor-grid">{mentor_cards}</div> }.into_any()
                }}
            </section>

            <section class="home-section">
                <h3>"Class Moments"</h3>
                <GalleryGrid items=gallery />
            </section>

            <section class="home-section">
                <h3>"What Our Students Say"</h3>
                <ReviewBoard reviews=reviews />
            </section>

            <section class="home-section how-it-works">
                <h3>"How It Works"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Pick a class"</strong>
                            <p>"Browse the catalog and choose what fits your goal"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Learn and practice"</strong>
                            <p>"Follow the lessons and mark them complete as you go"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"Get certified"</strong>
                            <p>"Finish the class and share your certificate"</p>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
