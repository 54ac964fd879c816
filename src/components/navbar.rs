use leptos::prelude::*;

use crate::models::PagePayload;

#[component]
pub fn Navbar() -> impl IntoView {
    let user = use_context::<PagePayload>().and_then(|p| p.user);

    view! {
        <header class="navbar">
            <a href="/" class="navbar-brand">
                <span class="navbar-logo">"Aksademy"</span>
                <span class="navbar-tagline">"Upgrade Skill, Raih Karier"</span>
            </a>
            <nav class="navbar-links">
                <a href="/courses" class="nav-link">"Courses"</a>
                <a href="/bootcamps" class="nav-link">"Bootcamps"</a>
                <a href="/webinars" class="nav-link">"Webinars"</a>
                <a href="/legal" class="nav-link">"Legal"</a>
            </nav>
            <div class="navbar-account">
                {match user {
                    Some(user) => view! {
                        <a href="/profile" class="nav-link navbar-user">{user.name}</a>
                        <a href="/transactions" class="nav-link">"Transactions"</a>
                    }
                    .into_any(),
                    None => view! {
                        <a href="/login" class="nav-link">"Sign In"</a>
                        <a href="/register" class="btn btn-primary">"Join Now"</a>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
