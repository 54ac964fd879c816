use leptos::prelude::*;

/// Plain form; credentials go straight to the server, which redirects
/// with a fresh page payload.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page auth-page">
            <form class="card auth-form" method="post" action="/login">
                <h2>"Sign In"</h2>
                <label class="field">
                    <span>"Email"</span>
                    <input type="email" name="email" required placeholder="you@example.com" />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input type="password" name="password" required />
                </label>
                <button type="submit" class="btn btn-primary">"Sign In"</button>
                <p class="auth-switch">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
