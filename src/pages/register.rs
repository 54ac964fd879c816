use leptos::prelude::*;

use crate::storage;

#[component]
pub fn RegisterPage() -> impl IntoView {
    // Carry a referral code captured earlier in the session through the
    // form so the server can credit it.
    let referral = storage::referral_code().unwrap_or_default();

    view! {
        <div class="page auth-page">
            <form class="card auth-form" method="post" action="/register">
                <h2>"Create Account"</h2>
                <label class="field">
                    <span>"Full name"</span>
                    <input type="text" name="name" required />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input type="email" name="email" required placeholder="you@example.com" />
                </label>
                <label class="field">
                    <span>"Occupation"</span>
                    <input type="text" name="occupation" placeholder="e.g. Frontend Developer" />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input type="password" name="password" required />
                </label>
                <input type="hidden" name="referral_code" value=referral />
                <button type="submit" class="btn btn-primary">"Join Now"</button>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
