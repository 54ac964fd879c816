use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-brand">
                <span class="footer-logo">"Aksademy"</span>
                <p>"Online courses, bootcamps, and webinars for Indonesian tech careers."</p>
            </div>
            <div class="footer-columns">
                <div class="footer-column">
                    <h4>"Learn"</h4>
                    <a href="/courses">"Courses"</a>
                    <a href="/bootcamps">"Bootcamps"</a>
                    <a href="/webinars">"Webinars"</a>
                </div>
                <div class="footer-column">
                    <h4>"Account"</h4>
                    <a href="/profile">"Profile"</a>
                    <a href="/transactions">"Transactions"</a>
                </div>
                <div class="footer-column">
                    <h4>"Company"</h4>
                    <a href="/legal">"Terms & Privacy"</a>
                </div>
            </div>
        </footer>
    }
}
