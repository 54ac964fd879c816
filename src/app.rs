use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::bridge;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::promo_popup::PromoPopup;
use crate::models::PagePayload;
use crate::pages::bootcamps::BootcampsPage;
use crate::pages::checkout_success::CheckoutSuccessPage;
use crate::pages::course_detail::CourseDetailPage;
use crate::pages::courses::CoursesPage;
use crate::pages::dashboard::AdminDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::legal::LegalPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::transactions::TransactionsPage;
use crate::pages::webinars::WebinarsPage;
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    // The server embeds the payload before the bundle loads; a missing
    // or malformed payload falls back to empty states on every page.
    let payload = match bridge::page_payload() {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("page payload unavailable: {e}");
            PagePayload::default()
        }
    };
    provide_context(payload);

    // Pick up a referral code from the URL once per visit.
    Effect::new(move |_| {
        storage::capture_referral_code();
    });

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/courses") view=CoursesPage />
                        <Route path=path!("/courses/:slug") view=CourseDetailPage />
                        <Route path=path!("/bootcamps") view=BootcampsPage />
                        <Route path=path!("/webinars") view=WebinarsPage />
                        <Route path=path!("/transactions") view=TransactionsPage />
                        <Route path=path!("/profile") view=ProfilePage />
                        <Route path=path!("/checkout/success") view=CheckoutSuccessPage />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/register") view=RegisterPage />
                        <Route path=path!("/admin") view=AdminDashboardPage />
                        <Route path=path!("/legal") view=LegalPage />
                    </Routes>
                </main>
                <Footer />
                <PromoPopup />
            </div>
        </Router>
    }
}
