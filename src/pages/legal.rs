use leptos::prelude::*;

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <div class="page legal-page">
            <h2>"Terms & Privacy"</h2>

            <section class="legal-section">
                <h3>"Terms of Service"</h3>
                <p>
                    "Access to courses, bootcamps, and webinars is personal and \
                     non-transferable. Purchases are tied to your account and remain \
                     available for the lifetime of the product."
                </p>
                <p>
                    "Payment is processed by our payment partner. An invoice is \
                     issued for every purchase; unpaid invoices expire automatically."
                </p>
            </section>

            <section class="legal-section">
                <h3>"Privacy Policy"</h3>
                <p>
                    "We store the account data you provide at registration and your \
                     learning progress. We never sell personal data to third parties."
                </p>
                <p>
                    "Promotional preferences and referral codes are kept in your \
                     browser's storage and can be cleared at any time from your \
                     browser settings."
                </p>
            </section>
        </div>
    }
}
