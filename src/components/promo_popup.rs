use chrono::Utc;
use leptos::prelude::*;

use crate::models::PagePayload;
use crate::promo::should_show_promotion;
use crate::storage;

/// One-time promotional dialog. Dismissal (close, redirect click, or a
/// broken image) is persisted so the popup stays hidden for the
/// promotion's suppress window across reloads.
#[component]
pub fn PromoPopup() -> impl IntoView {
    let promotion = use_context::<PagePayload>().and_then(|p| p.promotion);

    let initially_open = promotion
        .as_ref()
        .is_some_and(|p| should_show_promotion(p, storage::dismissed_at(&p.id), Utc::now()));
    let (open, set_open) = signal(initially_open);

    promotion.map(|promo| {
        let promo_id = StoredValue::new(promo.id.clone());
        let dismiss = move || {
            storage::record_dismissal(&promo_id.get_value(), Utc::now());
            set_open.set(false);
        };

        view! {
            <Show when=move || open.get()>
                <style>{include_str!("promo_popup.css")}</style>
                <div class="promo-overlay">
                    <div class="promo-dialog">
                        <button class="promo-close" on:click=move |_| dismiss() title="Close">
                            "\u{2715}"
                        </button>
                        <a href=promo.url.clone() on:click=move |_| dismiss()>
                            <img
                                src=promo.image.clone()
                                alt=promo.title.clone()
                                on:error=move |_| dismiss()
                            />
                        </a>
                    </div>
                </div>
            </Show>
        }
    })
}
