use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::format::format_rupiah;
use crate::models::PagePayload;

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let checkout = use_context::<PagePayload>().and_then(|p| p.checkout);

    view! {
        <div class="page checkout-page">
            {match checkout {
                None => view! {
                    <EmptyState
                        message="No checkout in progress."
                        hint="Pick a course to get started."
                    />
                }
                .into_any(),
                Some(checkout) => {
                    let items: Vec<_> = checkout
                        .items
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="invoice-item">
                                    <span>{item.title.clone()}</span>
                                    <span class="invoice-item-kind">{item.kind.clone()}</span>
                                    <span>{format_rupiah(item.price)}</span>
                                </li>
                            }
                        })
                        .collect();

                    view! {
                        <div class="success-message">
                            <div class="success-header">"\u{2713} Payment Confirmed"</div>
                            <div class="success-details">
                                <p>
                                    <strong>"Invoice: "</strong>
                                    {checkout.invoice_number.clone()}
                                </p>
                                <p>
                                    <strong>"Payment method: "</strong>
                                    {checkout.payment_method.clone()}
                                </p>
                                <ul class="invoice-items">{items}</ul>
                                <p class="checkout-total">
                                    <strong>"Total: "</strong>
                                    {format_rupiah(checkout.grand_total)}
                                </p>
                            </div>
                            <div class="success-actions">
                                <a href="/profile" class="btn btn-primary">"Go to My Classes"</a>
                                <a href="/transactions" class="btn btn-secondary">"View Transactions"</a>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
