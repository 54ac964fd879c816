use leptos::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::empty_state::EmptyState;
use crate::components::load_more::LoadMoreButton;
use crate::components::search_input::SearchInput;
use crate::format::{format_date, format_rupiah};
use crate::list_view::{unique_categories, FilterState};
use crate::models::{Invoice, PagePayload};

fn status_class(status: &str) -> &'static str {
    match status {
        "paid" => "status-badge status-paid",
        "pending" => "status-badge status-pending",
        _ => "status-badge status-expired",
    }
}

#[component]
fn InvoiceRow(invoice: Invoice) -> impl IntoView {
    let item_lines: Vec<_> = invoice
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
        <article class="card invoice-row">
            <div class="invoice-head">
                <div>
                    <strong class="invoice-number">{invoice.number.clone()}</strong>
                    <span class="invoice-date">{format_date(invoice.created_at)}</span>
                </div>
                <span class={status_class(&invoice.status)}>{invoice.status.clone()}</span>
            </div>
            <ul class="invoice-items">{item_lines}</ul>
            <div class="invoice-total">
                <span>"Total"</span>
                <strong>{format_rupiah(invoice.total)}</strong>
            </div>
        </article>
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let payload = use_context::<PagePayload>().unwrap_or_default();
    let statuses = unique_categories(&payload.invoices);
    let invoices = StoredValue::new(payload.invoices);

    let (filter, set_filter) = signal(FilterState::new());

    view! {
        <div class="page transactions-page">
            <h2>"Transactions"</h2>
            <p class="page-description">"Your invoices and their payment status."</p>

            <SearchInput
                placeholder="Search by invoice number..."
                value=Signal::derive(move || filter.get().search_text.clone())
                on_input=move |text| set_filter.update(|f| f.set_search(text))
            />
            <CategoryTabs
                categories=statuses
                selected=Signal::derive(move || filter.get().selected_category.clone())
                on_select=move |status| set_filter.update(|f| f.set_category(status))
            />

            {move || {
                let state = filter.get();
                let all = invoices.get_value();
                let slice = state.slice(&all);

                if slice.is_empty() {
                    return view! {
                        <EmptyState
                            message="No transactions found."
                            hint="Purchases will show up here."
                        />
                    }
                    .into_any();
                }

                let rows: Vec<_> = slice
                    .items
                    .iter()
                    .map(|invoice| view! { <InvoiceRow invoice=(*invoice).clone() /> })
                    .collect();
                let more = slice.has_more();

                view! {
                    <div class="invoice-list">{rows}</div>
                    {more.then(|| view! {
                        <LoadMoreButton on_click=move |_| set_filter.update(|f| f.load_more()) />
                    })}
                }
                .into_any()
            }}
        </div>
    }
}
