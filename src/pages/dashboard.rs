use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::format::{format_date, format_rupiah};
use crate::models::PagePayload;

#[component]
fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let dashboard = use_context::<PagePayload>().and_then(|p| p.dashboard);

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>

            {match dashboard {
                None => view! {
                    <EmptyState
                        message="Dashboard data unavailable."
                        hint="This area is for administrators."
                    />
                }
                .into_any(),
                Some(stats) => {
                    let rows: Vec<_> = stats
                        .recent_invoices
                        .iter()
                        .map(|invoice| {
                            view! {
                                <tr>
                                    <td>{invoice.number.clone()}</td>
                                    <td>{format_date(invoice.created_at)}</td>
                                    <td>{invoice.status.clone()}</td>
                                    <td class="amount">{format_rupiah(invoice.total)}</td>
                                </tr>
                            }
                        })
                        .collect();

                    view! {
                        <div class="stat-grid">
                            <StatCard label="Revenue" value={format_rupiah(stats.revenue)} />
                            <StatCard label="Students" value={stats.student_count.to_string()} />
                            <StatCard label="Courses" value={stats.course_count.to_string()} />
                            <StatCard label="Invoices" value={stats.invoice_count.to_string()} />
                        </div>

                        <h3>"Recent Transactions"</h3>
                        {if rows.is_empty() {
                            view! { <EmptyState message="No transactions yet." /> }.into_any()
                        } else {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Invoice"</th>
                                            <th>"Date"</th>
                                            <th>"Status"</th>
                                            <th class="amount">"Total"</th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                            }
                            .into_any()
                        }}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
