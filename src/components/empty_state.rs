use leptos::prelude::*;

/// Placeholder shown wherever a collection is empty; list views must
/// render this instead of a blank area.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional, into)] hint: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state-message">{message}</p>
            {(!hint.is_empty()).then_some(view! { <p class="empty-state-hint">{hint.clone()}</p> })}
        </div>
    }
}
