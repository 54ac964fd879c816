use leptos::prelude::*;

/// The load-more affordance. Pages render it only while the filtered
/// collection extends past the visible slice.
#[component]
pub fn LoadMoreButton(#[prop(into)] on_click: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-more-row">
            <button class="btn btn-secondary" on:click=move |_| on_click.run(())>
                "Load More"
            </button>
        </div>
    }
}
