use leptos::prelude::*;

/// Tab row for client-side category filtering. `None` is the implicit
/// "All" tab.
#[component]
pub fn CategoryTabs(
    categories: Vec<String>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
    let tabs: Vec<_> = categories
        .into_iter()
        .map(|category| {
            let value = category.clone();
            let is_active = {
                let value = value.clone();
                move || selected.get().as_deref() == Some(value.as_str())
            };
            view! {
                <button
                    class="tab"
                    class:active=is_active
                    on:click=move |_| on_select.run(Some(value.clone()))
                >
                    {category}
                </button>
            }
        })
        .collect();

    view! {
        <div class="tab-row">
            <button
                class="tab"
                class:active=move || selected.get().is_none()
                on:click=move |_| on_select.run(None)
            >
                "All"
            </button>
            {tabs}
        </div>
    }
}
