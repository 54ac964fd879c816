use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] placeholder: String,
    /// Current search text; kept outside so the owning page can reset
    /// pagination when it changes.
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
