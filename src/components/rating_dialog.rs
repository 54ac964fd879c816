use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::bridge;

/// Star-rating dialog for a course. Submitting delegates to the server;
/// success closes the dialog and resets the form, failure stays inline.
#[component]
pub fn RatingDialog(
    course_id: u32,
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (stars, set_stars) = signal(5u8);
    let (comment, set_comment) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);

    let reset_form = move || {
        set_stars.set(5);
        set_comment.set(String::new());
        set_submit_error.set(None);
    };

    let do_submit = move || {
        let rating = stars.get();
        let body = comment.get();
        set_is_submitting.set(true);
        spawn_local(async move {
            match bridge::submit_rating(course_id, rating, &body).await {
                Ok(()) => {
                    reset_form();
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("rating submission failed: {e}");
                    set_submit_error.set(Some(e));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog rating-dialog">
                    <h3>"Rate this course"</h3>
                    <div class="star-row">
                        {(1u8..=5)
                            .map(|value| {
                                let is_selected = move || stars.get() >= value;
                                view! {
                                    <button
                                        class="star-button"
                                        class:selected=is_selected
                                        on:click=move |_| set_stars.set(value)
                                    >
                                        "\u{2605}"
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <textarea
                        class="rating-comment"
                        placeholder="What did you think?"
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    ></textarea>
                    {move || {
                        submit_error.get().map(|e| view! {
                            <div class="error-message">
                                <strong>"Could not submit: "</strong>{e}
                            </div>
                        })
                    }}
                    <div class="dialog-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| do_submit()
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Submitting..." } else { "Submit" }}
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
