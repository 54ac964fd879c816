use leptos::prelude::*;

use crate::youtube;

/// Embedded course trailer. Unresolvable links get a processing
/// placeholder instead of a broken frame.
#[component]
pub fn VideoEmbed(
    #[prop(into)] source_url: Option<String>,
    #[prop(into)] title: String,
) -> impl IntoView {
    let embed = source_url.as_deref().and_then(youtube::embed_url);

    match embed {
        Some(src) => view! {
            <div class="video-frame">
                <iframe
                    src=src
                    title=title
                    allow="autoplay; fullscreen; picture-in-picture"
                ></iframe>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="video-frame video-processing">
                <p>"Video is still processing. Check back soon."</p>
            </div>
        }
        .into_any(),
    }
}
