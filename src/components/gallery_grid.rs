use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::models::GalleryItem;

/// Chunk items into alternating 1-wide and 2-wide rows. Layout only;
/// every item appears in exactly one row.
fn gallery_rows<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut rows = Vec::new();
    let mut rest = items;
    let mut width = 1;
    while !rest.is_empty() {
        let take = width.min(rest.len());
        rows.push(rest[..take].to_vec());
        rest = &rest[take..];
        width = if width == 1 { 2 } else { 1 };
    }
    rows
}

#[component]
pub fn GalleryGrid(items: Vec<GalleryItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <EmptyState message="No photos yet." /> }.into_any();
    }

    let rows: Vec<_> = gallery_rows(&items)
        .into_iter()
        .map(|row| {
            let wide = row.len() == 1;
            let cells: Vec<_> = row
                .into_iter()
                .map(|item| {
                    view! {
                        <figure class="gallery-cell">
                            <img src=item.image alt=item.caption.clone() />
                            {(!item.caption.is_empty())
                                .then(|| view! { <figcaption>{item.caption}</figcaption> })}
                        </figure>
                    }
                })
                .collect();
            view! { <div class="gallery-row" class:gallery-row-wide=wide>{cells}</div> }
        })
        .collect();

    view! { <div class="gallery-grid">{rows}</div> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_alternate_one_and_two_wide() {
        let items: Vec<u32> = (0..6).collect();
        let rows = gallery_rows(&items);
        let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_concatenation_preserves_items() {
        let items: Vec<u32> = (0..7).collect();
        let flattened: Vec<u32> = gallery_rows(&items).into_iter().flatten().collect();
        assert_eq!(flattened, items);
    }

    #[test]
    fn test_empty_input() {
        let rows = gallery_rows::<u32>(&[]);
        assert!(rows.is_empty());
    }
}
