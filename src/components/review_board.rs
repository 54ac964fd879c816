use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::models::Review;

const COLUMNS: usize = 3;

/// Deal items round-robin into `columns` buckets. Layout only; the one
/// invariant is that every item lands in exactly one bucket.
fn distribute_columns<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); columns];
    for (i, item) in items.iter().enumerate() {
        buckets[i % columns].push(item.clone());
    }
    buckets
}

fn stars(count: u8) -> String {
    "\u{2605}".repeat(usize::from(count.min(5)))
}

#[component]
pub fn ReviewBoard(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! {
            <EmptyState message="No reviews yet." hint="Be the first to share your experience." />
        }
        .into_any();
    }

    let columns: Vec<_> = distribute_columns(&reviews, COLUMNS)
        .into_iter()
        .map(|column| {
            let cards: Vec<_> = column
                .into_iter()
                .map(|review| {
                    view! {
                        <div class="card review-card">
                            <span class="review-stars">{stars(review.stars)}</span>
                            <p class="review-body">{review.body}</p>
                            <div class="review-author">
                                {review.avatar.map(|src| view! {
                                    <img class="review-avatar" src=src alt="" />
                                })}
                                <span>{review.author}</span>
                            </div>
                        </div>
                    }
                })
                .collect();
            view! { <div class="review-column">{cards}</div> }
        })
        .collect();

    view! { <div class="review-board">{columns}</div> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_item_lands_exactly_once() {
        let items: Vec<u32> = (0..10).collect();
        let buckets = distribute_columns(&items, 3);
        assert_eq!(buckets.len(), 3);

        let mut seen: Vec<u32> = buckets.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, items);
    }

    #[test]
    fn test_round_robin_order() {
        let items = vec!["a", "b", "c", "d", "e"];
        let buckets = distribute_columns(&items, 3);
        assert_eq!(buckets[0], vec!["a", "d"]);
        assert_eq!(buckets[1], vec!["b", "e"]);
        assert_eq!(buckets[2], vec!["c"]);
    }

    #[test]
    fn test_zero_columns_clamped() {
        let items = vec![1, 2, 3];
        let buckets = distribute_columns(&items, 0);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0], items);
    }
}
