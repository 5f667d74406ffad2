mod common;

use blogstore::mvi::Reducer;
use blogstore::posts::selectors::all_posts;
use blogstore::posts::{Post, PostsByUser, PostsIntent, PostsReducer, PostsState};
use common::post_at;

fn state_with(posts: Vec<Post>) -> PostsState {
    PostsReducer::reduce(PostsState::default(), PostsIntent::FetchSucceeded { posts })
}

#[test]
fn posts_by_user_is_order_preserving_filter() {
    let state = state_with(vec![
        post_at(1, 1, 0),
        post_at(2, 2, 1),
        post_at(3, 1, 2),
        post_at(4, 3, 3),
        post_at(5, 1, 4),
    ]);
    let selector = PostsByUser::new();

    for user_id in 1..=4 {
        let expected: Vec<u64> = all_posts(&state)
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.id)
            .collect();
        let actual: Vec<u64> = selector.select(&state, user_id).iter().map(|p| p.id).collect();
        assert_eq!(actual, expected, "user {}", user_id);
    }
}

#[test]
fn posts_by_user_recomputes_only_on_change() {
    let state = state_with(vec![post_at(1, 1, 0), post_at(2, 2, 1)]);
    let selector = PostsByUser::new();

    selector.select(&state, 1);
    selector.select(&state, 1);
    assert_eq!(selector.recomputations(), 1);

    let state = PostsReducer::reduce(state, PostsIntent::CountIncreased);
    selector.select(&state, 1);
    assert_eq!(selector.recomputations(), 1, "counter change leaves posts untouched");

    let state = PostsReducer::reduce(state, PostsIntent::Deleted { id: 1 });
    assert!(selector.select(&state, 1).is_empty());
    assert_eq!(selector.recomputations(), 2);
}

#[test]
fn selecting_does_not_mutate_state() {
    let state = state_with(vec![post_at(1, 1, 0)]);
    let before = state.clone();
    let selector = PostsByUser::new();
    selector.select(&state, 1);
    assert_eq!(state, before);
}
