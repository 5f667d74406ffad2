mod common;

use blogstore::posts::{EntityStore, ReactionKind};
use common::post_at;

fn ids(store: &EntityStore) -> Vec<u64> {
    store.iter().map(|p| p.id).collect()
}

fn is_newest_first(store: &EntityStore) -> bool {
    let posts: Vec<_> = store.iter().collect();
    posts.windows(2).all(|w| w[0].created_at >= w[1].created_at)
}

#[test]
fn upsert_many_orders_newest_first() {
    let mut store = EntityStore::new();
    store.upsert_many(vec![post_at(1, 1, 0), post_at(2, 1, 5)]);
    assert_eq!(ids(&store), vec![2, 1]);
}

#[test]
fn repeated_upsert_many_keeps_order_invariant() {
    let mut store = EntityStore::new();
    store.upsert_many(vec![post_at(1, 1, 3), post_at(2, 1, 1), post_at(3, 1, 7)]);
    store.upsert_many(vec![post_at(4, 2, 2), post_at(2, 1, 9)]);
    store.upsert_many(vec![post_at(5, 2, 3), post_at(6, 2, 3)]);

    assert!(is_newest_first(&store));
    // 1, 5 and 6 share a timestamp and keep insertion order.
    assert_eq!(ids(&store), vec![2, 3, 1, 5, 6, 4]);
}

#[test]
fn upsert_many_is_idempotent() {
    let batch = vec![post_at(1, 1, 0), post_at(2, 2, 1)];
    let mut once = EntityStore::new();
    once.upsert_many(batch.clone());
    let mut twice = once.clone();
    twice.upsert_many(batch);

    assert_eq!(ids(&once), ids(&twice));
    assert_eq!(twice.len(), 2);
    assert_eq!(once.get(1), twice.get(1));
}

#[test]
fn upsert_one_then_get_round_trips() {
    let mut store = EntityStore::new();
    store.upsert_many(vec![post_at(1, 1, 0)]);

    let mut edited = post_at(1, 3, 4);
    edited.title = "Edited".to_string();
    store.upsert_one(edited.clone());

    assert_eq!(store.get(1), Some(&edited));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_one_is_idempotent() {
    let mut store = EntityStore::new();
    store.upsert_many(vec![post_at(1, 1, 0), post_at(2, 1, 1)]);

    assert!(store.remove_one(1).is_some());
    assert!(store.get(1).is_none());
    assert!(store.remove_one(1).is_none());
    assert!(store.remove_one(999).is_none());
    assert!(store.get(999).is_none());
    assert_eq!(ids(&store), vec![2]);
}

#[test]
fn increment_reaction_touches_one_field_of_one_post() {
    let mut store = EntityStore::new();
    store.upsert_many(vec![post_at(5, 1, 0), post_at(6, 1, 1)]);
    let other_before = store.get(6).cloned();

    for _ in 0..3 {
        assert!(store.increment_reaction(5, ReactionKind::Heart));
    }

    let post = store.get(5).unwrap();
    for (kind, count) in post.reactions.iter() {
        let expected = if kind == ReactionKind::Heart { 3 } else { 0 };
        assert_eq!(count, expected, "{}", kind);
    }
    assert_eq!(store.get(6).cloned(), other_before);
}

#[test]
fn increment_reaction_on_missing_post_reports_false() {
    let mut store = EntityStore::new();
    assert!(!store.increment_reaction(1, ReactionKind::Eyes));
    assert!(store.is_empty());
}
