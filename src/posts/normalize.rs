//! Turning raw API records into canonical [`Post`]s.

use chrono::{DateTime, TimeDelta, Utc};

use crate::api::RawPost;

use super::model::Post;

/// Normalize a freshly fetched batch.
///
/// Record `i` is back-dated by `(i + 1) * step` from `now`, so the
/// descending-date sort reproduces the order the server returned.
/// Offsets past the representable range clamp to the earliest timestamp;
/// the store's insertion-order tie break keeps those records in order.
pub fn normalize_batch(raws: Vec<RawPost>, now: DateTime<Utc>, step: TimeDelta) -> Vec<Post> {
    raws.into_iter()
        .enumerate()
        .map(|(i, raw)| into_post(raw, backdate(now, step, i + 1)))
        .collect()
}

fn backdate(now: DateTime<Utc>, step: TimeDelta, steps: usize) -> DateTime<Utc> {
    i32::try_from(steps)
        .ok()
        .and_then(|n| step.checked_mul(n))
        .and_then(|offset| now.checked_sub_signed(offset))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Normalize a single record from a create or update, stamped with `now`.
pub fn normalize_one(raw: RawPost, now: DateTime<Utc>) -> Post {
    into_post(raw, now)
}

fn into_post(raw: RawPost, created_at: DateTime<Utc>) -> Post {
    Post {
        id: raw.id,
        user_id: raw.user_id,
        title: raw.title,
        body: raw.body,
        created_at,
        reactions: raw.reactions.unwrap_or_default(),
    }
}
