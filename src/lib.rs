//! Client-side state for a blog: posts fetched from a REST API, cached in a
//! normalized store, mutated through reducers and read through selectors.

pub mod api;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod posts;
pub mod users;
