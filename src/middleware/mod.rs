//! Boundary middleware applied before requests reach the store.

pub mod rate_limiter;
