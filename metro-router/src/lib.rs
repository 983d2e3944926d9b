//! Metro route planner.
//!
//! Answers "how do I get from this station to that one?" over a fixed,
//! multi-line metro network: fewest stops first, then a handful of
//! detours around individual segments of the route.

pub mod domain;
pub mod network;
pub mod planner;
