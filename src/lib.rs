//! MixWise pantry matching
//!
//! Given the ingredients a user owns, classifies a cocktail catalog into
//! ready / almost-there / far tiers and recommends which single ingredient to
//! buy next. The matching core in [`services`] is pure and synchronous; the
//! HTTP routes and catalog loader are thin adapters around it.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use services::classifier::classify;
pub use services::reconciler::is_satisfied;
pub use services::recommender::rank_unlocks;
