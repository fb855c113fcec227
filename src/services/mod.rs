pub mod catalog;
pub mod catalog_audit;
pub mod classifier;
pub mod inventory;
pub mod recommender;
pub mod reconciler;
