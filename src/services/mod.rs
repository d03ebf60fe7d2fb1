pub mod prediction;
pub mod recommender;
pub mod scorer;

pub use prediction::predict;
