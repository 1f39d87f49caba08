pub mod add;
pub mod aggregate;
pub mod backup;
pub mod badges;
pub mod classifier;
pub mod del;
pub mod log;
pub mod normalize;
pub mod shelf;
pub mod streak;
