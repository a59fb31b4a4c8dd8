mod normalize;
mod overlaps;
mod resolve;

pub use normalize::run_normalize;
pub use overlaps::run_overlaps;
pub use resolve::run_resolve;
