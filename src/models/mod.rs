pub mod base_position;
pub mod region;

pub use base_position::BasePosition;
pub use region::Region;
