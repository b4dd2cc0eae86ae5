pub mod phone;
pub mod region;

pub use phone::{parse_possible, PhoneMatch, PossibleNumber};
pub use region::{normalize_region_code, RegionCode, DEFAULT_REGION};
