pub mod domain;
pub mod error;
pub mod extract;
pub mod leads;
pub mod plan;

pub use domain::*;
pub use error::CoreError;
pub use extract::{extract_phones, ExtractMode, PhoneExtractor};
pub use leads::{collect_numbers, parse_lead_lines, Lead, LeadReport};
pub use plan::{NumberingPlan, NumberingPlans, PlanLookup};
