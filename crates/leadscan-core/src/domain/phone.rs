use crate::plan::{NumberingPlan, PlanLookup};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_CALLING_CODE_DIGITS: usize = 3;

/// A phone-number-like token found in free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneMatch {
    pub raw: String,
    pub normalized: Option<String>,
    /// Character offset of the match in the scanned text.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleNumber {
    pub calling_code: String,
    pub national: String,
}

impl PossibleNumber {
    pub fn to_e164(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PossibleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}{}", self.calling_code, self.national)
    }
}

/// Resolves a candidate to a possible number.
///
/// A leading `+` means the digits carry their own calling code and the
/// default region is ignored. Anything else is read as a national number of
/// `default_plan`.
pub fn parse_possible<P: PlanLookup + ?Sized>(
    candidate: &str,
    default_plan: &NumberingPlan,
    plans: &P,
) -> Option<PossibleNumber> {
    let trimmed = candidate.trim();
    let digits: String = trimmed.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    if trimmed.starts_with('+') {
        parse_international(&digits, plans)
    } else {
        parse_national(&digits, default_plan)
    }
}

fn parse_international<P: PlanLookup + ?Sized>(digits: &str, plans: &P) -> Option<PossibleNumber> {
    // Calling codes are kept prefix-free on insert, so the first known prefix is the only one.
    let sharing = (1..=MAX_CALLING_CODE_DIGITS.min(digits.len()))
        .map(|len| plans.plans_for_calling_code(&digits[..len]))
        .find(|found| !found.is_empty())?;
    let rest = &digits[sharing[0].calling_code().len()..];

    // Regions sharing a calling code ("+7" is RU and KZ) each get a say.
    if let Some(plan) = sharing.iter().find(|plan| plan.is_possible_nsn(rest)) {
        return Some(possible(plan, rest));
    }
    // "+44 (0)20 ..." style: trunk prefix written after the calling code.
    sharing.iter().find_map(|plan| {
        strip_trunk(plan, rest)
            .filter(|stripped| plan.is_possible_nsn(stripped))
            .map(|stripped| possible(plan, stripped))
    })
}

fn parse_national(digits: &str, plan: &NumberingPlan) -> Option<PossibleNumber> {
    if plan.is_possible_nsn(digits) {
        return Some(possible(plan, digits));
    }
    if let Some(stripped) = strip_trunk(plan, digits) {
        if plan.is_possible_nsn(stripped) {
            return Some(possible(plan, stripped));
        }
    }
    let without_code = digits.strip_prefix(plan.calling_code())?;
    plan.is_possible_nsn(without_code).then(|| possible(plan, without_code))
}

fn strip_trunk<'a>(plan: &NumberingPlan, digits: &'a str) -> Option<&'a str> {
    plan.trunk_prefix().and_then(|prefix| digits.strip_prefix(prefix))
}

fn possible(plan: &NumberingPlan, national: &str) -> PossibleNumber {
    PossibleNumber {
        calling_code: plan.calling_code().to_string(),
        national: national.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_possible;
    use crate::domain::RegionCode;
    use crate::plan::{NumberingPlans, PlanLookup};

    fn e164(candidate: &str, region: &str) -> Option<String> {
        let plans = NumberingPlans::builtin();
        let plan = plans
            .plan_for_region(&RegionCode::new(region).unwrap())
            .unwrap();
        parse_possible(candidate, plan, &plans).map(|number| number.to_e164())
    }

    #[test]
    fn national_number_strips_formatting() {
        assert_eq!(e164("(555) 123-4567", "US").as_deref(), Some("+15551234567"));
        assert_eq!(e164("555.123.4567", "US").as_deref(), Some("+15551234567"));
    }

    #[test]
    fn national_number_strips_trunk_prefix() {
        assert_eq!(e164("15551234567", "US"), e164("5551234567", "US"));
        assert_eq!(e164("1 (555) 123-4567", "US").as_deref(), Some("+15551234567"));
        assert_eq!(e164("020 7946 0958", "GB").as_deref(), Some("+442079460958"));
    }

    #[test]
    fn national_number_strips_own_calling_code() {
        assert_eq!(e164("44 20 7946 0958", "GB").as_deref(), Some("+442079460958"));
    }

    #[test]
    fn national_number_uses_default_region_rules() {
        assert_eq!(e164("2079460958", "US").as_deref(), Some("+12079460958"));
        assert_eq!(e164("2079460958", "GB").as_deref(), Some("+442079460958"));
    }

    #[test]
    fn national_number_rejects_bad_length() {
        assert!(e164("48213991", "US").is_none());
        assert!(e164("555-1234", "US").is_none());
        assert!(e164("1555123456789", "US").is_none());
    }

    #[test]
    fn national_number_rejects_bad_area_code() {
        assert!(e164("055-123-4567", "US").is_none());
    }

    #[test]
    fn international_number_ignores_default_region() {
        assert_eq!(e164("+44 20 7946 0958", "US").as_deref(), Some("+442079460958"));
        assert_eq!(e164("+44 20 7946 0958", "FR").as_deref(), Some("+442079460958"));
        assert_eq!(e164("+33 1 23 45 67 89", "US").as_deref(), Some("+33123456789"));
        assert_eq!(e164("+353 1 234 5678", "US").as_deref(), Some("+35312345678"));
    }

    #[test]
    fn international_number_drops_bracketed_trunk_prefix() {
        assert_eq!(
            e164("+44 (0)20 7946 0958", "US").as_deref(),
            Some("+442079460958")
        );
    }

    #[test]
    fn shared_calling_code_accepts_any_sharing_region() {
        assert_eq!(e164("+7 912 345 67 89", "US").as_deref(), Some("+79123456789"));
        assert_eq!(e164("+7 701 123 4567", "US").as_deref(), Some("+77011234567"));
        assert_eq!(e164("8 701 123 4567", "KZ").as_deref(), Some("+77011234567"));
        assert_eq!(e164("+1 416 555 0100", "GB").as_deref(), Some("+14165550100"));
    }

    #[test]
    fn international_number_rejects_unknown_calling_code() {
        assert!(e164("+999 1234 5678", "US").is_none());
    }

    #[test]
    fn international_number_rejects_bad_length() {
        assert!(e164("+1 555 123 456", "US").is_none());
        assert!(e164("+44 20 7946", "US").is_none());
    }

    #[test]
    fn candidate_without_digits_is_not_possible() {
        assert!(e164("+", "US").is_none());
        assert!(e164(" () - ", "US").is_none());
    }
}
