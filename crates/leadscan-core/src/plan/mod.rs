mod builtin;

use crate::domain::RegionCode;
use crate::error::CoreError;
use serde::Serialize;

pub use builtin::{PlanRow, BUILTIN_PLANS};

/// E.164 caps the full number (calling code plus NSN) at 15 digits.
pub const MAX_E164_DIGITS: usize = 15;

const ANY_LEADING_DIGIT: &str = "123456789";

/// Source of numbering-plan rules, keyed by region or by calling code.
pub trait PlanLookup {
    fn plan_for_region(&self, region: &RegionCode) -> Option<&NumberingPlan>;

    /// Every region using `calling_code`, in registration order.
    fn plans_for_calling_code(&self, calling_code: &str) -> Vec<&NumberingPlan>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberingPlan {
    region: RegionCode,
    calling_code: String,
    trunk_prefix: Option<String>,
    lengths: Vec<usize>,
    leading_digits: String,
}

impl NumberingPlan {
    pub fn new(
        region: RegionCode,
        calling_code: &str,
        trunk_prefix: Option<&str>,
        lengths: &[usize],
        leading_digits: Option<&str>,
    ) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidPlan {
            region: region.to_string(),
            reason: reason.to_string(),
        };

        let calling_code = calling_code.trim().trim_start_matches('+');
        if calling_code.is_empty()
            || calling_code.len() > 3
            || !is_digits(calling_code)
            || calling_code.starts_with('0')
        {
            return Err(invalid("calling code must be 1-3 digits not starting with 0"));
        }

        let trunk_prefix = match trunk_prefix.map(str::trim) {
            Some("") | None => None,
            Some(prefix) if is_digits(prefix) => Some(prefix.to_string()),
            Some(_) => return Err(invalid("trunk prefix must be digits")),
        };

        if lengths.is_empty() {
            return Err(invalid("at least one national number length is required"));
        }
        if lengths
            .iter()
            .any(|len| *len == 0 || len + calling_code.len() > MAX_E164_DIGITS)
        {
            return Err(invalid("national number length out of range"));
        }
        let mut lengths = lengths.to_vec();
        lengths.sort_unstable();
        lengths.dedup();

        let leading_digits = leading_digits
            .map(str::trim)
            .unwrap_or(ANY_LEADING_DIGIT)
            .to_string();
        if leading_digits.is_empty() || !is_digits(&leading_digits) {
            return Err(invalid("leading digits must be a non-empty set of digits"));
        }

        Ok(Self {
            region,
            calling_code: calling_code.to_string(),
            trunk_prefix,
            lengths,
            leading_digits,
        })
    }

    pub fn region(&self) -> &RegionCode {
        &self.region
    }

    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    pub fn trunk_prefix(&self) -> Option<&str> {
        self.trunk_prefix.as_deref()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn leading_digits(&self) -> &str {
        &self.leading_digits
    }

    /// Length and leading-digit plausibility of a national significant number.
    pub fn is_possible_nsn(&self, nsn: &str) -> bool {
        if !self.lengths.contains(&nsn.len()) || !is_digits(nsn) {
            return false;
        }
        nsn.chars()
            .next()
            .is_some_and(|first| self.leading_digits.contains(first))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberingPlans {
    plans: Vec<NumberingPlan>,
}

impl NumberingPlans {
    pub fn builtin() -> Self {
        let plans = BUILTIN_PLANS
            .iter()
            .map(|row| NumberingPlan {
                region: RegionCode(row.region.to_string()),
                calling_code: row.calling_code.to_string(),
                trunk_prefix: row.trunk_prefix.map(str::to_string),
                lengths: row.lengths.to_vec(),
                leading_digits: row.leading_digits.unwrap_or(ANY_LEADING_DIGIT).to_string(),
            })
            .collect();
        Self { plans }
    }

    pub fn with_plan(mut self, plan: NumberingPlan) -> Result<Self, CoreError> {
        self.insert(plan)?;
        Ok(self)
    }

    /// Adds a plan, replacing any existing plan for the same region in place.
    ///
    /// Calling codes must stay prefix-free: a code that is a strict prefix of
    /// another region's code (or the reverse) is rejected.
    pub fn insert(&mut self, plan: NumberingPlan) -> Result<(), CoreError> {
        let clash = self.plans.iter().find(|p| {
            p.region != plan.region
                && p.calling_code != plan.calling_code
                && (p.calling_code.starts_with(&plan.calling_code)
                    || plan.calling_code.starts_with(&p.calling_code))
        });
        if let Some(existing) = clash {
            return Err(CoreError::InvalidPlan {
                region: plan.region.to_string(),
                reason: format!(
                    "calling code {} overlaps {} used by {}",
                    plan.calling_code, existing.calling_code, existing.region
                ),
            });
        }

        match self.plans.iter_mut().find(|p| p.region == plan.region) {
            Some(existing) => *existing = plan,
            None => self.plans.push(plan),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NumberingPlan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanLookup for NumberingPlans {
    fn plan_for_region(&self, region: &RegionCode) -> Option<&NumberingPlan> {
        self.plans.iter().find(|plan| &plan.region == region)
    }

    fn plans_for_calling_code(&self, calling_code: &str) -> Vec<&NumberingPlan> {
        self.plans
            .iter()
            .filter(|plan| plan.calling_code == calling_code)
            .collect()
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}
