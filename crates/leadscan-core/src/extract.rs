use crate::domain::{parse_possible, PhoneMatch, RegionCode};
use crate::error::CoreError;
use crate::plan::{NumberingPlan, NumberingPlans, PlanLookup};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

// Loose on purpose: this bounds each candidate, validation happens in parse_possible.
// Only a literal space separates groups so a candidate never crosses a line break.
static CANDIDATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[0-9][0-9 ().-]{6,}").expect("candidate pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    /// Only matches with a normalized number.
    Strict,
    /// Every candidate, normalized where possible.
    #[default]
    Lenient,
}

impl ExtractMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractMode::Strict => "strict",
            ExtractMode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds phone numbers in free-form text for one default region.
///
/// Holds no scan state between calls, so one extractor can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct PhoneExtractor<P = NumberingPlans> {
    default_plan: NumberingPlan,
    plans: P,
    mode: ExtractMode,
}

impl<P: PlanLookup> PhoneExtractor<P> {
    /// Fails when `region` has no numbering plan in `plans`.
    pub fn new(region: &RegionCode, mode: ExtractMode, plans: P) -> Result<Self, CoreError> {
        let default_plan = plans
            .plan_for_region(region)
            .cloned()
            .ok_or_else(|| CoreError::UnknownRegion(region.to_string()))?;
        Ok(Self {
            default_plan,
            plans,
            mode,
        })
    }

    pub fn region(&self) -> &RegionCode {
        self.default_plan.region()
    }

    pub fn mode(&self) -> ExtractMode {
        self.mode
    }

    /// Ordered, deduplicated matches. Duplicates are keyed on the normalized
    /// number, or on the raw text when there is none; the first one wins.
    pub fn extract(&self, text: &str) -> Vec<PhoneMatch> {
        let mut seen = HashSet::new();
        let mut matches = Vec::new();
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for candidate in CANDIDATE_PATTERN.find_iter(text) {
            char_cursor += text[byte_cursor..candidate.start()].chars().count();
            byte_cursor = candidate.start();

            let raw = candidate.as_str().trim();
            let normalized = self.normalize(raw);
            let key = normalized.clone().unwrap_or_else(|| raw.to_string());
            if !seen.insert(key) {
                continue;
            }
            if self.mode == ExtractMode::Strict && normalized.is_none() {
                continue;
            }

            matches.push(PhoneMatch {
                raw: raw.to_string(),
                normalized,
                position: char_cursor,
            });
        }

        matches
    }

    /// First normalized number in `text`, regardless of mode.
    pub fn first_valid(&self, text: &str) -> Option<String> {
        CANDIDATE_PATTERN
            .find_iter(text)
            .find_map(|candidate| self.normalize(candidate.as_str()))
    }

    /// E.164 form of a single candidate, if it is a possible number.
    pub fn normalize(&self, candidate: &str) -> Option<String> {
        parse_possible(candidate, &self.default_plan, &self.plans).map(|number| number.to_e164())
    }
}

pub fn extract_phones(
    text: &str,
    region: &RegionCode,
    mode: ExtractMode,
) -> Result<Vec<PhoneMatch>, CoreError> {
    let extractor = PhoneExtractor::new(region, mode, NumberingPlans::builtin())?;
    Ok(extractor.extract(text))
}
