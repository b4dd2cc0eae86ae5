use crate::extract::PhoneExtractor;
use crate::plan::PlanLookup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub line: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeadReport {
    /// Non-blank input lines.
    pub total: usize,
    /// Lines that yielded a phone number.
    pub parsed: usize,
    pub leads: Vec<Lead>,
}

/// One lead per line: the first valid number on it. Lines without one are dropped.
/// Empty lines are skipped; whitespace-only lines still count toward `total`.
pub fn parse_lead_lines<P: PlanLookup>(extractor: &PhoneExtractor<P>, text: &str) -> LeadReport {
    let mut report = LeadReport::default();

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        report.total += 1;
        if let Some(phone) = extractor.first_valid(line) {
            report.leads.push(Lead {
                line: line.to_string(),
                phone,
            });
        }
    }

    report.parsed = report.leads.len();
    report
}

/// Every valid number in the blob, deduplicated, in first-seen order.
pub fn collect_numbers<P: PlanLookup>(extractor: &PhoneExtractor<P>, text: &str) -> Vec<String> {
    extractor
        .extract(text)
        .into_iter()
        .filter_map(|m| m.normalized)
        .collect()
}
