use log::debug;

use crate::errors::DocsResult;
use crate::implementations::report::SpecReport;
use crate::implementations::tech_specs::to_json_string;
use crate::models::tech_spec::TechSpec;

/// Outcome of the specification sheet consistency checks
#[derive(Debug, Clone, Default)]
pub struct SpecCheck {
    /// The JSON parses back to a value equal to the source
    pub round_trips: bool,
    /// Two serializations produced identical bytes
    pub deterministic: bool,
    /// Section keys printed in the report but missing from the JSON
    pub missing_keys: Vec<&'static str>,
}

impl SpecCheck {
    pub fn is_ok(&self) -> bool {
        self.round_trips && self.deterministic && self.missing_keys.is_empty()
    }
}

pub fn check_spec(spec: &TechSpec, report: &SpecReport) -> DocsResult<SpecCheck> {
    let json = to_json_string(spec)?;
    let parsed: TechSpec = serde_json::from_str(&json)?;
    let deterministic = json == to_json_string(spec)?;

    let missing_keys = report.sections
        .iter()
        .map(|section| section.key)
        .filter(|key| !json.contains(&format!("\"{}\":", key)))
        .collect::<Vec<_>>();

    debug!("Spec check: {} sections, {} missing", report.sections.len(), missing_keys.len());

    Ok(SpecCheck {
        round_trips: &parsed == spec,
        deterministic,
        missing_keys,
    })
}
