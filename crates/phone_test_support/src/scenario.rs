use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const SCENARIO_FORMAT_V1: &str = "phone-scenarios-v1";

const KNOWN_OPS: &[&str] = &[
    "type", "replace", "key", "paste", "select", "focus", "click", "country", "clear", "external",
    "drain",
];

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub format: String,
    #[serde(rename = "case")]
    pub cases: Vec<Scenario>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub id: String,
    /// Mount config as written; deserialized by the test into the machine's config type.
    #[serde(default)]
    pub config: toml::Table,
    /// Initial control selection, before the first step.
    pub selection: Option<[usize; 2]>,
    #[serde(rename = "step")]
    pub steps: Vec<Step>,
}

/// One host action. Which fields are required depends on `op`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub op: String,
    /// Typed text (`type`), the whole replacement (`replace`) or clipboard (`paste`).
    pub text: Option<String>,
    pub key: Option<String>,
    /// Any of `ctrl`, `meta`, `shift`, `alt`.
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Control selection to set before the action.
    pub selection: Option<[usize; 2]>,
    pub iso2: Option<String>,
    pub value: Option<String>,
    /// Skip the deferred drain after this step.
    #[serde(default)]
    pub hold: bool,
    #[serde(default)]
    pub expect: Expect,
}

/// Checks after a step; absent fields are not checked.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Expect {
    pub buffer: Option<String>,
    pub country: Option<String>,
    pub caret_target: Option<usize>,
    /// Control selection after the step (and its drain).
    pub selection: Option<[usize; 2]>,
    /// `default`, `suppress` or `select`.
    pub outcome: Option<String>,
    /// Notifications delivered during the step, in order.
    pub events: Option<Vec<String>>,
    pub full_number: Option<String>,
    pub is_valid: Option<bool>,
}

/// Read, parse and validate a scenario file. Panics with the offending path
/// and case on any defect.
pub fn load_scenarios(path: &Path) -> ScenarioFile {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario file {path:?}: {err}"));
    let file: ScenarioFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario file {path:?}: {err}"));
    validate(&file, path);
    file
}

fn validate(file: &ScenarioFile, path: &Path) {
    assert_eq!(
        file.format, SCENARIO_FORMAT_V1,
        "unsupported scenario format in {path:?}"
    );
    assert!(!file.cases.is_empty(), "no cases in {path:?}");

    let mut ids = BTreeSet::new();
    for case in &file.cases {
        assert!(
            ids.insert(case.id.as_str()),
            "duplicate case id '{}' in {path:?}",
            case.id
        );
        for (idx, step) in case.steps.iter().enumerate() {
            let at = format!("case '{}' step {} in {path:?}", case.id, idx + 1);
            assert!(
                KNOWN_OPS.contains(&step.op.as_str()),
                "unknown op '{}' at {at}",
                step.op
            );
            let required = match step.op.as_str() {
                "type" | "replace" | "paste" => Some(("text", step.text.is_some())),
                "key" => Some(("key", step.key.is_some())),
                "select" => Some(("selection", step.selection.is_some())),
                "country" => Some(("iso2", step.iso2.is_some())),
                "external" => Some(("value", step.value.is_some())),
                _ => None,
            };
            if let Some((field, present)) = required {
                assert!(present, "op '{}' needs '{field}' at {at}", step.op);
            }
            for m in &step.modifiers {
                assert!(
                    matches!(m.as_str(), "ctrl" | "meta" | "shift" | "alt"),
                    "unknown modifier '{m}' at {at}"
                );
            }
            if let Some(outcome) = &step.expect.outcome {
                assert!(
                    matches!(outcome.as_str(), "default" | "suppress" | "select"),
                    "unknown outcome '{outcome}' at {at}"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(doc: &str) -> ScenarioFile {
        let file: ScenarioFile = toml::from_str(doc).unwrap();
        validate(&file, Path::new("inline.toml"));
        file
    }

    #[test]
    fn parses_steps_and_expectations() {
        let file = parse(
            r#"
            format = "phone-scenarios-v1"

            [[case]]
            id = "paste"
            config = { initial_country = "US" }

            [[case.step]]
            op = "paste"
            text = "555-1234"
            selection = [0, 0]
            expect = { buffer = "+1 5551234", caret_target = 10 }
            "#,
        );
        let case = &file.cases[0];
        assert_eq!(case.config["initial_country"].as_str(), Some("US"));
        assert_eq!(case.steps[0].selection, Some([0, 0]));
        assert_eq!(case.steps[0].expect.buffer.as_deref(), Some("+1 5551234"));
        assert!(!case.steps[0].hold);
    }

    #[test]
    #[should_panic(expected = "needs 'key'")]
    fn missing_required_field_panics() {
        parse(
            r#"
            format = "phone-scenarios-v1"
            [[case]]
            id = "bad"
            [[case.step]]
            op = "key"
            "#,
        );
    }

    #[test]
    #[should_panic(expected = "duplicate case id")]
    fn duplicate_ids_panic() {
        parse(
            r#"
            format = "phone-scenarios-v1"
            [[case]]
            id = "a"
            [[case.step]]
            op = "clear"
            [[case]]
            id = "a"
            [[case.step]]
            op = "clear"
            "#,
        );
    }
}
