//! Shape checks over parsed source definitions.
//!
//! Both checks take an untyped YAML tree and inspect it by tag: a
//! document is only examined further when it is a mapping.

use serde_yaml::{Mapping, Value};

use crate::report::DetectedControl;

/// Screens must carry this property, at the top level or under `App`.
pub const REQUIRED_SCREEN_PROPERTY: &str = "Fill";

/// Root wrapper keys exempt from the positioning warning.
const RESERVED_ROOT_KEYS: [&str; 2] = ["App", "Host"];

/// Findings from a single structural check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub controls: Vec<DetectedControl>,
}

/// Check a screen (or root app definition) document.
pub fn check_screen_structure(data: &Value, screen_name: &str) -> Findings {
    let mut findings = Findings::default();

    let Value::Mapping(root) = data else {
        findings
            .errors
            .push(format!("Screen {screen_name} should be a dictionary"));
        return findings;
    };

    if !root.contains_key(REQUIRED_SCREEN_PROPERTY) && !app_wrapper_has_fill(root) {
        findings.errors.push(format!(
            "Screen {screen_name} missing required property: {REQUIRED_SCREEN_PROPERTY}"
        ));
    }

    for (key, value) in root {
        let Value::Mapping(node) = value else {
            continue;
        };
        let name = key_text(key);
        if let Some(tag) = node.get("As") {
            findings.controls.push(DetectedControl {
                name: name.clone(),
                control_type: control_type(tag),
            });
            let positioned = node.contains_key("X") || node.contains_key("Width");
            if !positioned && !RESERVED_ROOT_KEYS.contains(&name.as_str()) {
                findings.warnings.push(format!(
                    "Control {name} in {screen_name} might be missing positioning properties"
                ));
            }
        } else if name == "App" {
            // Controls hosted one level under the app wrapper.
            for (child_key, child) in node {
                if let Value::Mapping(child) = child {
                    if let Some(tag) = child.get("As") {
                        findings.controls.push(DetectedControl {
                            name: key_text(child_key),
                            control_type: control_type(tag),
                        });
                    }
                }
            }
        }
    }

    tracing::debug!(
        screen = screen_name,
        controls = findings.controls.len(),
        "checked screen structure"
    );
    findings
}

/// Check the app properties document.
pub fn check_app_structure(data: &Value) -> Findings {
    let mut findings = Findings::default();

    let Value::Mapping(root) = data else {
        findings
            .errors
            .push("App data should be a dictionary".to_string());
        return findings;
    };

    if let Some(Value::Mapping(properties)) = root.get("Properties") {
        if !properties.contains_key("Theme") {
            findings
                .warnings
                .push("App missing Theme property".to_string());
        }
    }

    findings
}

fn app_wrapper_has_fill(root: &Mapping) -> bool {
    matches!(
        root.get("App"),
        Some(Value::Mapping(app)) if app.contains_key(REQUIRED_SCREEN_PROPERTY)
    )
}

/// Control type: the `As` value up to its first `.`, or the whole value.
fn control_type(tag: &Value) -> String {
    let text = scalar_text(tag);
    match text.split_once('.') {
        Some((head, _)) => head.to_string(),
        None => text,
    }
}

fn key_text(key: &Value) -> String {
    scalar_text(key)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn screen_with_fill_and_positioned_control_is_clean() {
        let data = yaml(
            "Fill: RGBA(1,1,1,1)\n\
             Label1:\n  As: label\n  X: 10\n  Y: 20\n",
        );
        let findings = check_screen_structure(&data, "Screen1");
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
        assert_eq!(
            findings.controls,
            vec![DetectedControl {
                name: "Label1".to_string(),
                control_type: "label".to_string()
            }]
        );
    }

    #[test]
    fn missing_fill_is_exactly_one_error() {
        let findings = check_screen_structure(&yaml("Color: Red\n"), "Screen1");
        assert_eq!(
            findings.errors,
            vec!["Screen Screen1 missing required property: Fill".to_string()]
        );
    }

    #[test]
    fn adding_fill_removes_error_without_touching_warnings() {
        let without = yaml("Button1:\n  As: button\n");
        let with = yaml("Fill: White\nButton1:\n  As: button\n");
        let a = check_screen_structure(&without, "Screen2");
        let b = check_screen_structure(&with, "Screen2");
        assert_eq!(a.errors.len(), 1);
        assert!(b.errors.is_empty());
        assert_eq!(a.warnings, b.warnings);
        assert_eq!(b.warnings.len(), 1);
    }

    #[test]
    fn nested_app_fill_suppresses_missing_fill() {
        let data = yaml("App:\n  Fill: White\n  OnStart: Set(x, 1)\n");
        let findings = check_screen_structure(&data, "App.fx");
        assert!(findings.errors.is_empty());
    }

    #[test]
    fn nested_app_without_fill_still_errors() {
        let data = yaml("App:\n  OnStart: Set(x, 1)\n");
        let findings = check_screen_structure(&data, "App.fx");
        assert_eq!(findings.errors.len(), 1);
    }

    #[test]
    fn non_mapping_screen_is_one_error() {
        let findings = check_screen_structure(&yaml("- a\n- b\n"), "Screen3");
        assert_eq!(
            findings.errors,
            vec!["Screen Screen3 should be a dictionary".to_string()]
        );
        assert!(findings.warnings.is_empty());
        assert!(findings.controls.is_empty());
    }

    #[test]
    fn control_type_is_prefix_before_dot() {
        let data = yaml(
            "Fill: White\n\
             Gallery1:\n  As: gallery.galleryVertical\n  Width: 300\n",
        );
        let findings = check_screen_structure(&data, "Screen1");
        assert_eq!(findings.controls[0].control_type, "gallery");
    }

    #[test]
    fn unpositioned_control_warns() {
        let data = yaml("Fill: White\nIcon1:\n  As: icon.Add\n  Height: 40\n");
        let findings = check_screen_structure(&data, "Screen1");
        assert_eq!(
            findings.warnings,
            vec!["Control Icon1 in Screen1 might be missing positioning properties".to_string()]
        );
    }

    #[test]
    fn reserved_roots_do_not_warn() {
        let data = yaml(
            "Fill: White\n\
             Host:\n  As: hostControl.DefaultHostControlVariant\n",
        );
        let findings = check_screen_structure(&data, "App.fx");
        assert!(findings.warnings.is_empty());
        assert_eq!(findings.controls[0].control_type, "hostControl");
    }

    #[test]
    fn controls_under_app_wrapper_are_detected_without_warnings() {
        let data = yaml(
            "App:\n  Fill: White\n  Host:\n    As: hostControl.DefaultHostControlVariant\n  Note: plain\n",
        );
        let findings = check_screen_structure(&data, "App.fx");
        assert!(findings.errors.is_empty());
        assert!(findings.warnings.is_empty());
        assert_eq!(
            findings.controls,
            vec![DetectedControl {
                name: "Host".to_string(),
                control_type: "hostControl".to_string()
            }]
        );
    }

    #[test]
    fn app_with_as_tag_is_a_control_not_a_wrapper() {
        let data = yaml("Fill: White\nApp:\n  As: appinfo\n  Host:\n    As: hostControl\n");
        let findings = check_screen_structure(&data, "App.fx");
        let names: Vec<&str> = findings.controls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["App"]);
        assert!(findings.warnings.is_empty());
    }

    #[test]
    fn numeric_as_value_is_rendered() {
        let data = yaml("Fill: White\nOdd:\n  As: 7\n  X: 0\n");
        let findings = check_screen_structure(&data, "Screen1");
        assert_eq!(findings.controls[0].control_type, "7");
    }

    #[test]
    fn app_properties_without_theme_warns() {
        let findings = check_app_structure(&yaml("Properties:\n  Name: Demo\n"));
        assert!(findings.errors.is_empty());
        assert_eq!(findings.warnings, vec!["App missing Theme property".to_string()]);
    }

    #[test]
    fn app_properties_with_theme_is_clean() {
        let findings = check_app_structure(&yaml("Properties:\n  Theme: Light\n"));
        assert_eq!(findings, Findings::default());
    }

    #[test]
    fn app_without_properties_is_clean() {
        let findings = check_app_structure(&yaml("Version: 1\n"));
        assert_eq!(findings, Findings::default());
    }

    #[test]
    fn non_mapping_app_is_an_error() {
        let findings = check_app_structure(&yaml("just text\n"));
        assert_eq!(
            findings.errors,
            vec!["App data should be a dictionary".to_string()]
        );
    }
}
