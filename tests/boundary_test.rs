use release_versions::boundary::BoundaryWarning;
use release_versions::domain::{TagSnapshot, Version};
use release_versions::resolution::{resolution_warnings, resolve};
use release_versions::ui;

#[test]
fn test_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "vv7.8.2-rc.1".to_string(),
        reason: "unexpected character 'v'".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("vv7.8.2-rc.1"),
        "Message should contain the tag, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("unexpected character"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_stable_already_tagged_display() {
    let warning = BoundaryWarning::StableAlreadyTagged {
        version: Version::new(1, 0, 1),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v1.0.1"),
        "Message should contain the version, got: {}",
        display_msg
    );
}

#[test]
fn test_warnings_for_noisy_history() {
    let tags = TagSnapshot::new([
        "v7.8.2-rc.2",
        "vv7.8.2-rc.1",
        "nightly-2024-01-01",
        "v7.8.1",
    ]);
    let result = resolve("v7.8.1", "patch", &tags).unwrap();
    let warnings = resolution_warnings(&result, &tags);

    let skipped: Vec<&str> = warnings
        .iter()
        .filter_map(|w| match w {
            BoundaryWarning::UnparsableTag { tag, .. } => Some(tag.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(skipped, vec!["vv7.8.2-rc.1", "nightly-2024-01-01"]);
    assert!(!warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::StableAlreadyTagged { .. })));
}

#[test]
fn test_clean_history_has_no_warnings() {
    let tags = TagSnapshot::new(["v1.0.0", "v1.0.1-beta.1"]);
    let result = resolve("v1.0.0", "patch", &tags).unwrap();
    assert!(resolution_warnings(&result, &tags).is_empty());
}

#[test]
fn test_warning_formatting_includes_marker() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "junk".to_string(),
        reason: "not a version".to_string(),
    };
    let formatted = console::strip_ansi_codes(&ui::format_warning(&warning)).to_string();
    assert_eq!(formatted, "⚠ WARNING: Ignoring tag 'junk': not a version");
}
