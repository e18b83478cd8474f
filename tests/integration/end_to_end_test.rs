use modcheck::{
    BatchAnalyzer, PolicyViolation, Settings, SourceUnit, Walker,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn lenient_report_for_a_single_esm_typescript_file() {
    let units = vec![SourceUnit::new("x.ts", "export const a = 1;")];

    let report = BatchAnalyzer::new().analyze(&units);
    let lenient = report.lenient();

    assert!(lenient.is_ts);
    assert!(!lenient.is_js);
    assert!(!lenient.is_both);
    assert!(!lenient.is_none);
    assert!(!lenient.is_jsx);
    assert!(!lenient.is_cjs);
    assert_eq!(lenient.unknown_count, 0);
    assert_eq!(lenient.cjs_count, 0);
}

#[test]
fn lenient_json_matches_the_wire_contract() {
    let units = vec![SourceUnit::new("x.ts", "export const a = 1;")];
    let report = BatchAnalyzer::new().analyze(&units);

    let value = serde_json::to_value(report.lenient()).unwrap();

    assert_eq!(value["isTs"], true);
    assert_eq!(value["isJs"], false);
    assert_eq!(value["isBoth"], false);
    assert_eq!(value["isNone"], false);
    assert_eq!(value["isJsx"], false);
    assert_eq!(value["isCjs"], false);
    assert_eq!(value["unknownCount"], 0);
    assert_eq!(value["cjsCount"], 0);
    assert_eq!(value.as_object().unwrap().len(), 8);
}

#[test]
fn collected_tree_flows_through_the_analyzer() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("src/index.ts"),
        "import { util } from './util';\nexport const main = util;",
    )
    .unwrap();
    fs::write(dir.path().join("src/util.ts"), "export const util = 1;").unwrap();
    fs::write(dir.path().join("README.md"), "# not source").unwrap();

    let settings = Settings {
        scan_path: dir.path().to_path_buf(),
        ..Settings::default()
    };
    let units = Walker::new(settings).collect().unwrap();
    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.batch_size, 2);
    assert_eq!(report.tally.esm_count, 2);
    assert!(report.extensions.is_ts);
    assert!(!report.extensions.is_none);
    assert!(report.violations().is_empty());
}

#[test]
fn commonjs_sources_fail_the_format_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.js"), "module.exports = 1;").unwrap();
    fs::write(dir.path().join("b.js"), "export const b = 1;").unwrap();

    let settings = Settings {
        scan_path: dir.path().to_path_buf(),
        ..Settings::default()
    };
    let units = Walker::new(settings).collect().unwrap();
    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(
        report.format_violations(),
        vec![PolicyViolation::CommonJsSource { count: 1 }]
    );
}

#[test]
fn cjs_suffixed_tree_fails_the_extension_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("legacy.cjs"), "module.exports = 1;").unwrap();

    let settings = Settings {
        scan_path: dir.path().to_path_buf(),
        ..Settings::default()
    };
    let units = Walker::new(settings).collect().unwrap();
    let report = BatchAnalyzer::new().analyze(&units);

    let violations = report.extension_violations();
    assert!(violations.contains(&PolicyViolation::CommonJsExtension));
    // Extension warnings come with human-readable text
    assert!(violations[0].warning().starts_with("warning:"));
}

#[test]
fn broken_file_in_a_tree_is_isolated_and_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.ts"), "export const ok = 1;").unwrap();
    fs::write(dir.path().join("bad.ts"), "const = broken ((").unwrap();

    let settings = Settings {
        scan_path: dir.path().to_path_buf(),
        ..Settings::default()
    };
    let units = Walker::new(settings).collect().unwrap();
    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.tally.unknown_count, 1);
    assert_eq!(report.tally.esm_count, 1);
    assert_eq!(
        report.format_violations(),
        vec![PolicyViolation::UnclassifiableSource { count: 1 }]
    );
}
