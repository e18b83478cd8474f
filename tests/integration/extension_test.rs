use modcheck::parsers::extensions::classify_paths;
use std::path::PathBuf;

fn flags_for(paths: &[&str]) -> modcheck::ExtensionFlags {
    let owned: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    classify_paths(owned.iter().map(|p| p.as_path()))
}

#[test]
fn homogeneous_ts_batch() {
    let flags = flags_for(&["a.ts", "b.ts"]);

    assert!(flags.is_ts);
    assert!(!flags.is_js);
    assert!(!flags.is_both);
    assert!(!flags.is_none);
}

#[test]
fn mixed_js_ts_batch_is_neither_homogeneous_nor_both() {
    let flags = flags_for(&["a.js", "b.ts"]);

    assert!(!flags.is_js);
    assert!(!flags.is_ts);
    // `is_both` requires both homogeneity checks to pass at once, which a
    // mixed batch cannot satisfy
    assert!(!flags.is_both);
    assert!(!flags.is_none);
}

#[test]
fn single_cjs_file_flags_the_batch() {
    assert!(flags_for(&["a.cjs"]).is_cjs);
}

#[test]
fn unrecognized_suffix_flags_is_none() {
    assert!(flags_for(&["a.txt"]).is_none);
}

#[test]
fn empty_batch_is_both_by_vacuous_truth() {
    // Every `all()` fold over an empty batch is vacuously true, so the empty
    // batch is the one input for which `is_both` holds. This is intentional
    // observable behavior, not an accident to correct.
    let flags = flags_for(&[]);

    assert!(flags.is_js);
    assert!(flags.is_ts);
    assert!(flags.is_both);
    assert!(flags.is_cjs);
    assert!(flags.is_jsx);
    assert!(!flags.is_none);
}

#[test]
fn mjs_and_js_share_a_group() {
    let flags = flags_for(&["a.js", "b.mjs"]);
    assert!(flags.is_js);
    assert!(!flags.is_both);
}

#[test]
fn mts_and_ts_share_a_group() {
    let flags = flags_for(&["a.ts", "b.mts"]);
    assert!(flags.is_ts);
}

#[test]
fn jsx_flavored_batch_spans_both_dialects() {
    let flags = flags_for(&["view.jsx", "panel.tsx"]);
    assert!(flags.is_jsx);
    assert!(!flags.is_js);
    assert!(!flags.is_ts);
}
