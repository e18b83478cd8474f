use modcheck::{BatchAnalyzer, FileVerdict, SourceUnit};

fn unit(path: &str, text: &str) -> SourceUnit {
    SourceUnit::new(path, text)
}

#[test]
fn all_esm_batch_counts_every_file() {
    let units = vec![
        unit("a.ts", "import { b } from './b';\nexport const a = b;"),
        unit("b.ts", "export const b = 1;"),
        unit("c.mjs", "export default 42;"),
    ];

    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.tally.esm_count, units.len());
    assert_eq!(report.tally.cjs_count, 0);
    assert_eq!(report.tally.unknown_count, 0);
}

#[test]
fn all_cjs_batch_counts_every_file() {
    let units = vec![
        unit("a.js", "const b = require('./b');"),
        unit("b.js", "module.exports = { b: 1 };"),
        unit("c.js", "exports.helper = () => 1;"),
    ];

    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.tally.cjs_count, units.len());
    assert_eq!(report.tally.esm_count, 0);
}

#[test]
fn import_plus_require_is_esm_not_ambiguous() {
    let units = vec![unit(
        "hybrid.ts",
        "import { a } from './a';\nconst legacy = require('./legacy');",
    )];

    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.files[0].verdict, FileVerdict::MixedEsm);
    assert_eq!(report.tally.esm_count, 1);
    assert_eq!(report.tally.cjs_count, 0);
    assert_eq!(report.tally.unknown_count, 0);
}

#[test]
fn invalid_source_increments_unknown_and_isolates() {
    let units = vec![
        unit("ok1.ts", "export const a = 1;"),
        unit("broken.ts", "export const = = {;"),
        unit("ok2.ts", "const b = require('./b');"),
    ];

    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.tally.unknown_count, 1);
    assert_eq!(report.tally.esm_count, 1);
    assert_eq!(report.tally.cjs_count, 1);
    assert_eq!(report.files[1].verdict, FileVerdict::Unknown);
    assert!(report.files[1].detail.is_some());
}

#[test]
fn export_modifier_counts_even_in_a_commonjs_heavy_file() {
    // The export-modifier rule fires on its own; the file-level verdict is
    // decided by the accumulated flags, not by any single node
    let units = vec![unit(
        "mixed.ts",
        "export const a = 1;\nmodule.exports = { a };",
    )];

    let report = BatchAnalyzer::new().analyze(&units);

    assert_eq!(report.files[0].verdict, FileVerdict::MixedEsm);
    assert_eq!(report.tally.esm_count, 1);
}

#[test]
fn rerunning_the_same_batch_is_idempotent() {
    let units = vec![
        unit("a.ts", "export const a = 1;"),
        unit("b.js", "module.exports = 1;"),
        unit("c.ts", "const neutral = true;"),
        unit("d.ts", "%%% not source"),
    ];

    let analyzer = BatchAnalyzer::new();
    let first = analyzer.analyze(&units);
    let second = analyzer.analyze(&units);

    assert_eq!(first.tally, second.tally);
    assert_eq!(first.extensions, second.extensions);
    assert_eq!(first.batch_size, second.batch_size);
}
