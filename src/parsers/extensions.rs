//! Suffix-based dialect classification over a batch of paths
//!
//! A cheap set-membership check: each recognized suffix belongs to exactly one
//! closed group, and the batch-level flags are every-file folds over those
//! groups. The module-format analyzer runs independently of these flags.

use crate::models::report::ExtensionFlags;
use crate::models::source_unit::{suffix_of, SourceUnit};
use std::path::Path;

/// CommonJS-only JavaScript suffixes
const CJS_JS: &[&str] = &["cjs"];
/// CommonJS-only TypeScript suffixes
const CJS_TS: &[&str] = &["cts"];
/// ECMAScript-module JavaScript suffixes
const ESM_JS: &[&str] = &["js", "mjs"];
/// ECMAScript-module TypeScript suffixes
const ESM_TS: &[&str] = &["ts", "mts"];
/// JSX-flavored suffixes
const JSX: &[&str] = &["jsx", "tsx"];

/// Whether a path carries any recognized source suffix
pub fn is_recognized(path: &Path) -> bool {
    match suffix_of(path) {
        Some(suffix) => [CJS_JS, CJS_TS, ESM_JS, ESM_TS, JSX]
            .iter()
            .any(|group| group.contains(&suffix)),
        None => false,
    }
}

/// Classify a batch of paths into the six homogeneity flags.
///
/// All every-file flags use `Iterator::all`, so an empty batch satisfies each
/// of them vacuously - including `is_both`, which is the only way `is_both`
/// can ever be true. That behavior is load-bearing for the caller and must
/// not change.
pub fn classify_paths<'p>(paths: impl IntoIterator<Item = &'p Path>) -> ExtensionFlags {
    let suffixes: Vec<Option<&str>> = paths.into_iter().map(suffix_of).collect();

    let in_group = |group: &[&str], suffix: &Option<&str>| match suffix {
        Some(s) => group.contains(s),
        None => false,
    };
    let every = |group: &[&str]| suffixes.iter().all(|s| in_group(group, s));

    let is_none = suffixes.iter().any(|s| {
        ![CJS_JS, CJS_TS, ESM_JS, ESM_TS, JSX]
            .iter()
            .any(|&group| in_group(group, s))
    });
    let is_cjs = every(CJS_JS) || every(CJS_TS);
    let is_jsx = every(JSX);
    let is_js = every(ESM_JS);
    let is_ts = every(ESM_TS);

    ExtensionFlags {
        is_none,
        is_cjs,
        is_jsx,
        is_js,
        is_ts,
        is_both: is_js && is_ts,
    }
}

/// Classify a batch of source units
pub fn classify(units: &[SourceUnit]) -> ExtensionFlags {
    classify_paths(units.iter().map(|unit| unit.path.as_path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn flags(paths: &[&str]) -> ExtensionFlags {
        let owned: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        classify_paths(owned.iter().map(|p| p.as_path()))
    }

    #[test]
    fn homogeneous_typescript_batch() {
        let f = flags(&["a.ts", "b.ts"]);
        assert!(f.is_ts);
        assert!(!f.is_js);
        assert!(!f.is_both);
        assert!(!f.is_none);
    }

    #[test]
    fn mixed_js_and_ts_is_not_both() {
        let f = flags(&["a.js", "b.ts"]);
        assert!(!f.is_js);
        assert!(!f.is_ts);
        assert!(!f.is_both);
        assert!(!f.is_none);
    }

    #[test]
    fn cjs_suffix_batch() {
        let f = flags(&["a.cjs"]);
        assert!(f.is_cjs);
        assert!(!f.is_js);
    }

    #[test]
    fn cts_suffix_batch_is_also_cjs() {
        assert!(flags(&["a.cts", "b.cts"]).is_cjs);
        // A mix of the two CommonJS groups is not homogeneous in either
        assert!(!flags(&["a.cjs", "b.cts"]).is_cjs);
    }

    #[test]
    fn unrecognized_suffix_sets_is_none() {
        assert!(flags(&["a.txt"]).is_none);
        assert!(flags(&["a.ts", "b.txt"]).is_none);
        assert!(flags(&["README"]).is_none);
    }

    #[test]
    fn jsx_flavored_batch() {
        let f = flags(&["a.jsx", "b.tsx"]);
        assert!(f.is_jsx);
        assert!(!f.is_none);
    }

    #[test]
    fn empty_batch_is_vacuously_everything_except_none() {
        let f = flags(&[]);
        assert!(!f.is_none);
        assert!(f.is_cjs);
        assert!(f.is_jsx);
        assert!(f.is_js);
        assert!(f.is_ts);
        assert!(f.is_both);
    }

    #[test]
    fn recognized_union_covers_all_groups() {
        for path in ["a.js", "a.mjs", "a.cjs", "a.ts", "a.mts", "a.cts", "a.jsx", "a.tsx"] {
            assert!(is_recognized(Path::new(path)), "{path} should be recognized");
        }
        assert!(!is_recognized(Path::new("a.json")));
        assert!(!is_recognized(Path::new("Makefile")));
    }
}
