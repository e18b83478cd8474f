//! Module-format detection via exhaustive AST traversal
//!
//! The detector walks every node of a parsed program and OR-accumulates two
//! marker flags: ESM syntax (import/export declarations in any form) and
//! CommonJS usage (`require(...)` calls, `module.exports`/`exports.` member
//! accesses). Detection is structural and textual only - no scope or binding
//! analysis. A user-defined function literally named `require` fires the
//! CommonJS marker; that false positive is an accepted tradeoff for speed and
//! must stay.

use crate::models::verdict::FormatSignals;
use oxc_ast::ast::{
    CallExpression, ComputedMemberExpression, ExportAllDeclaration, ExportDefaultDeclaration,
    ExportNamedDeclaration, ExportSpecifier, Expression, ImportDeclaration, Program,
    StaticMemberExpression, TSExportAssignment, TSImportEqualsDeclaration,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;

/// Literal prefixes that mark a member access as CommonJS export usage
const CJS_MEMBER_PREFIXES: &[&str] = &["module.exports", "exports."];

/// Visitor that accumulates the two module-format marker flags for one file
pub struct FormatDetector<'a> {
    source_text: &'a str,
    signals: FormatSignals,
    failure: Option<String>,
}

impl<'a> FormatDetector<'a> {
    /// Walk a program and return its marker flags.
    ///
    /// Returns `Err` with the raw fault detail if the traversal hits a node
    /// whose span does not address the source text; the caller records the
    /// file as unclassifiable and moves on to the next unit.
    pub fn detect(program: &Program<'a>, source_text: &'a str) -> Result<FormatSignals, String> {
        let mut detector = Self {
            source_text,
            signals: FormatSignals::default(),
            failure: None,
        };
        detector.visit_program(program);

        match detector.failure {
            Some(detail) => Err(detail),
            None => Ok(detector.signals),
        }
    }

    /// Match a member expression's own span text against the CommonJS
    /// prefixes.
    ///
    /// A span that does not address the source text cleanly is a traversal
    /// fault; the first one encountered is kept as the failure detail for the
    /// whole file.
    fn check_member_text(&mut self, span: Span) {
        let source = self.source_text;
        match source.get(span.start as usize..span.end as usize) {
            Some(text) => {
                if CJS_MEMBER_PREFIXES
                    .iter()
                    .any(|prefix| text.starts_with(prefix))
                {
                    self.signals.has_cjs_marker = true;
                }
            }
            None => {
                if self.failure.is_none() {
                    self.failure = Some(format!(
                        "node span {}..{} does not address the source text ({} bytes)",
                        span.start,
                        span.end,
                        source.len()
                    ));
                }
            }
        }
    }
}

impl<'a> Visit<'a> for FormatDetector<'a> {
    fn visit_import_declaration(&mut self, it: &ImportDeclaration<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_import_declaration(self, it);
    }

    fn visit_ts_import_equals_declaration(&mut self, it: &TSImportEqualsDeclaration<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_ts_import_equals_declaration(self, it);
    }

    // Declarations carrying an export modifier arrive wrapped in one of the
    // export declaration nodes, so these arms also cover `export const x`,
    // `export function f`, `export interface I` and friends.
    fn visit_export_named_declaration(&mut self, it: &ExportNamedDeclaration<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_export_named_declaration(self, it);
    }

    fn visit_export_default_declaration(&mut self, it: &ExportDefaultDeclaration<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_export_default_declaration(self, it);
    }

    fn visit_export_all_declaration(&mut self, it: &ExportAllDeclaration<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_export_all_declaration(self, it);
    }

    fn visit_export_specifier(&mut self, it: &ExportSpecifier<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_export_specifier(self, it);
    }

    fn visit_ts_export_assignment(&mut self, it: &TSExportAssignment<'a>) {
        self.signals.has_esm_marker = true;
        walk::walk_ts_export_assignment(self, it);
    }

    fn visit_call_expression(&mut self, it: &CallExpression<'a>) {
        // A call to the bare identifier `require` with at least one argument.
        // No check that `require` resolves to the CommonJS builtin.
        if let Expression::Identifier(ident) = &it.callee {
            if ident.name == "require" && !it.arguments.is_empty() {
                self.signals.has_cjs_marker = true;
            }
        }
        walk::walk_call_expression(self, it);
    }

    fn visit_static_member_expression(&mut self, it: &StaticMemberExpression<'a>) {
        self.check_member_text(it.span);
        walk::walk_static_member_expression(self, it);
    }

    fn visit_computed_member_expression(&mut self, it: &ComputedMemberExpression<'a>) {
        self.check_member_text(it.span);
        walk::walk_computed_member_expression(self, it);
    }
}
