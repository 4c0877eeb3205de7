//! Property-based tests for the render invariants
//!
//! Covers the renderer's contract: identity on placeholder-free text,
//! resolved names absent from the output, unresolved names left verbatim,
//! determinism, and idempotence on fully resolved output.

use std::collections::BTreeSet;

use proptest::prelude::*;

use groundwork_templates::{scanner, DefaultTable, RenderContext, TemplateRenderer};

/// Strategy for valid placeholder names
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,10}".prop_map(|s| s.to_string())
}

/// Strategy for values free of placeholder-like text
fn plain_value_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 .,-]{0,20}".prop_map(|s| s.to_string())
}

/// Strategy for literal text free of placeholder markers
fn literal_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 \n.,:;!?()-]{0,30}".prop_map(|s| s.to_string())
}

proptest! {
    /// Property: templates without placeholders render to themselves with an
    /// empty unresolved set, regardless of context.
    #[test]
    fn prop_placeholder_free_template_is_identity(
        literal in literal_strategy(),
        name in name_strategy(),
        value in plain_value_strategy(),
    ) {
        prop_assume!(scanner::scan(&literal).is_empty());

        let renderer = TemplateRenderer::new(DefaultTable::standard());
        let context = RenderContext::from_iter([(name, value)]);
        let result = renderer.render(&literal, &context);

        prop_assert_eq!(result.content, literal);
        prop_assert!(result.unresolved.is_empty());
    }

    /// Property: a name provided in the context never survives in any
    /// placeholder syntax and is never reported unresolved.
    #[test]
    fn prop_resolved_names_absent_from_output(
        prefix in literal_strategy(),
        suffix in literal_strategy(),
        name in name_strategy(),
        value in plain_value_strategy(),
    ) {
        let template = format!("{prefix}${name} {{{{{name}}}}}{suffix}");
        let renderer = TemplateRenderer::new(DefaultTable::empty());
        let context = RenderContext::from_iter([(name.clone(), value)]);
        let result = renderer.render(&template, &context);

        prop_assert!(!result.unresolved.contains(&name));
        let remaining = scanner::placeholder_names(&result.content);
        prop_assert!(!remaining.contains(&name));
    }

    /// Property: a name absent from both the context and the default table
    /// keeps every occurrence verbatim and is reported exactly once.
    #[test]
    fn prop_unresolved_names_stay_verbatim(
        name in name_strategy(),
        literal in literal_strategy(),
    ) {
        let template = format!("${name} {literal} {{{{{name}}}}}");
        let renderer = TemplateRenderer::new(DefaultTable::empty());
        let result = renderer.render(&template, &RenderContext::new());

        prop_assert_eq!(&result.content, &template);
        let mut expected = BTreeSet::new();
        expected.insert(name);
        prop_assert_eq!(result.unresolved, expected);
    }

    /// Property: rendering is deterministic.
    #[test]
    fn prop_render_is_deterministic(
        template in "[a-zA-Z0-9 ${}_\n]{0,60}",
        name in name_strategy(),
        value in plain_value_strategy(),
    ) {
        let renderer = TemplateRenderer::new(DefaultTable::standard());
        let context = RenderContext::from_iter([(name, value)]);

        let first = renderer.render(&template, &context);
        let second = renderer.render(&template, &context);
        prop_assert_eq!(first, second);
    }

    /// Property: re-rendering fully resolved output is a no-op when the
    /// resolved values contain no placeholder-like text.
    #[test]
    fn prop_idempotent_on_resolved_output(
        prefix in literal_strategy(),
        name in name_strategy(),
        value in plain_value_strategy(),
    ) {
        prop_assume!(scanner::scan(&value).is_empty());

        let template = format!("{prefix}${name} and {{{{{name}}}}}");
        let renderer = TemplateRenderer::new(DefaultTable::empty());
        let context = RenderContext::from_iter([(name, value)]);

        let first = renderer.render(&template, &context);
        prop_assume!(first.is_fully_resolved());
        let second = renderer.render(&first.content, &context);
        prop_assert_eq!(second, first);
    }
}
