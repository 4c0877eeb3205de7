//! Lexical recognition of placeholders in template text
//!
//! Two independent recognizers feed one shared namespace:
//! - Form A: `$` immediately followed by an identifier, e.g. `$PROJECT_NAME`
//! - Form B: an identifier wrapped in doubled braces, e.g. `{{PROJECT_NAME}}`
//!
//! Anything that does not match either form exactly (an unmatched `{{`, a
//! `$` followed by a non-identifier character, braces around something that
//! is not an identifier) is plain text and is never reported.

use std::collections::BTreeSet;

/// The surface syntax a placeholder occurrence was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderForm {
    /// `$NAME`
    Sigil,
    /// `{{NAME}}`
    Braced,
}

/// A single placeholder occurrence located in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOccurrence {
    /// The placeholder name, without any syntax markers
    pub name: String,
    /// Which syntax the occurrence was written in
    pub form: PlaceholderForm,
    /// Byte offset of the first marker character
    pub start: usize,
    /// Byte offset one past the last marker character
    pub end: usize,
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Scan a template left to right and collect every placeholder occurrence.
///
/// Occurrences are returned in text order with non-overlapping spans, so a
/// substitution pass can rebuild the output by walking them once.
pub fn scan(template: &str) -> Vec<PlaceholderOccurrence> {
    let bytes = template.as_bytes();
    let mut occurrences = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let matched = match bytes[pos] {
            b'{' => match_braced(template, pos),
            b'$' => match_sigil(template, pos),
            _ => None,
        };
        match matched {
            Some(occurrence) => {
                pos = occurrence.end;
                occurrences.push(occurrence);
            }
            None => pos += 1,
        }
    }

    occurrences
}

/// Collect the set of distinct placeholder names present in a template,
/// across both syntaxes.
pub fn placeholder_names(template: &str) -> BTreeSet<String> {
    scan(template)
        .into_iter()
        .map(|occurrence| occurrence.name)
        .collect()
}

/// Recognize `$NAME` at `start`. `start` must point at a `$`.
fn match_sigil(template: &str, start: usize) -> Option<PlaceholderOccurrence> {
    let bytes = template.as_bytes();
    let name_start = start + 1;
    if name_start >= bytes.len() || !is_ident_start(bytes[name_start]) {
        return None;
    }

    let mut end = name_start + 1;
    while end < bytes.len() && is_ident_continue(bytes[end]) {
        end += 1;
    }

    Some(PlaceholderOccurrence {
        name: template[name_start..end].to_string(),
        form: PlaceholderForm::Sigil,
        start,
        end,
    })
}

/// Recognize `{{NAME}}` at `start`. `start` must point at a `{`.
fn match_braced(template: &str, start: usize) -> Option<PlaceholderOccurrence> {
    let bytes = template.as_bytes();
    if start + 1 >= bytes.len() || bytes[start + 1] != b'{' {
        return None;
    }

    let name_start = start + 2;
    if name_start >= bytes.len() || !is_ident_start(bytes[name_start]) {
        return None;
    }

    let mut name_end = name_start + 1;
    while name_end < bytes.len() && is_ident_continue(bytes[name_end]) {
        name_end += 1;
    }

    if name_end + 1 >= bytes.len() || bytes[name_end] != b'}' || bytes[name_end + 1] != b'}' {
        return None;
    }

    Some(PlaceholderOccurrence {
        name: template[name_start..name_end].to_string(),
        form: PlaceholderForm::Braced,
        start,
        end: name_end + 2,
    })
}
