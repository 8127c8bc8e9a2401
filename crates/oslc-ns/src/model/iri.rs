//! Syntax checks and escaping for prefixes, namespace URIs and local names.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that need percent-encoding in a local name appended to a namespace.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3987, and leave `%`
/// alone so already-escaped local names pass through.
const LOCAL_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Escape a local name for use as the tail of an IRI.
///
/// Only ASCII delimiters and control characters are encoded; other non-ASCII
/// characters are legal in IRIs and pass through.
pub fn escape_local(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (start, c) in value.char_indices() {
        if c.is_ascii() || c.is_control() {
            let end = start + c.len_utf8();
            out.extend(utf8_percent_encode(&value[start..end], LOCAL_ENCODE_SET));
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether `prefix` is usable as a Turtle/SPARQL prefix label.
///
/// The empty prefix is allowed (default namespace). Otherwise the label must
/// start with a letter, continue with letters, digits, `_`, `-` or `.`, and
/// not end with `.`.
pub fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    first.is_alphabetic()
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !prefix.ends_with('.')
}

/// Whether `uri` has a scheme followed by a non-empty, delimiter-free remainder.
pub fn is_absolute_uri(uri: &str) -> bool {
    let Some((scheme, rest)) = uri.split_once(':') else {
        return false;
    };
    let mut scheme_chars = scheme.chars();
    let scheme_ok = scheme_chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    scheme_ok
        && !rest.is_empty()
        && !rest
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
}

/// Whether `local` can follow `prefix:` without escaping.
pub fn is_simple_local(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !local.ends_with('.')
}
