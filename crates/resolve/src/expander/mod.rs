//! Token substitution over a button's lookup chain.
//!
//! Rewrites `${key}` and `${transform:key}` tokens with the values the
//! resolver finds. Substitution is recursive: a fetched value's own
//! tokens are expanded within the same top-level call, while the key
//! being expanded stays in the visited set. A key met again during its
//! own expansion is a cycle and its token is emitted verbatim; once a
//! key's expansion finishes it leaves the set, so sibling positions may
//! reuse it.
//!
//! Everything here is total. Escaped tokens lose one backslash per
//! pass, and a token that cannot be resolved stays literal in the
//! output, which keeps configuration typos visible in the rendered
//! panel instead of silently vanishing.

use rustc_hash::FxHashSet;
use switchboard_expand::{Segment, Token, Transform, scan};
use switchboard_schema::ButtonConfig;

use crate::resolver::Resolver;


/// Rewrites every token in `text`. `visited` holds the keys currently
/// being expanded in this top-level call.
pub(crate) fn substitute(
	resolver: &Resolver<'_>,
	record: &ButtonConfig,
	text: &str,
	visited: &mut FxHashSet<String>,
) -> String {
	let mut out = String::with_capacity(text.len());
	for segment in scan(text) {
		match segment {
			Segment::Literal(literal) => out.push_str(literal),
			Segment::Escaped(escaped) => out.push_str(&escaped.peel()),
			Segment::Token(token) => {
				out.push_str(&substitute_token(resolver, record, &token, visited));
			}
		}
	}
	out
}

/// One token: cycle check, raw fetch, nested expansion, transform.
fn substitute_token(
	resolver: &Resolver<'_>,
	record: &ButtonConfig,
	token: &Token<'_>,
	visited: &mut FxHashSet<String>,
) -> String {
	if visited.contains(token.key) {
		return token.raw.to_string();
	}
	visited.insert(token.key.to_string());

	let substituted = match resolver.token_raw(record, token.key) {
		Some(value) if !value.is_empty() => {
			// The fetch was raw; the value's own tokens expand here,
			// with this key still marked visited.
			let expanded = substitute(resolver, record, &value, visited);
			match token.transform.and_then(Transform::parse) {
				Some(transform) => transform.apply(&expanded),
				None => expanded,
			}
		}
		// Absent or empty: keep the token visible.
		_ => token.raw.to_string(),
	};

	visited.remove(token.key);
	substituted
}
