//! Scanner for the `${...}` substitution grammar.
//!
//! ## Grammar
//!
//! ```text
//! token     = "$" escape* "{" body "}"
//! escape    = "\"
//! body      = (transform ":")? key
//! transform = word
//! key       = word
//! word      = (alnum | "_")+
//! ```
//!
//! The scan is a single left-to-right pass producing non-overlapping
//! matches. Anything that fails the grammar is literal text: a bare `$`,
//! an empty body, an unterminated brace, or any other character between
//! the braces. A backslash run between the `$` and the `{` marks the
//! token as escaped; escaped tokens are never expanded, they lose one
//! backslash per pass instead.

/// One piece of a scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
	/// Text outside any token, emitted unchanged.
	Literal(&'a str),
	/// A well-formed, unescaped token.
	Token(Token<'a>),
	/// A token with backslashes before the brace; expansion is
	/// suppressed and one backslash is peeled per pass.
	Escaped(Escaped<'a>),
}

/// An unescaped `${key}` or `${transform:key}` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
	/// The exact matched text, for verbatim fallback when the key does
	/// not resolve.
	pub raw: &'a str,
	/// Transform name before the `:`, if any. Not validated here;
	/// unknown names are the caller's concern.
	pub transform: Option<&'a str>,
	/// Substitution key: a `set` name or, when pure digits, a `setList`
	/// index.
	pub key: &'a str,
}

/// An escaped occurrence such as `$\{key}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped<'a> {
	/// Number of backslashes between the `$` and the `{`. Always >= 1.
	pub depth: usize,
	/// Body between the braces, preserved literally on output,
	/// including any transform prefix.
	pub body: &'a str,
}

impl Escaped<'_> {
	/// Renders the escape with one backslash removed.
	pub fn peel(&self) -> String {
		let mut out = String::with_capacity(self.body.len() + self.depth + 2);
		out.push('$');
		for _ in 1..self.depth {
			out.push('\\');
		}
		out.push('{');
		out.push_str(self.body);
		out.push('}');
		out
	}
}

/// Splits `text` into literal runs and substitution tokens.
///
/// Total: every input yields a segment list, and the literal runs plus
/// the matched token texts cover the input exactly.
pub fn scan(text: &str) -> Vec<Segment<'_>> {
	let mut segments = Vec::new();
	let mut lit_start = 0;
	let mut pos = 0;

	while let Some(offset) = text[pos..].find('$') {
		let dollar = pos + offset;
		match match_at(text, dollar) {
			Some((segment, end)) => {
				if lit_start < dollar {
					segments.push(Segment::Literal(&text[lit_start..dollar]));
				}
				segments.push(segment);
				pos = end;
				lit_start = end;
			}
			// Not a token here; keep the `$` literal and look past it.
			None => pos = dollar + 1,
		}
	}

	if lit_start < text.len() {
		segments.push(Segment::Literal(&text[lit_start..]));
	}

	segments
}

fn is_word(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Tries to match one token starting at the `$` at `start`.
///
/// Returns the segment and the byte offset just past it. All structural
/// characters are ASCII, so byte offsets always sit on char boundaries.
fn match_at(text: &str, start: usize) -> Option<(Segment<'_>, usize)> {
	let bytes = text.as_bytes();
	debug_assert_eq!(bytes[start], b'$');

	let mut i = start + 1;
	let mut depth = 0;
	while bytes.get(i) == Some(&b'\\') {
		depth += 1;
		i += 1;
	}

	if bytes.get(i) != Some(&b'{') {
		return None;
	}
	i += 1;
	let body_start = i;

	while bytes.get(i).is_some_and(|b| is_word(*b)) {
		i += 1;
	}
	if i == body_start {
		return None;
	}

	let mut transform = None;
	let mut key_start = body_start;
	if bytes.get(i) == Some(&b':') {
		transform = Some(&text[body_start..i]);
		i += 1;
		key_start = i;
		while bytes.get(i).is_some_and(|b| is_word(*b)) {
			i += 1;
		}
		if i == key_start {
			return None;
		}
	}

	if bytes.get(i) != Some(&b'}') {
		return None;
	}
	let body_end = i;
	i += 1;

	let segment = if depth > 0 {
		Segment::Escaped(Escaped {
			depth,
			body: &text[body_start..body_end],
		})
	} else {
		Segment::Token(Token {
			raw: &text[start..i],
			transform,
			key: &text[key_start..body_end],
		})
	};

	Some((segment, i))
}
