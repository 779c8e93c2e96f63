//! Formula tokenizer and enumerator.
//!
//! An input string is read left to right as a sequence of tokens:
//!
//! - a 2-letter element (both characters alphabetic, canonical form present in
//!   [`ELEMENTS`](crate::elements::ELEMENTS)) followed by an optional digit run;
//! - a 1-letter element (any letter, uppercased, no table check) followed by an
//!   optional digit run;
//! - a single literal character for anything that is not a letter.
//!
//! Wherever both element forms apply the input is ambiguous. [`enumerate`]
//! returns every interpretation, 2-letter branches first, in depth-first
//! order. [`format_single`] always takes the first branch and so returns the
//! first candidate `enumerate` would.
//!
//! The number of candidates grows exponentially with long letter runs. The
//! core does not bound it; callers that render or copy candidates should use
//! [`enumerate_limited`] and check [`candidate_count`].

use std::fmt;

use crate::elements::{canonical_pair, is_element};
use crate::subscript::to_subscript;

/// One token of a tokenized formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Element symbol in canonical case and the raw ASCII digit run after it
    /// (empty when there is none).
    Element { symbol: String, count: String },
    /// A non-letter character copied unchanged.
    Literal(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Element { symbol, count } => write!(f, "{}{}", symbol, to_subscript(count)),
            Token::Literal(c) => write!(f, "{}", c),
        }
    }
}

/// Render a token sequence to its formula string.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect()
}

/// Return every interpretation of `input`, 2-letter matches first.
///
/// Never empty: `enumerate("")` is `[""]`.
///
/// ```
/// use formulate_lib::enumerate::enumerate;
/// assert_eq!(enumerate("co"), vec!["Co", "CO"]);
/// assert_eq!(enumerate("h2o"), vec!["H₂O"]);
/// ```
pub fn enumerate(input: &str) -> Vec<String> {
    enumerate_limited(input, usize::MAX)
}

/// Best-guess interpretation: prefer a valid 2-letter element at every
/// branching point.
pub fn format_single(input: &str) -> String {
    render(&tokenize_best(input))
}

/// Every tokenization of `input`, in the same order as [`enumerate`].
pub fn tokenize_all(input: &str) -> Vec<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    depth_first(&chars, usize::MAX, |tokens, _| out.push(tokens.to_vec()));
    out
}

/// The single tokenization used by [`format_single`].
pub fn tokenize_best(input: &str) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        // head_choices is never empty for a non-empty slice
        let Some((token, used)) = head_choices(&chars[pos..]).into_iter().next() else {
            break;
        };
        tokens.push(token);
        pos += used;
    }
    tokens
}

/// The first `limit` candidates of [`enumerate`], without building the rest.
///
/// A `limit` of zero yields an empty list.
pub fn enumerate_limited(input: &str, limit: usize) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    depth_first(&chars, limit, |_, text| out.push(text.to_string()));
    out
}

/// Number of candidates [`enumerate`] would return for `input`.
///
/// Saturates at `u128::MAX`.
pub fn candidate_count(input: &str) -> u128 {
    let chars: Vec<char> = input.chars().collect();
    // counts[i] = number of tokenizations of chars[i..]
    let mut counts = vec![0u128; chars.len() + 1];
    counts[chars.len()] = 1;
    for i in (0..chars.len()).rev() {
        let n = head_choices(&chars[i..])
            .iter()
            .fold(0u128, |acc, (_, used)| acc.saturating_add(counts[i + used]));
        counts[i] = n;
    }
    counts[0]
}

/// A position in the search: the choices available there, which one to try
/// next, and how long the token path and rendered text were on arrival.
struct Frame {
    pos: usize,
    depth: usize,
    mark: usize,
    choices: Vec<(Token, usize)>,
    next: usize,
}

impl Frame {
    fn at(chars: &[char], pos: usize, depth: usize, mark: usize) -> Self {
        Self {
            pos,
            depth,
            mark,
            choices: head_choices(&chars[pos..]),
            next: 0,
        }
    }
}

/// Depth-first walk over all tokenizations, calling `emit` with the token
/// path and its rendering for each complete one, at most `limit` times.
///
/// The stack lives on the heap, so input length never bounds call depth.
fn depth_first(chars: &[char], limit: usize, mut emit: impl FnMut(&[Token], &str)) {
    if limit == 0 {
        return;
    }
    let mut emitted = 0;
    let mut tokens: Vec<Token> = Vec::new();
    let mut text = String::new();
    let mut stack = vec![Frame::at(chars, 0, 0, 0)];

    while let Some(frame) = stack.last_mut() {
        if frame.pos == chars.len() {
            emit(&tokens, &text);
            emitted += 1;
            if emitted >= limit {
                return;
            }
            stack.pop();
            continue;
        }
        let Some((token, used)) = frame.choices.get(frame.next).cloned() else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        // drop whatever the previous choice at this frame appended
        tokens.truncate(frame.depth);
        text.truncate(frame.mark);
        let pos = frame.pos + used;

        text.push_str(&token.to_string());
        tokens.push(token);
        stack.push(Frame::at(chars, pos, tokens.len(), text.len()));
    }
}

/// Token choices at the head of `chars` with the number of characters each
/// consumes, in preference order.
fn head_choices(chars: &[char]) -> Vec<(Token, usize)> {
    let Some(&first) = chars.first() else {
        return Vec::new();
    };
    if !first.is_ascii_alphabetic() {
        return vec![(Token::Literal(first), 1)];
    }

    let mut choices = Vec::with_capacity(2);
    if let Some(&second) = chars.get(1)
        && second.is_ascii_alphabetic()
    {
        let symbol = canonical_pair(first, second);
        if is_element(&symbol) {
            choices.push(element_token(symbol, chars, 2));
        }
    }
    choices.push(element_token(first.to_ascii_uppercase().to_string(), chars, 1));
    choices
}

/// Build an element token of `letters` characters and greedily take the digit
/// run that follows it.
fn element_token(symbol: String, chars: &[char], letters: usize) -> (Token, usize) {
    let count: String = chars[letters..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let used = letters + count.len();
    (Token::Element { symbol, count }, used)
}
