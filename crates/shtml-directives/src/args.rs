//! Attribute tokenizing for directive bodies.
//!
//! Parses the `key="value" key2="value2"` sequence that follows a command
//! name. Keys are runs of bytes excluding `=`; values are double-quoted and
//! may be empty. There is no quote escaping: a value ends at the first `"`.

use crate::util::is_space;

/// Maximum number of key/value arguments recorded for one command.
///
/// Arguments past this limit are silently dropped; dispatch still proceeds
/// with the arguments collected so far.
pub const MAX_COMMAND_ARGS: usize = 8;

/// One `key="value"` pair, borrowed from the scanned document buffer.
///
/// Both spans alias the buffer handed to [`ArgumentList::parse`] and are
/// only valid while that buffer is. The key is never empty; the value may
/// be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument<'buf> {
    key: &'buf [u8],
    value: &'buf [u8],
}

impl<'buf> Argument<'buf> {
    /// The argument's key bytes.
    #[must_use]
    pub fn key(&self) -> &'buf [u8] {
        self.key
    }

    /// The argument's value bytes (possibly empty).
    #[must_use]
    pub fn value(&self) -> &'buf [u8] {
        self.value
    }
}

/// Tokenizer states for the `key="value"` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenState {
    /// Accumulating key bytes until `=`.
    Key,
    /// `=` consumed; the next byte must be `"`.
    ExpectQuote,
    /// Accumulating value bytes until the closing `"`.
    Value,
    /// Pair emitted; skipping whitespace before the next key.
    AfterValue,
}

/// Ordered list of parsed arguments, bounded at [`MAX_COMMAND_ARGS`].
///
/// Insertion order is appearance order. The list borrows the buffer it was
/// parsed from and allocates its slots up front, so one parse needs no
/// further space.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentList<'buf> {
    args: Vec<Argument<'buf>>,
}

impl<'buf> ArgumentList<'buf> {
    /// Create an empty list with capacity for [`MAX_COMMAND_ARGS`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: Vec::with_capacity(MAX_COMMAND_ARGS),
        }
    }

    /// Tokenize a `key="value"` sequence.
    ///
    /// Malformed input never fails; it ends tokenizing early and the pairs
    /// collected up to that point are kept:
    ///
    /// - a byte other than `"` after `=` aborts immediately;
    /// - an empty key (input starting with `=`) aborts immediately;
    /// - end of input mid-key, mid-quote or mid-value discards that
    ///   partial pair;
    /// - once the list is full, the rest of the input is not examined.
    #[must_use]
    pub fn parse(input: &'buf [u8]) -> Self {
        let mut list = Self::new();
        let mut state = TokenState::Key;
        let mut key_start = 0usize;
        let mut key_end = 0usize;
        let mut value_start = 0usize;

        for (i, &byte) in input.iter().enumerate() {
            match state {
                TokenState::Key => {
                    if byte == b'=' {
                        if key_end == key_start {
                            // Keys are never empty.
                            return list;
                        }
                        state = TokenState::ExpectQuote;
                    } else {
                        key_end = i + 1;
                    }
                }
                TokenState::ExpectQuote => {
                    if byte != b'"' {
                        return list;
                    }
                    value_start = i + 1;
                    state = TokenState::Value;
                }
                TokenState::Value => {
                    if byte == b'"' {
                        list.args.push(Argument {
                            key: &input[key_start..key_end],
                            value: &input[value_start..i],
                        });
                        if list.is_full() {
                            return list;
                        }
                        state = TokenState::AfterValue;
                    }
                }
                TokenState::AfterValue => {
                    if !is_space(byte) {
                        // This byte already belongs to the next key.
                        key_start = i;
                        key_end = i + 1;
                        state = TokenState::Key;
                    }
                }
            }
        }

        list
    }

    /// Number of collected arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// True if no arguments were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// True if the list is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.args.len() == MAX_COMMAND_ARGS
    }

    /// The collected arguments, in appearance order.
    #[must_use]
    pub fn as_slice(&self) -> &[Argument<'buf>] {
        &self.args
    }

    /// Iterate over the collected arguments.
    pub fn iter(&self) -> std::slice::Iter<'_, Argument<'buf>> {
        self.args.iter()
    }

    /// Value of the first argument whose key matches `key` byte-for-byte.
    #[must_use]
    pub fn get(&self, key: &[u8]) -> Option<&'buf [u8]> {
        self.args.iter().find(|arg| arg.key == key).map(|arg| arg.value)
    }
}

impl<'list, 'buf> IntoIterator for &'list ArgumentList<'buf> {
    type Item = &'list Argument<'buf>;
    type IntoIter = std::slice::Iter<'list, Argument<'buf>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
