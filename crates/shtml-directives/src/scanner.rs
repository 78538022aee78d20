//! Directive scanning over a raw document buffer.
//!
//! A single forward pass recognizes `<!--#` ... `-->` directives and feeds
//! each captured body to the command parser. The scanner never copies body
//! bytes and never rewinds: when a tentative closer turns out not to be one,
//! the provisionally skipped dashes are recovered by widening the captured
//! length. The dashes are physically contiguous with the rest of the body
//! in the same buffer, so no cursor rewind is ever needed.

use std::ops::Range;

use crate::command;
use crate::context::RequestContext;
use crate::output::OutputFragment;
use crate::registry::CommandRegistry;

/// Scanner states.
///
/// The opener states consume their bytes for good: a failed opener returns
/// to [`Scan`](ScanState::Scan) without re-testing the byte that broke it,
/// so `<<!--#` is not recognized as a directive start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for `<`.
    Scan,
    /// Consumed `<`.
    SawLt,
    /// Consumed `<!`.
    SawBang,
    /// Consumed `<!-`.
    SawDash1,
    /// Consumed `<!--`.
    SawDash2,
    /// Inside a directive body.
    InBody,
    /// One dash of a possible closer consumed.
    BodyDash1,
    /// Two dashes of a possible closer consumed.
    BodyDash2,
}

/// One completed directive occurrence within a scanned document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Byte range of the whole directive, `<!--#` opener through `-->`
    /// closer inclusive.
    pub span: Range<usize>,
    /// Output produced by the dispatched handler, if any. `None` covers
    /// inert bodies, unknown commands and handlers that chose to produce
    /// no output.
    pub fragment: Option<OutputFragment>,
}

/// Single-pass directive scanner.
///
/// Borrows a populated [`CommandRegistry`] for the duration of a scan; the
/// shared borrow is what keeps the registry immutable while serving.
///
/// # Example
///
/// ```
/// use shtml_directives::{CommandRegistry, DirectiveScanner, EchoCommand, RequestContext};
/// use shtml_vars::RequestVariables;
///
/// let registry = CommandRegistry::new().with_command("echo", EchoCommand);
/// let mut vars = RequestVariables::new();
/// vars.insert("USER", "alice");
///
/// let ctx = RequestContext::new(&vars);
/// let scanner = DirectiveScanner::new(&registry);
///
/// let document = b"hello <!--#echo var=\"USER\"-->!";
/// let expansions = scanner.expansions(document, &ctx);
/// assert_eq!(expansions[0].span, 6..29);
/// assert_eq!(expansions[0].fragment.as_ref().unwrap().as_slice(), b"alice");
/// ```
pub struct DirectiveScanner<'r> {
    registry: &'r CommandRegistry,
}

impl<'r> DirectiveScanner<'r> {
    /// Create a scanner dispatching through `registry`.
    #[must_use]
    pub fn new(registry: &'r CommandRegistry) -> Self {
        Self { registry }
    }

    /// Scan `document` once, dispatching every completed directive and
    /// reporting it to `sink` together with the handler's output.
    ///
    /// Scanning resumes immediately after each closer. A directive still
    /// open at end of input is discarded silently; no partial dispatch
    /// occurs. The document must not change for the duration of the scan,
    /// since every span handed to handlers aliases it.
    pub fn scan<F>(&self, document: &[u8], ctx: &RequestContext<'_>, mut sink: F)
    where
        F: FnMut(Expansion),
    {
        let mut state = ScanState::Scan;
        // Captured body: start is unset until the first byte is kept, and
        // binds to the first provisional dash when a body opens with one.
        // `len` grows, never shrinks; recovery of skipped dashes widens it
        // instead of rewinding the cursor.
        let mut start: Option<usize> = None;
        let mut len = 0usize;
        // Index of the dash that opened the current tentative closer.
        let mut dash = 0usize;
        // Index of the `<` that opened the current directive.
        let mut open = 0usize;

        for (i, &byte) in document.iter().enumerate() {
            state = match state {
                ScanState::Scan => {
                    if byte == b'<' {
                        ScanState::SawLt
                    } else {
                        ScanState::Scan
                    }
                }
                ScanState::SawLt => {
                    if byte == b'!' {
                        ScanState::SawBang
                    } else {
                        ScanState::Scan
                    }
                }
                ScanState::SawBang => {
                    if byte == b'-' {
                        ScanState::SawDash1
                    } else {
                        ScanState::Scan
                    }
                }
                ScanState::SawDash1 => {
                    if byte == b'-' {
                        ScanState::SawDash2
                    } else {
                        ScanState::Scan
                    }
                }
                ScanState::SawDash2 => {
                    if byte == b'#' {
                        // The previous four bytes were exactly `<!--`.
                        open = i - 4;
                        start = None;
                        len = 0;
                        ScanState::InBody
                    } else {
                        ScanState::Scan
                    }
                }
                ScanState::InBody => {
                    if byte == b'-' {
                        dash = i;
                        ScanState::BodyDash1
                    } else {
                        if start.is_none() {
                            start = Some(i);
                        }
                        len += 1;
                        ScanState::InBody
                    }
                }
                ScanState::BodyDash1 => {
                    if byte == b'-' {
                        ScanState::BodyDash2
                    } else {
                        // Not a closer: the dash and this byte are body
                        // bytes, contiguous with what was captured so far.
                        if start.is_none() {
                            start = Some(dash);
                        }
                        len += 2;
                        ScanState::InBody
                    }
                }
                ScanState::BodyDash2 => {
                    if byte == b'>' {
                        let body = match start {
                            Some(s) => &document[s..s + len],
                            None => &document[..0],
                        };
                        tracing::trace!(
                            offset = open,
                            len = body.len(),
                            "directive captured"
                        );
                        let fragment = command::dispatch(self.registry, ctx, body);
                        sink(Expansion {
                            span: open..i + 1,
                            fragment,
                        });
                        start = None;
                        len = 0;
                        ScanState::Scan
                    } else {
                        // Two dashes plus this byte were not a closer.
                        if start.is_none() {
                            start = Some(dash);
                        }
                        len += 3;
                        ScanState::InBody
                    }
                }
            };
        }
        // End of input in any state but Scan abandons the attempt without
        // dispatching.
    }

    /// Scan `document` and collect every [`Expansion`] in document order.
    #[must_use]
    pub fn expansions(&self, document: &[u8], ctx: &RequestContext<'_>) -> Vec<Expansion> {
        let mut out = Vec::new();
        self.scan(document, ctx, |expansion| out.push(expansion));
        out
    }
}
