//! Command-body parsing and dispatch.
//!
//! Takes the raw body span captured by the scanner, trims it, isolates the
//! command name, resolves the name against the registry and hands the
//! remainder to the attribute tokenizer before invoking the handler.

use crate::args::ArgumentList;
use crate::context::RequestContext;
use crate::output::OutputFragment;
use crate::registry::CommandRegistry;
use crate::util::is_space;

/// Parse one captured directive body and dispatch it.
///
/// Returns the handler's output, or `None` when the body never reaches a
/// handler: empty or whitespace-only bodies, bodies without a whitespace
/// separator after the name (a bare command name never dispatches, even a
/// registered one) and unknown command names are all inert.
pub(crate) fn dispatch(
    registry: &CommandRegistry,
    ctx: &RequestContext<'_>,
    body: &[u8],
) -> Option<OutputFragment> {
    let trimmed = trim_body(body);
    tracing::trace!(body = %String::from_utf8_lossy(trimmed), "directive body");

    // A name with nothing after it is deliberately inert: zero-argument
    // invocations are never routed.
    let name_len = trimmed.iter().position(|&b| is_space(b))?;
    let name = &trimmed[..name_len];

    let Some(handler) = registry.lookup(name) else {
        tracing::debug!(command = %String::from_utf8_lossy(name), "unknown command");
        return None;
    };

    // Skip the separator byte, then any further leading whitespace.
    let mut rest = &trimmed[name_len + 1..];
    while let Some((&first, tail)) = rest.split_first() {
        if !is_space(first) {
            break;
        }
        rest = tail;
    }

    let args = ArgumentList::parse(rest);
    tracing::trace!(
        command = %String::from_utf8_lossy(name),
        argc = args.len(),
        "dispatching command"
    );
    handler.handle(ctx, &args)
}

/// Strip one leading and one trailing whitespace run.
///
/// The trailing strip never crosses index 0: the byte at index 0 is only
/// ever removed by the leading strip, so a body consisting of a single
/// whitespace byte trims to empty from the left, never from the right.
fn trim_body(body: &[u8]) -> &[u8] {
    let start = body
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(body.len());
    let mut end = body.len();
    while end > start && end > 1 && is_space(body[end - 1]) {
        end -= 1;
    }
    &body[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::CommandHandler;
    use pretty_assertions::assert_eq;
    use shtml_vars::RequestVariables;
    use std::sync::{Arc, Mutex};

    type RecordedCall = Vec<(Vec<u8>, Vec<u8>)>;

    /// Records every invocation's arguments as owned bytes.
    #[derive(Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl CommandHandler for Recorder {
        fn handle(
            &self,
            _ctx: &RequestContext<'_>,
            args: &ArgumentList<'_>,
        ) -> Option<OutputFragment> {
            let call = args
                .iter()
                .map(|arg| (arg.key().to_vec(), arg.value().to_vec()))
                .collect();
            self.calls.lock().unwrap().push(call);
            None
        }
    }

    fn registry_with_recorder(name: &str) -> (CommandRegistry, Arc<Mutex<Vec<RecordedCall>>>) {
        let recorder = Recorder::default();
        let calls = Arc::clone(&recorder.calls);
        (CommandRegistry::new().with_command(name, recorder), calls)
    }

    fn run(registry: &CommandRegistry, body: &[u8]) -> Option<OutputFragment> {
        let vars = RequestVariables::new();
        let ctx = RequestContext::new(&vars);
        dispatch(registry, &ctx, body)
    }

    #[test]
    fn test_bare_name_is_inert() {
        let (registry, calls) = registry_with_recorder("echo");

        assert!(run(&registry, b"echo").is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_trailing_whitespace_trims_back_to_bare_name() {
        let (registry, calls) = registry_with_recorder("echo");

        assert!(run(&registry, b"echo   ").is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_bodies_are_inert() {
        let (registry, calls) = registry_with_recorder("echo");

        assert!(run(&registry, b"").is_none());
        assert!(run(&registry, b" ").is_none());
        assert!(run(&registry, b"\t\n").is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_command_is_silent() {
        let (registry, calls) = registry_with_recorder("echo");

        assert!(run(&registry, br#"bogus a="1""#).is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dispatch_with_arguments() {
        let (registry, calls) = registry_with_recorder("echo");

        run(&registry, br#"echo var="X""#);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![(b"var".to_vec(), b"X".to_vec())]);
    }

    #[test]
    fn test_body_trimming_and_separator_skip() {
        let (registry, calls) = registry_with_recorder("echo");

        run(&registry, b"  \techo  \t var=\"X\" \n");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![(b"var".to_vec(), b"X".to_vec())]);
    }

    #[test]
    fn test_vertical_tab_separates_name_from_arguments() {
        let (registry, calls) = registry_with_recorder("echo");

        run(&registry, b"echo\x0bvar=\"X\"");

        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_dispatch_proceeds_after_tokenizer_abort() {
        let (registry, calls) = registry_with_recorder("echo");

        run(&registry, br#"echo a="1" b=2 c="3""#);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![(b"a".to_vec(), b"1".to_vec())]);
    }

    #[test]
    fn test_dispatch_with_zero_parsed_arguments() {
        // Junk after the separator still dispatches, with an empty list.
        let (registry, calls) = registry_with_recorder("echo");

        run(&registry, b"echo junk");

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].is_empty());
    }

    #[test]
    fn test_trim_body_edges() {
        assert_eq!(trim_body(b""), b"");
        assert_eq!(trim_body(b" "), b"");
        assert_eq!(trim_body(b"  "), b"");
        assert_eq!(trim_body(b"x"), b"x");
        assert_eq!(trim_body(b" x "), b"x");
        assert_eq!(trim_body(b"echo var \t"), b"echo var");
    }
}
