//! Built-in `echo` command.

use crate::args::ArgumentList;
use crate::context::RequestContext;
use crate::handler::CommandHandler;
use crate::output::OutputFragment;

/// Name under which [`EchoCommand`] is conventionally registered.
pub const ECHO_COMMAND: &str = "echo";

/// Echoes the value of one request variable.
///
/// `<!--#echo var="NAME"-->` resolves `NAME` against the request's
/// variable store and replies with the resolved bytes. A missing or empty
/// `var` argument, an undefined variable and an empty resolved value all
/// produce no output; none of these is an error.
///
/// # Example
///
/// ```
/// use shtml_directives::{ArgumentList, CommandHandler, EchoCommand, RequestContext};
/// use shtml_vars::RequestVariables;
///
/// let mut vars = RequestVariables::new();
/// vars.insert("HOST", "example.org");
/// let ctx = RequestContext::new(&vars);
///
/// let args = ArgumentList::parse(br#"var="HOST""#);
/// let fragment = EchoCommand.handle(&ctx, &args).unwrap();
/// assert_eq!(fragment.as_slice(), b"example.org");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoCommand;

impl CommandHandler for EchoCommand {
    fn handle(&self, ctx: &RequestContext<'_>, args: &ArgumentList<'_>) -> Option<OutputFragment> {
        let name = args.get(b"var")?;
        if name.is_empty() {
            return None;
        }

        let value = ctx.variable(name)?;
        if value.is_empty() {
            return None;
        }

        tracing::trace!(
            var = %String::from_utf8_lossy(name),
            len = value.len(),
            "echoing variable"
        );
        Some(OutputFragment::from_slice(value))
    }
}
