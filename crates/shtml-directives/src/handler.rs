//! Command handler contract.

use crate::args::ArgumentList;
use crate::context::RequestContext;
use crate::output::OutputFragment;

/// Handler for one named directive command.
///
/// A handler is registered under a name in a
/// [`CommandRegistry`](crate::CommandRegistry) during initialization and
/// invoked for every directive whose command name matches. Returning `None`
/// means "no output" and is an ordinary outcome, not an error: a missing
/// argument or an undefined variable degrades to silence.
///
/// Handlers are `Send + Sync`: the registry is read-only while serving, so
/// independent requests may dispatch through it concurrently without
/// locking.
///
/// Argument keys and values are byte spans of the document buffer being
/// scanned. Implementations must not retain them past the call; copy into
/// an [`OutputFragment`] (or other owned storage) instead.
///
/// # Example
///
/// ```
/// use shtml_directives::{ArgumentList, CommandHandler, OutputFragment, RequestContext};
///
/// /// Replies with a fixed banner, ignoring its arguments.
/// struct Banner;
///
/// impl CommandHandler for Banner {
///     fn handle(
///         &self,
///         _ctx: &RequestContext<'_>,
///         _args: &ArgumentList<'_>,
///     ) -> Option<OutputFragment> {
///         Some(OutputFragment::from_slice(b"generated content"))
///     }
/// }
/// ```
pub trait CommandHandler: Send + Sync {
    /// Execute the command against the request context and its arguments.
    ///
    /// Arguments arrive in appearance order, at most
    /// [`MAX_COMMAND_ARGS`](crate::MAX_COMMAND_ARGS) of them; any excess
    /// was silently dropped before dispatch.
    fn handle(&self, ctx: &RequestContext<'_>, args: &ArgumentList<'_>) -> Option<OutputFragment>;
}
