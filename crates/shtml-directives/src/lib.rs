//! Server-side include directive engine.
//!
//! Recognizes `<!--#command key="value" ...-->` directives embedded in an
//! otherwise static byte stream and dispatches each one to a registered
//! command handler, which may produce a replacement output fragment.
//!
//! # Architecture
//!
//! One scan is a single forward pass with four cooperating pieces:
//!
//! 1. **Scanner** ([`DirectiveScanner`]): finds delimiter-bounded directive
//!    bodies with a backtracking-free state machine.
//! 2. **Command parser**: trims a body, isolates the command name and
//!    resolves it against the registry.
//! 3. **Attribute tokenizer** ([`ArgumentList`]): parses the bounded
//!    `key="value"` argument sequence.
//! 4. **Registry** ([`CommandRegistry`]): name → [`CommandHandler`] mapping,
//!    populated once before serving and borrowed shared afterwards.
//!
//! All parsing is zero-copy: names, keys and values are byte spans of the
//! scanned buffer. Bytes are only copied when a handler builds an
//! [`OutputFragment`]. Splicing fragments back into a response stream is
//! the caller's job; the engine only computes them.
//!
//! # Example
//!
//! ```
//! use shtml_directives::{CommandRegistry, DirectiveScanner, EchoCommand, RequestContext};
//! use shtml_vars::RequestVariables;
//!
//! let registry = CommandRegistry::new().with_command("echo", EchoCommand);
//!
//! let mut vars = RequestVariables::new();
//! vars.insert("GREETING", "hello");
//!
//! let ctx = RequestContext::new(&vars);
//! let scanner = DirectiveScanner::new(&registry);
//! let expansions = scanner.expansions(b"<p><!--#echo var=\"GREETING\"--></p>", &ctx);
//!
//! assert_eq!(expansions.len(), 1);
//! assert_eq!(expansions[0].fragment.as_ref().unwrap().as_slice(), b"hello");
//! ```

mod args;
mod command;
mod context;
mod echo;
mod handler;
mod output;
mod registry;
mod scanner;
mod util;

pub use args::{Argument, ArgumentList, MAX_COMMAND_ARGS};
pub use context::RequestContext;
pub use echo::{ECHO_COMMAND, EchoCommand};
pub use handler::CommandHandler;
pub use output::OutputFragment;
pub use registry::CommandRegistry;
pub use scanner::{DirectiveScanner, Expansion};
