//! Name → handler registry for directive commands.

use crate::handler::CommandHandler;

/// One registered command.
struct RegistryEntry {
    name: String,
    handler: Box<dyn CommandHandler>,
}

/// Append-only command registry, unique by exact name.
///
/// The registry is populated during an initialization phase and borrowed
/// shared by every scan afterwards, so the serving path can never mutate
/// it. First registration of a name wins; a later registration under the
/// same name is ignored rather than overwriting or erroring.
///
/// Lookup is an exact byte-length-and-content match against the scanned
/// command name. There is no case folding.
///
/// # Example
///
/// ```
/// use shtml_directives::{CommandRegistry, EchoCommand};
///
/// let registry = CommandRegistry::new().with_command("echo", EchoCommand);
/// assert!(registry.lookup(b"echo").is_some());
/// assert!(registry.lookup(b"ECHO").is_none());
/// ```
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<RegistryEntry>,
}

impl CommandRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`.
    ///
    /// If the name is already taken, the existing handler is kept and this
    /// call does nothing.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: CommandHandler + 'static,
    {
        let name = name.into();
        if self.entries.iter().any(|entry| entry.name == name) {
            tracing::debug!(command = %name, "command already registered, keeping first");
            return;
        }
        self.entries.push(RegistryEntry {
            name,
            handler: Box::new(handler),
        });
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with_command<H>(mut self, name: impl Into<String>, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        self.register(name, handler);
        self
    }

    /// Resolve a command name scanned out of a directive body.
    #[must_use]
    pub fn lookup(&self, name: &[u8]) -> Option<&dyn CommandHandler> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_bytes() == name)
            .map(|entry| entry.handler.as_ref())
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgumentList;
    use crate::context::RequestContext;
    use crate::output::OutputFragment;
    use pretty_assertions::assert_eq;
    use shtml_vars::RequestVariables;

    /// Replies with a fixed byte string.
    struct StaticReply(&'static [u8]);

    impl CommandHandler for StaticReply {
        fn handle(
            &self,
            _ctx: &RequestContext<'_>,
            _args: &ArgumentList<'_>,
        ) -> Option<OutputFragment> {
            Some(OutputFragment::from_slice(self.0))
        }
    }

    fn invoke(registry: &CommandRegistry, name: &[u8]) -> Option<OutputFragment> {
        let vars = RequestVariables::new();
        let ctx = RequestContext::new(&vars);
        let args = ArgumentList::new();
        registry.lookup(name)?.handle(&ctx, &args)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CommandRegistry::new();
        registry.register("flastmod", StaticReply(b"never"));

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup(b"flastmod").is_some());
        assert!(registry.lookup(b"fsize").is_none());
    }

    #[test]
    fn test_first_registration_wins() {
        let registry = CommandRegistry::new()
            .with_command("echo", StaticReply(b"first"))
            .with_command("echo", StaticReply(b"second"));

        assert_eq!(registry.len(), 1);
        let fragment = invoke(&registry, b"echo").unwrap();
        assert_eq!(fragment.as_slice(), b"first");
    }

    #[test]
    fn test_lookup_is_byte_exact() {
        let registry = CommandRegistry::new().with_command("echo", StaticReply(b"x"));

        assert!(registry.lookup(b"Echo").is_none());
        assert!(registry.lookup(b"ech").is_none());
        assert!(registry.lookup(b"echoo").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup(b"echo").is_none());
    }

    #[test]
    fn test_distinct_names_coexist() {
        let registry = CommandRegistry::new()
            .with_command("a", StaticReply(b"1"))
            .with_command("b", StaticReply(b"2"));

        assert_eq!(invoke(&registry, b"a").unwrap().as_slice(), b"1");
        assert_eq!(invoke(&registry, b"b").unwrap().as_slice(), b"2");
    }
}
