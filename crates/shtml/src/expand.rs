//! `expand` command: read a document, expand its directives, write it out.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use shtml_directives::{
    CommandRegistry, DirectiveScanner, ECHO_COMMAND, EchoCommand, RequestContext,
};
use shtml_vars::RequestVariables;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `expand` command.
#[derive(Args)]
pub struct ExpandArgs {
    /// Document to expand.
    pub file: PathBuf,

    /// Request variable definition, NAME=VALUE. May be repeated.
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Write the expanded document here instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl ExpandArgs {
    /// Run the expansion.
    pub fn execute(self) -> Result<(), CliError> {
        let vars = parse_vars(&self.vars)?;
        let registry = CommandRegistry::new().with_command(ECHO_COMMAND, EchoCommand);

        let document = fs::read(&self.file)?;
        tracing::debug!(
            file = %self.file.display(),
            len = document.len(),
            "expanding document"
        );

        let expanded = expand_document(&registry, &vars, &document);

        match self.output {
            Some(path) => {
                fs::write(&path, expanded)?;
                Output::new().info(&format!("Expanded {} -> {}", self.file.display(), path.display()));
            }
            None => io::stdout().write_all(&expanded)?,
        }
        Ok(())
    }
}

/// Parse `NAME=VALUE` definitions into a request variable store.
fn parse_vars(defs: &[String]) -> Result<RequestVariables, CliError> {
    let mut vars = RequestVariables::new();
    for def in defs {
        let (name, value) = def
            .split_once('=')
            .ok_or_else(|| CliError::Var(def.clone()))?;
        if name.is_empty() {
            return Err(CliError::Var(def.clone()));
        }
        vars.insert(name, value);
    }
    Ok(vars)
}

/// Replace every directive span with its output fragment.
///
/// Directives that produced no output are removed; all other bytes are
/// copied through verbatim.
fn expand_document(
    registry: &CommandRegistry,
    vars: &RequestVariables,
    document: &[u8],
) -> Vec<u8> {
    let ctx = RequestContext::new(vars);
    let scanner = DirectiveScanner::new(registry);

    let mut out = Vec::with_capacity(document.len());
    let mut copied = 0usize;
    scanner.scan(document, &ctx, |expansion| {
        out.extend_from_slice(&document[copied..expansion.span.start]);
        if let Some(fragment) = expansion.fragment {
            out.extend_from_slice(fragment.as_slice());
        }
        copied = expansion.span.end;
    });
    out.extend_from_slice(&document[copied..]);
    out
}
