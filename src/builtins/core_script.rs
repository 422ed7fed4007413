//! builtins::core_script
//!
//! The `core` alias: console introspection.
//!
//! | Command | Effect |
//! |---|---|
//! | `core.echo [text]...` | Print the arguments joined by spaces |
//! | `core.aliases` | List registered aliases |
//! | `core.verbs <alias>` | List the verbs of an alias |
//! | `core.usage <alias> <verb>` | Show the usage of one verb |
//!
//! The handler holds a weak registry reference so registering it does not
//! keep the registry alive.

use std::sync::{Arc, Weak};

use anyhow::{anyhow, Result};

use crate::core::usage::{ArgumentSpec, UsageContract};
use crate::engine::context::ExecutionContext;
use crate::engine::handler::{Handler, TableFactory, Verb, VerbTable};
use crate::registry::CommandRegistry;
use crate::ui::help::render_usage;
use crate::ui::output::format_list;

/// Alias the core handler is registered under.
pub const CORE_ALIAS: &str = "core";

/// State of one `core` handler.
pub struct CoreScript {
    registry: Arc<dyn CommandRegistry>,
}

impl CoreScript {
    fn echo(&mut self, ctx: &mut dyn ExecutionContext, args: &[String]) -> Result<()> {
        ctx.println(&args.join(" "));
        Ok(())
    }

    fn aliases(&mut self, ctx: &mut dyn ExecutionContext, _args: &[String]) -> Result<()> {
        let aliases = self.registry.aliases();
        if !aliases.is_empty() {
            ctx.println(&format_list(&aliases, ""));
        }
        Ok(())
    }

    fn verbs(&mut self, ctx: &mut dyn ExecutionContext, args: &[String]) -> Result<()> {
        let handler = self.instantiate(&args[0])?;

        let lines: Vec<String> = handler
            .verbs()
            .into_iter()
            .map(|verb| {
                let summary = handler
                    .lookup(verb)
                    .and_then(|info| info.usage)
                    .map(|usage| usage.description())
                    .unwrap_or("");
                if summary.is_empty() {
                    format!("{}.{}", args[0], verb)
                } else {
                    format!("{}.{} - {}", args[0], verb, summary)
                }
            })
            .collect();

        if !lines.is_empty() {
            ctx.println(&format_list(&lines, ""));
        }
        Ok(())
    }

    fn usage(&mut self, ctx: &mut dyn ExecutionContext, args: &[String]) -> Result<()> {
        let (alias, verb) = (&args[0], &args[1]);
        let handler = self.instantiate(alias)?;
        let info = handler
            .lookup(verb)
            .ok_or_else(|| anyhow!("verb not found: {}.{}", alias, verb))?;

        match info.usage {
            Some(usage) => {
                for line in render_usage(Some(usage)) {
                    ctx.println(&line);
                }
            }
            None => ctx.println(&format!("{}.{} declares no usage.", alias, verb)),
        }
        Ok(())
    }

    fn instantiate(&self, alias: &str) -> Result<Box<dyn Handler>> {
        self.registry
            .lookup(alias)
            .and_then(|factory| factory.create())
            .ok_or_else(|| anyhow!("command not found: {}", alias))
    }
}

/// Verb declarations for the `core` alias.
pub fn core_table() -> VerbTable<CoreScript> {
    VerbTable::new()
        .with(
            Verb::new("echo", CoreScript::echo).usage(
                UsageContract::new("print the arguments separated by spaces")
                    .argument(ArgumentSpec::optional("text", "words to print")),
            ),
        )
        .with(
            Verb::new("aliases", CoreScript::aliases)
                .usage(UsageContract::new("list registered command aliases")),
        )
        .with(
            Verb::new("verbs", CoreScript::verbs).usage(
                UsageContract::new("list the verbs of a command alias")
                    .argument(ArgumentSpec::required("alias", "command alias")),
            ),
        )
        .with(
            Verb::new("usage", CoreScript::usage).usage(
                UsageContract::new("show usage of a verb")
                    .argument(ArgumentSpec::required("alias", "command alias"))
                    .argument(ArgumentSpec::required("verb", "verb name")),
            ),
        )
}

/// Factory for `core` handlers over `registry`.
///
/// Handlers are only produced while the registry is alive.
pub fn core_factory(registry: Weak<dyn CommandRegistry>) -> TableFactory<CoreScript> {
    TableFactory::new(
        CORE_ALIAS,
        core_table(),
        Box::new(move || {
            registry
                .upgrade()
                .map(|registry| CoreScript { registry })
        }),
    )
}
