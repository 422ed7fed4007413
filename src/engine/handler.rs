//! engine::handler
//!
//! Handlers and their verb tables.
//!
//! # Design
//!
//! A handler exposes named verbs. Rather than looking verbs up by
//! introspection, each handler type declares a [`VerbTable`] once: verb
//! name, typed function, optional [`UsageContract`] and optional access
//! guard. A missing verb is a plain lookup miss.
//!
//! [`TableHandler`] pairs a table with per-invocation state and implements
//! the object-safe [`Handler`] trait the invoker works with.
//! [`TableFactory`] plugs a table into a
//! [`CommandRegistry`](crate::registry::CommandRegistry).
//!
//! # Example
//!
//! ```
//! use kraken_console::core::usage::{ArgumentSpec, UsageContract};
//! use kraken_console::engine::context::ExecutionContext;
//! use kraken_console::engine::handler::{Verb, VerbTable};
//!
//! #[derive(Default)]
//! struct Greeter;
//!
//! impl Greeter {
//!     fn hello(&mut self, ctx: &mut dyn ExecutionContext, args: &[String]) -> anyhow::Result<()> {
//!         let name = args.first().map(String::as_str).unwrap_or("world");
//!         ctx.println(&format!("hello, {}", name));
//!         Ok(())
//!     }
//! }
//!
//! let table = VerbTable::new().with(
//!     Verb::new("hello", Greeter::hello).usage(
//!         UsageContract::new("greet someone").argument(ArgumentSpec::optional("name", "who")),
//!     ),
//! );
//! assert_eq!(table.names(), ["hello"]);
//! ```

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::core::usage::UsageContract;
use crate::engine::context::ExecutionContext;
use crate::registry::HandlerFactory;

/// Function implementing one verb.
pub type VerbFn<S> = fn(&mut S, &mut dyn ExecutionContext, &[String]) -> Result<()>;

/// Access policy check for one verb. `Err` carries the denial reason.
pub type GuardFn<S> = fn(&S) -> std::result::Result<(), String>;

/// Lookup result for a verb on a handler.
#[derive(Debug, Clone, Copy)]
pub struct VerbInfo<'a> {
    pub name: &'a str,
    pub usage: Option<&'a UsageContract>,
}

/// Runtime object exposing verbs, created fresh for each invocation.
pub trait Handler: Send {
    /// Name used in diagnostics and logs.
    fn name(&self) -> &str;

    /// Verb names in declaration order.
    fn verbs(&self) -> Vec<&str>;

    /// Look up a verb and its usage contract.
    fn lookup(&self, verb: &str) -> Option<VerbInfo<'_>>;

    /// Apply the handler's access policy to a verb known to exist.
    fn permit(&self, _verb: &str) -> std::result::Result<(), String> {
        Ok(())
    }

    /// Run a verb. Errors are the verb's own domain errors.
    fn call(&mut self, verb: &str, ctx: &mut dyn ExecutionContext, args: &[String]) -> Result<()>;
}

/// One entry in a [`VerbTable`].
pub struct Verb<S> {
    name: String,
    usage: Option<UsageContract>,
    guard: Option<GuardFn<S>>,
    run: VerbFn<S>,
}

impl<S> Verb<S> {
    pub fn new(name: impl Into<String>, run: VerbFn<S>) -> Self {
        Self {
            name: name.into(),
            usage: None,
            guard: None,
            run,
        }
    }

    /// Attach a usage contract.
    pub fn usage(mut self, usage: UsageContract) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Attach an access guard evaluated against handler state.
    pub fn guard(mut self, guard: GuardFn<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered verb declarations for a handler type.
pub struct VerbTable<S> {
    verbs: Vec<Verb<S>>,
}

impl<S> Default for VerbTable<S> {
    fn default() -> Self {
        Self { verbs: Vec::new() }
    }
}

impl<S> VerbTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a verb. A later declaration with the same name replaces the earlier one.
    pub fn with(mut self, verb: Verb<S>) -> Self {
        match self.verbs.iter_mut().find(|v| v.name == verb.name) {
            Some(existing) => *existing = verb,
            None => self.verbs.push(verb),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Verb<S>> {
        self.verbs.iter().find(|v| v.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.verbs.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

/// A handler backed by a shared verb table and its own state.
pub struct TableHandler<S> {
    name: String,
    state: S,
    table: Arc<VerbTable<S>>,
}

impl<S> TableHandler<S> {
    pub fn new(name: impl Into<String>, state: S, table: Arc<VerbTable<S>>) -> Self {
        Self {
            name: name.into(),
            state,
            table,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

impl<S: Send> Handler for TableHandler<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn verbs(&self) -> Vec<&str> {
        self.table.names()
    }

    fn lookup(&self, verb: &str) -> Option<VerbInfo<'_>> {
        self.table.get(verb).map(|v| VerbInfo {
            name: &v.name,
            usage: v.usage.as_ref(),
        })
    }

    fn permit(&self, verb: &str) -> std::result::Result<(), String> {
        match self.table.get(verb).and_then(|v| v.guard) {
            Some(guard) => guard(&self.state),
            None => Ok(()),
        }
    }

    fn call(&mut self, verb: &str, ctx: &mut dyn ExecutionContext, args: &[String]) -> Result<()> {
        let Some(entry) = self.table.get(verb) else {
            bail!("{}.{} is not defined", self.name, verb);
        };
        (entry.run)(&mut self.state, ctx, args)
    }
}

/// Constructor for handler state. Returning `None` means no handler is
/// available right now.
pub type StateInit<S> = Box<dyn Fn() -> Option<S> + Send + Sync>;

/// Registry factory producing [`TableHandler`]s from one shared table.
pub struct TableFactory<S> {
    name: String,
    table: Arc<VerbTable<S>>,
    init: StateInit<S>,
}

impl<S> TableFactory<S> {
    pub fn new(name: impl Into<String>, table: VerbTable<S>, init: StateInit<S>) -> Self {
        Self {
            name: name.into(),
            table: Arc::new(table),
            init,
        }
    }
}

impl<S: Default + 'static> TableFactory<S> {
    /// Factory whose handlers start from `S::default()`.
    pub fn with_default_state(name: impl Into<String>, table: VerbTable<S>) -> Self {
        Self::new(name, table, Box::new(|| Some(S::default())))
    }
}

impl<S: Send + 'static> HandlerFactory for TableFactory<S> {
    fn create(&self) -> Option<Box<dyn Handler>> {
        let state = (self.init)()?;
        Some(Box::new(TableHandler::new(
            self.name.clone(),
            state,
            Arc::clone(&self.table),
        )))
    }
}
