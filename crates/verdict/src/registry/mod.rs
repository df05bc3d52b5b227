//! The named-test registry.
//!
//! Rules may express their test as a map of registry names instead of an
//! inline predicate. Names are late-bound: the evaluator resolves them when
//! a rule is evaluated, not when it is constructed, so a rule may reference
//! a test registered after the rule was built.
//!
//! The engine only ever reads the registry. Installing and removing entries
//! is embedder territory — typically once at startup via
//! [`TestRegistry::with_builtins`] plus [`register`](TestRegistry::register)
//! calls, optionally extended later by environment detection.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, RwLock};

use serde_json::Value;

use crate::foundation::{RuleContext, TestResult};

pub mod builtin;

pub use builtin::{Isa, NotBlank, isa, not_blank};

// ============================================================================
// NAMED TEST TRAIT
// ============================================================================

/// A reusable test stored in a [`TestRegistry`] under a name.
///
/// Implementations receive the subject value, the argument list authored in
/// the rule's named-test map, and the evaluation context of the rule that
/// invoked them.
///
/// Closures of the matching shape implement this trait directly:
///
/// ```
/// use serde_json::Value;
/// use verdict::foundation::{RuleContext, TestResult};
/// use verdict::registry::TestRegistry;
///
/// let mut registry = TestRegistry::with_builtins();
/// registry.register(
///     "even",
///     |v: &Value, _: &[Value], _: &RuleContext<'_>| -> TestResult {
///         Ok(v.as_i64().is_some_and(|n| n % 2 == 0))
///     },
/// );
/// assert!(registry.contains("even"));
/// ```
pub trait NamedTest: Send + Sync {
    /// Applies the test to `value` with the rule-authored `args`.
    fn test(&self, value: &Value, args: &[Value], ctx: &RuleContext<'_>) -> TestResult;
}

impl<F> NamedTest for F
where
    F: Fn(&Value, &[Value], &RuleContext<'_>) -> TestResult + Send + Sync,
{
    fn test(&self, value: &Value, args: &[Value], ctx: &RuleContext<'_>) -> TestResult {
        self(value, args, ctx)
    }
}

// ============================================================================
// TEST REGISTRY
// ============================================================================

/// String-keyed collection of named tests.
///
/// Lookup never fails loudly: an unknown name is simply "not recognized",
/// which the evaluator reports and skips.
#[derive(Default, Clone)]
pub struct TestRegistry {
    tests: HashMap<String, Arc<dyn NamedTest>>,
}

impl TestRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the built-in tests
    /// ([`isa`], [`not_blank`]).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Isa::NAME, isa());
        registry.register(NotBlank::NAME, not_blank());
        registry
    }

    /// Registers `test` under `name`, returning the entry it replaces.
    ///
    /// Later registrations win; overriding a built-in is allowed.
    pub fn register<T>(&mut self, name: impl Into<String>, test: T) -> Option<Arc<dyn NamedTest>>
    where
        T: NamedTest + 'static,
    {
        self.tests.insert(name.into(), Arc::new(test))
    }

    /// Removes the entry under `name`, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn NamedTest>> {
        self.tests.remove(name)
    }

    /// Looks up a test by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn NamedTest>> {
        self.tests.get(name)
    }

    /// Whether a test is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tests.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.keys().map(String::as_str)
    }

    /// Number of registered tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl fmt::Debug for TestRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("TestRegistry").field("tests", &names).finish()
    }
}

// ============================================================================
// PROCESS-WIDE REGISTRY
// ============================================================================

static GLOBAL: LazyLock<RwLock<TestRegistry>> =
    LazyLock::new(|| RwLock::new(TestRegistry::with_builtins()));

/// The process-wide registry used by [`evaluate`](crate::engine::evaluate).
///
/// Initialized once with the built-ins. Extend it by write-locking:
///
/// ```
/// use serde_json::Value;
/// use verdict::foundation::{RuleContext, TestResult};
/// use verdict::registry;
///
/// let mut tests = registry::global().write().unwrap();
/// tests.register(
///     "always",
///     |_: &Value, _: &[Value], _: &RuleContext<'_>| -> TestResult { Ok(true) },
/// );
/// ```
///
/// Each evaluation call holds the read lock for its full duration, so it
/// sees one stable snapshot; embedders that mutate the registry while
/// evaluations run on other threads get ordinary lock contention, nothing
/// worse.
#[must_use]
pub fn global() -> &'static RwLock<TestRegistry> {
    &GLOBAL
}
