//! Macros for defining named tests with minimal boilerplate.

/// Defines a named test: a unit struct, its
/// [`NamedTest`](crate::registry::NamedTest) impl, a `NAME` const carrying
/// the registry key, and (optionally) a factory function.
///
/// The test body receives the subject value, the rule-authored argument
/// slice, and the evaluation context, and must produce a
/// [`TestResult`](crate::foundation::TestResult). Downstream crates need
/// `serde_json` among their own dependencies.
///
/// # Examples
///
/// ```rust,ignore
/// verdict::named_test! {
///     /// Passes when the subject is an even integer.
///     pub Even as "even";
///     test(value, _args, _ctx) {
///         Ok(value.as_i64().is_some_and(|n| n % 2 == 0))
///     }
///     fn even();
/// }
///
/// let mut registry = TestRegistry::with_builtins();
/// registry.register(Even::NAME, even());
/// ```
#[macro_export]
macro_rules! named_test {
    // ── Struct + impl + factory fn ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $key:literal;
        test($value:ident, $args:ident, $ctx:ident) $body:block
        fn $factory:ident();
    ) => {
        $crate::named_test! {
            $(#[$meta])*
            $vis $name as $key;
            test($value, $args, $ctx) $body
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct + impl only ───────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $key:literal;
        test($value:ident, $args:ident, $ctx:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $name {
            /// Registry name this test ships under.
            $vis const NAME: &'static str = $key;
        }

        impl $crate::registry::NamedTest for $name {
            fn test(
                &self,
                $value: &::serde_json::Value,
                $args: &[::serde_json::Value],
                $ctx: &$crate::foundation::RuleContext<'_>,
            ) -> $crate::foundation::TestResult $body
        }
    };
}
