//! Built-in named tests.

use crate::foundation::{EvalError, ValueKind};
use crate::shape;

crate::named_test! {
    /// Kind-membership test.
    ///
    /// Passes when the subject's [`ValueKind`] matches any of the argument
    /// descriptors (OR across the list). Descriptors are case-insensitive
    /// kind names (`"null"`, `"bool"`/`"boolean"`, `"number"`, `"string"`,
    /// `"array"`, `"object"`). Non-string and unknown descriptors never
    /// match, and an empty argument list never passes.
    pub Isa as "isa";
    test(value, args, _ctx) {
        let kind = ValueKind::of(value);
        Ok(args.iter().any(|arg| {
            arg.as_str()
                .and_then(|name| name.parse::<ValueKind>().ok())
                .is_some_and(|wanted| wanted == kind)
        }))
    }
    fn isa();
}

crate::named_test! {
    /// Passes when the subject's string form is non-empty after trimming.
    ///
    /// Takes no arguments. Deliberately has no null guard: applied to a
    /// `null` subject this is an [`EvalError::UnsupportedInput`], not a
    /// failed test. Rules that want nulls to fail quietly can put an `isa`
    /// entry in front.
    pub NotBlank as "not_blank";
    test(value, _args, _ctx) {
        if value.is_null() {
            return Err(EvalError::unsupported_input(Self::NAME, ValueKind::Null));
        }
        Ok(!shape::text(value).trim().is_empty())
    }
    fn not_blank();
}
