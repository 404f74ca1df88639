//! Macros for declaring the built-in rule table.
//!
//! # Available Macros
//!
//! - `builtin_rules!`: declares the [`BuiltinRule`](crate::validators::BuiltinRule)
//!   enum, its name table and its dispatch in one place
//!
//! # Examples
//!
//! ```rust,ignore
//! builtin_rules! {
//!     /// Value must be present.
//!     Required => "required" => nullable::required,
//!     MinLength => "minLength" => length::min_length,
//! }
//! ```

// ============================================================================
// BUILTIN RULES MACRO
// ============================================================================

/// Declares the built-in rule enum.
///
/// Each line maps a variant to its rule name and to a predicate with the
/// signature `fn(&FieldValue, &RuleParam, &ValueMap) -> bool`. The macro
/// generates:
///
/// - `BuiltinRule` with one variant per line
/// - `BuiltinRule::ALL` in declaration order
/// - `BuiltinRule::from_name` / `BuiltinRule::name`
/// - `BuiltinRule::check`, dispatching to the predicate
macro_rules! builtin_rules {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal => $check:path
        ),+ $(,)?
    ) => {
        /// A rule the engine knows without registration.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum BuiltinRule {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl BuiltinRule {
            /// Every built-in rule, in table order.
            pub const ALL: &'static [BuiltinRule] = &[$(BuiltinRule::$variant),+];

            /// Looks a rule up by the name used in rule sets.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Name used in rule sets and message catalogs.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Runs the predicate.
            #[must_use]
            pub fn check(
                self,
                value: &$crate::value::FieldValue,
                param: &$crate::schema::RuleParam,
                all: &$crate::schema::ValueMap,
            ) -> bool {
                match self {
                    $(Self::$variant => $check(value, param, all),)+
                }
            }
        }

        impl ::std::fmt::Display for BuiltinRule {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use builtin_rules;
