//! Caller-supplied rules.
//!
//! A [`CustomRule`] wraps a predicate that answers either immediately or with
//! a deferred verdict. The executor treats the two kinds differently:
//! immediate verdicts are collected in the synchronous pass, deferred ones
//! are awaited afterwards by the asynchronous entry points only.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use indexmap::IndexMap;

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of invoking a custom predicate.
pub enum Verdict {
    /// The predicate answered synchronously.
    Ready(bool),
    /// The answer arrives later. Dropped unpolled by synchronous validation.
    Deferred(BoxFuture<'static, bool>),
}

impl Verdict {
    /// Wraps a future as a deferred verdict.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = bool> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    /// Returns `true` for [`Verdict::Deferred`].
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        Self::Ready(value)
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(passed) => f.debug_tuple("Ready").field(passed).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

// ============================================================================
// CUSTOM RULE
// ============================================================================

/// Signature of a custom predicate.
pub type PredicateFn = dyn Fn(&FieldValue, &RuleParam, &ValueMap) -> Verdict + Send + Sync;

/// A registered predicate. Cheap to clone.
///
/// # Examples
///
/// ```
/// use formcheck_validator::custom::{CustomRule, Verdict};
/// use formcheck_validator::schema::ValueMap;
///
/// let even = CustomRule::sync(|value, _, _| value.to_number() % 2.0 == 0.0);
/// let verdict = even.invoke(&4.into(), &true.into(), &ValueMap::new());
/// assert!(matches!(verdict, Verdict::Ready(true)));
///
/// let available = CustomRule::deferred(|value, _, _| {
///     let name = value.to_text();
///     async move { name != "admin" }
/// });
/// assert!(available.invoke(&"bob".into(), &true.into(), &ValueMap::new()).is_deferred());
/// ```
#[derive(Clone)]
pub struct CustomRule(Arc<PredicateFn>);

impl CustomRule {
    /// Wraps a predicate that decides per call whether to answer now or later.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&FieldValue, &RuleParam, &ValueMap) -> Verdict + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Wraps a synchronous predicate.
    pub fn sync<F>(predicate: F) -> Self
    where
        F: Fn(&FieldValue, &RuleParam, &ValueMap) -> bool + Send + Sync + 'static,
    {
        Self::new(move |value, param, all| Verdict::Ready(predicate(value, param, all)))
    }

    /// Wraps a predicate that always answers with a future.
    ///
    /// The future must own what it reads; clone out of the borrowed arguments
    /// before the `async` block.
    pub fn deferred<F, Fut>(predicate: F) -> Self
    where
        F: Fn(&FieldValue, &RuleParam, &ValueMap) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self::new(move |value, param, all| Verdict::deferred(predicate(value, param, all)))
    }

    /// Calls the predicate.
    pub fn invoke(&self, value: &FieldValue, param: &RuleParam, all: &ValueMap) -> Verdict {
        (self.0)(value, param, all)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomRule").finish_non_exhaustive()
    }
}

// ============================================================================
// MESSAGE
// ============================================================================

/// Message registered alongside a custom rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMessage {
    /// One template, installed as an override on the registering engine only.
    Text(String),
    /// Templates keyed by locale, merged into the locale registry.
    Localized(IndexMap<String, String>),
}

impl From<&str> for RuleMessage {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RuleMessage {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RuleMessage {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self::Localized(
            entries
                .into_iter()
                .map(|(locale, text)| (locale.to_owned(), text.to_owned()))
                .collect(),
        )
    }
}

impl From<IndexMap<String, String>> for RuleMessage {
    fn from(value: IndexMap<String, String>) -> Self {
        Self::Localized(value)
    }
}

impl From<HashMap<String, String>> for RuleMessage {
    fn from(value: HashMap<String, String>) -> Self {
        Self::Localized(value.into_iter().collect())
    }
}
