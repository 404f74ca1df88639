//! Rule execution.
//!
//! A field is validated in two passes. The synchronous pass walks the
//! executable rules in declaration order and records every immediate
//! failure; deferred verdicts are set aside. The asynchronous pass then
//! awaits the set-aside verdicts in declaration order and appends their
//! failures. Synchronous failures therefore always precede asynchronous ones.
//!
//! Every rule except `required` passes vacuously on an empty value. A rule
//! whose parameter is `false` is switched off. Unknown rule names are logged
//! and skipped; they never fail a field.

use futures::future::BoxFuture;
use tracing::{Instrument, debug, debug_span, trace, warn};

use crate::custom::Verdict;
use crate::engine::{Predicate, Validator};
use crate::result::{ErrorEntry, UnknownRule, ValidationResult};
use crate::schema::{RuleParam, RuleSet, Schema, ValueMap};
use crate::validators::BuiltinRule;
use crate::value::{FieldValue, NULL};

/// A deferred verdict captured during the synchronous pass.
struct PendingRule<'a> {
    rule: &'a str,
    param: &'a RuleParam,
    verdict: BoxFuture<'static, bool>,
}

/// Output of the synchronous pass over one field.
struct FieldPass<'a> {
    errors: Vec<ErrorEntry>,
    pending: Vec<PendingRule<'a>>,
}

impl Predicate<'_> {
    fn invoke(self, value: &FieldValue, param: &RuleParam, all: &ValueMap) -> Verdict {
        match self {
            Self::Builtin(rule) => Verdict::Ready(rule.check(value, param, all)),
            Self::Custom(rule) => rule.invoke(value, param, all),
        }
    }
}

impl Validator {
    fn sync_pass<'a>(
        &self,
        value: &FieldValue,
        rules: &'a RuleSet,
        all: &ValueMap,
    ) -> FieldPass<'a> {
        let resolver = self.resolver();
        let empty = value.is_empty();
        let mut pass = FieldPass {
            errors: Vec::new(),
            pending: Vec::new(),
        };

        for (rule, param) in rules.rules() {
            if param.is_disabled() {
                trace!(rule, "rule disabled");
                continue;
            }
            let Some(predicate) = self.lookup(rule) else {
                warn!(rule, "unknown rule, skipping");
                continue;
            };
            if empty && rule != BuiltinRule::Required.name() {
                trace!(rule, "empty value, skipping");
                continue;
            }

            match predicate.invoke(value, param, all) {
                Verdict::Ready(true) => trace!(rule, "passed"),
                Verdict::Ready(false) => {
                    trace!(rule, "failed");
                    pass.errors
                        .push(ErrorEntry::new(rule, resolver.resolve(rule, param, rules)));
                }
                Verdict::Deferred(verdict) => pass.pending.push(PendingRule {
                    rule,
                    param,
                    verdict,
                }),
            }
        }
        pass
    }

    /// Validates one value against its rule set, synchronous rules only.
    ///
    /// Deferred verdicts of custom rules are dropped without being awaited,
    /// so they never contribute errors here. Use
    /// [`validate_field_async`](Self::validate_field_async) to observe them.
    ///
    /// `all` is the full value map, read by cross-field rules.
    #[must_use]
    pub fn validate_field(
        &self,
        value: &FieldValue,
        rules: &RuleSet,
        all: &ValueMap,
    ) -> Vec<ErrorEntry> {
        let pass = self.sync_pass(value, rules, all);
        if !pass.pending.is_empty() {
            debug!(
                dropped = pass.pending.len(),
                "deferred verdicts ignored on synchronous path"
            );
        }
        pass.errors
    }

    /// Validates one value against its rule set, awaiting deferred verdicts.
    ///
    /// Errors from synchronous rules come first, followed by errors from
    /// deferred rules, each group in declaration order.
    pub async fn validate_field_async(
        &self,
        value: &FieldValue,
        rules: &RuleSet,
        all: &ValueMap,
    ) -> Vec<ErrorEntry> {
        let FieldPass {
            mut errors,
            pending,
        } = self.sync_pass(value, rules, all);

        let resolver = self.resolver();
        for PendingRule {
            rule,
            param,
            verdict,
        } in pending
        {
            if verdict.await {
                trace!(rule, "deferred rule passed");
            } else {
                trace!(rule, "deferred rule failed");
                errors.push(ErrorEntry::new(rule, resolver.resolve(rule, param, rules)));
            }
        }
        errors
    }

    /// Validates every field of `schema` against `values`, synchronous rules only.
    ///
    /// Fields missing from `values` are validated as null.
    #[must_use]
    #[tracing::instrument(skip_all, fields(fields = schema.len(), locale = %self.locale))]
    pub fn validate(&self, schema: &Schema, values: &ValueMap) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (field, rules) in schema.iter() {
            let value = values.get(field).unwrap_or(&NULL);
            let errors = debug_span!("field", name = field)
                .in_scope(|| self.validate_field(value, rules, values));
            result.record(field, errors);
        }
        debug!(valid = result.valid, errors = result.error_count(), "schema validated");
        result
    }

    /// Validates every field of `schema` against `values`, awaiting deferred
    /// verdicts.
    ///
    /// Fields are processed one after another in schema order.
    #[tracing::instrument(skip_all, fields(fields = schema.len(), locale = %self.locale))]
    pub async fn validate_async(&self, schema: &Schema, values: &ValueMap) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (field, rules) in schema.iter() {
            let value = values.get(field).unwrap_or(&NULL);
            let errors = self
                .validate_field_async(value, rules, values)
                .instrument(debug_span!("field", name = field))
                .await;
            result.record(field, errors);
        }
        debug!(valid = result.valid, errors = result.error_count(), "schema validated");
        result
    }

    /// Lists every rule name in `schema` that resolves to neither a custom nor
    /// a built-in rule, without validating anything.
    #[must_use]
    pub fn check_schema(&self, schema: &Schema) -> Vec<UnknownRule> {
        let mut unknown = Vec::new();
        for (field, rules) in schema.iter() {
            for (rule, _) in rules.rules() {
                if !self.has_rule(rule) {
                    unknown.push(UnknownRule {
                        field: field.to_owned(),
                        rule: rule.to_owned(),
                    });
                }
            }
        }
        unknown
    }
}
