//! The immutable set of validators consulted by the engine.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::rules;
use crate::config::RuleConfig;
use crate::core::{Failure, FieldId, FieldValue};

/// A pure check of one field value.
///
/// Returns `None` when the value is acceptable.
pub trait Validator: Send + Sync {
    /// Checks `value`.
    fn validate(&self, value: &FieldValue) -> Option<Failure>;
}

impl<F> Validator for F
where
    F: Fn(&FieldValue) -> Option<Failure> + Send + Sync,
{
    fn validate(&self, value: &FieldValue) -> Option<Failure> {
        self(value)
    }
}

/// One validator per field, fixed at construction.
///
/// Cloning shares the validators.
#[derive(Clone, Default)]
pub struct ValidatorSet {
    validators: HashMap<FieldId, Arc<dyn Validator>>,
}

impl ValidatorSet {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> ValidatorSetBuilder {
        ValidatorSetBuilder::default()
    }

    /// The standard rules for all seven fields.
    #[must_use]
    pub fn standard(config: &RuleConfig) -> Self {
        let config = Arc::new(config.clone());
        let mut builder = Self::builder();
        for field in FieldId::ALL {
            let config = Arc::clone(&config);
            builder = match field {
                FieldId::FullName => builder.with(field, move |v: &FieldValue| {
                    rules::full_name(&config, v)
                }),
                FieldId::Email => {
                    builder.with(field, move |v: &FieldValue| rules::email(&config, v))
                }
                FieldId::Phone => {
                    builder.with(field, move |v: &FieldValue| rules::phone(&config, v))
                }
                FieldId::State | FieldId::City | FieldId::Profile => {
                    builder.with(field, move |v: &FieldValue| {
                        rules::required_choice(&config, field, v)
                    })
                }
                FieldId::Message => {
                    builder.with(field, move |v: &FieldValue| rules::message(&config, v))
                }
            };
        }
        builder.build()
    }

    /// The validator registered for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&dyn Validator> {
        self.validators.get(&field).map(|validator| validator.as_ref())
    }

    /// Runs the validator for `field`. A field without one accepts every value.
    #[must_use]
    pub fn check(&self, field: FieldId, value: &FieldValue) -> Option<Failure> {
        self.get(field).and_then(|validator| validator.validate(value))
    }

    /// Returns true if `field` has a validator.
    #[must_use]
    pub fn contains(&self, field: FieldId) -> bool {
        self.validators.contains_key(&field)
    }

    /// Number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns true if no validators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect();
        f.debug_struct("ValidatorSet").field("fields", &fields).finish()
    }
}

/// Builder for [`ValidatorSet`].
#[derive(Default)]
pub struct ValidatorSetBuilder {
    validators: HashMap<FieldId, Arc<dyn Validator>>,
}

impl ValidatorSetBuilder {
    /// Registers `validator` for `field`, replacing any earlier one.
    #[must_use]
    pub fn with(mut self, field: FieldId, validator: impl Validator + 'static) -> Self {
        self.validators.insert(field, Arc::new(validator));
        self
    }

    /// Removes the validator for `field`, leaving the field optional.
    #[must_use]
    pub fn without(mut self, field: FieldId) -> Self {
        self.validators.remove(&field);
        self
    }

    /// Freezes the set.
    #[must_use]
    pub fn build(self) -> ValidatorSet {
        ValidatorSet {
            validators: self.validators,
        }
    }
}
