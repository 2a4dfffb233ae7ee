//! Definition: the schema node
//!
//! A definition describes one position of a document tree: the validators
//! run against the value there, and optionally the structure below it
//! (object fields or a homogeneous list). The shape is an enum, so a node
//! can never be both an object and a list.
//!
//! Definitions are immutable once built and may be shared across threads.

use std::collections::BTreeMap;

use crate::rules::Rule;

/// Structure expected below a node.
#[derive(Debug, Clone, Default)]
pub enum Shape {
    /// No structural checks; the validators are the whole validation.
    #[default]
    Scalar,
    /// An object whose declared fields each have their own definition.
    Object(BTreeMap<String, Definition>),
    /// A list whose every element matches the item definition.
    List(Box<Definition>),
}

/// Schema node.
#[derive(Debug, Clone, Default)]
pub struct Definition {
    validators: Vec<Rule>,
    shape: Shape,
    accept_extra_property: bool,
    accept_not_defined_property: bool,
}

impl Definition {
    /// Create a scalar node
    pub fn scalar(validators: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            validators: validators.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create an object node
    pub fn object<K: Into<String>>(
        validators: impl IntoIterator<Item = Rule>,
        fields: impl IntoIterator<Item = (K, Definition)>,
    ) -> Self {
        Self {
            validators: validators.into_iter().collect(),
            shape: Shape::Object(fields.into_iter().map(|(k, d)| (k.into(), d)).collect()),
            ..Self::default()
        }
    }

    /// Create a list node
    pub fn list(validators: impl IntoIterator<Item = Rule>, item: Definition) -> Self {
        Self {
            validators: validators.into_iter().collect(),
            shape: Shape::List(Box::new(item)),
            ..Self::default()
        }
    }

    /// Ignore object keys that are not declared.
    pub fn accept_extra_property(mut self, accept: bool) -> Self {
        self.accept_extra_property = accept;
        self
    }

    /// Tolerate declared keys that are absent. The child definition still
    /// runs against the missing slot, so presence validators keep firing.
    pub fn accept_not_defined_property(mut self, accept: bool) -> Self {
        self.accept_not_defined_property = accept;
        self
    }

    pub fn validators(&self) -> &[Rule] {
        &self.validators
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Declared fields, if this is an object node
    pub fn fields(&self) -> Option<&BTreeMap<String, Definition>> {
        match &self.shape {
            Shape::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Item definition, if this is a list node
    pub fn list_of(&self) -> Option<&Definition> {
        match &self.shape {
            Shape::List(item) => Some(item),
            _ => None,
        }
    }

    pub fn accepts_extra_property(&self) -> bool {
        self.accept_extra_property
    }

    pub fn accepts_not_defined_property(&self) -> bool {
        self.accept_not_defined_property
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    fn user() -> Definition {
        Definition::object(
            [rules::is_map()],
            [
                ("name", Definition::scalar([rules::non_nullable(), rules::string()])),
                ("age", Definition::scalar([rules::non_nullable(), rules::integer()])),
            ],
        )
    }

    #[test]
    fn test_default_is_bare_scalar() {
        let def = Definition::default();
        assert!(def.validators().is_empty());
        assert!(matches!(def.shape(), Shape::Scalar));
        assert!(!def.accepts_extra_property());
        assert!(!def.accepts_not_defined_property());
    }

    #[test]
    fn test_object_fields() {
        let def = user();
        let fields = def.fields().unwrap();
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["age", "name"]);
        assert_eq!(fields["age"].validators().len(), 2);
        assert!(def.list_of().is_none());
    }

    #[test]
    fn test_list_of() {
        let def = Definition::list([rules::is_list()], user());
        assert!(def.fields().is_none());
        assert!(def.list_of().unwrap().fields().is_some());
    }

    #[test]
    fn test_policy_flags() {
        let def = user()
            .accept_extra_property(true)
            .accept_not_defined_property(true);
        assert!(def.accepts_extra_property());
        assert!(def.accepts_not_defined_property());
    }

    #[test]
    fn test_definition_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Definition>();
    }
}
