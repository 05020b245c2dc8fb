use serde_json::Value;

use crate::category::{GenericPosMatch, ANONYMOUS};
use crate::error::OntologyError;

/// Anchor references for one category: terms paired with sense indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SynsetSpec {
    #[default]
    Empty,
    Pairs(Vec<(String, Vec<usize>)>),
}

impl SynsetSpec {
    pub fn pairs<I, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, Vec<usize>)>,
        T: Into<String>,
    {
        SynsetSpec::Pairs(pairs.into_iter().map(|(term, idx)| (term.into(), idx)).collect())
    }

    /// Accepts `null`, a list of `[term, [indices]]` pairs, or an object
    /// mapping terms to index lists.
    pub fn from_json(value: &Value) -> Result<Self, OntologyError> {
        match value {
            Value::Null => Ok(SynsetSpec::Empty),
            Value::Array(items) => items
                .iter()
                .map(|item| match item.as_array().map(Vec::as_slice) {
                    Some([Value::String(term), indices]) => {
                        parse_indices(term, indices).map(|idx| (term.clone(), idx))
                    }
                    _ => Err(OntologyError::Configuration {
                        reason: format!("expected a [term, [indices]] pair, found {item}"),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(SynsetSpec::Pairs),
            Value::Object(map) => map
                .iter()
                .map(|(term, indices)| parse_indices(term, indices).map(|idx| (term.clone(), idx)))
                .collect::<Result<Vec<_>, _>>()
                .map(SynsetSpec::Pairs),
            other => Err(OntologyError::Configuration {
                reason: format!("must be a list or a map, found {other}"),
            }),
        }
    }

    /// Every `(term, index)` reference in declaration order.
    pub fn anchor_refs(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        let pairs: &[(String, Vec<usize>)] = match self {
            SynsetSpec::Empty => &[],
            SynsetSpec::Pairs(pairs) => pairs,
        };
        pairs
            .iter()
            .flat_map(|(term, indices)| indices.iter().map(move |&i| (term.as_str(), i)))
    }

    pub fn is_empty(&self) -> bool {
        self.anchor_refs().next().is_none()
    }
}

fn parse_indices(term: &str, value: &Value) -> Result<Vec<usize>, OntologyError> {
    let invalid = || OntologyError::Configuration {
        reason: format!("indices for '{term}' must be a list of non-negative integers, found {value}"),
    };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_u64().and_then(|i| usize::try_from(i).ok()).ok_or_else(invalid))
        .collect()
}

/// Everything needed to construct one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: Option<String>,
    pub synsets: SynsetSpec,
    pub generic_pos: Option<GenericPosMatch>,
}

impl CategorySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_synsets(mut self, synsets: SynsetSpec) -> Self {
        self.synsets = synsets;
        self
    }

    pub fn with_generic_pos(mut self, rule: GenericPosMatch) -> Self {
        self.generic_pos = Some(rule);
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_and_list_forms_agree() {
        let from_map = SynsetSpec::from_json(&json!({"act": [1, 5], "event": [0]})).unwrap();
        let from_list = SynsetSpec::from_json(&json!([["act", [1, 5]], ["event", [0]]])).unwrap();

        assert_eq!(from_map, from_list);
        assert_eq!(
            from_map.anchor_refs().collect::<Vec<_>>(),
            vec![("act", 1), ("act", 5), ("event", 0)]
        );
    }

    #[test]
    fn test_map_keeps_authoring_order() {
        let spec = SynsetSpec::from_json(&json!({"quantity": [0], "amount": [2], "distance": [0]})).unwrap();
        let terms: Vec<&str> = spec.anchor_refs().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["quantity", "amount", "distance"]);
    }

    #[test]
    fn test_invalid_shapes_are_configuration_errors() {
        for bad in [json!("process"), json!(3), json!([["act"]]), json!({"act": "one"}), json!({"act": [-1]})] {
            let err = SynsetSpec::from_json(&bad).unwrap_err();
            assert!(matches!(err, OntologyError::Configuration { .. }), "accepted {bad}");
        }
    }

    #[test]
    fn test_empty_forms() {
        assert!(SynsetSpec::from_json(&Value::Null).unwrap().is_empty());
        assert!(SynsetSpec::from_json(&json!({})).unwrap().is_empty());
        assert!(SynsetSpec::pairs([("act", vec![])]).is_empty());
    }

    #[test]
    fn test_spec_names() {
        assert_eq!(CategorySpec::anonymous().display_name(), "Anonymous");
        let spec = CategorySpec::new("process").with_generic_pos(GenericPosMatch::Verb);
        assert_eq!(spec.display_name(), "process");
        assert_eq!(spec.generic_pos, Some(GenericPosMatch::Verb));
    }
}
