use crate::expr::Expr;
use model::core::scalar::ScalarKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    Computed(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn scalar(name: &str, kind: ScalarKind) -> Self {
        FieldDef {
            name: name.to_string(),
            kind: FieldKind::Scalar(kind),
        }
    }

    pub fn computed(name: &str, expr: Expr) -> Self {
        FieldDef {
            name: name.to_string(),
            kind: FieldKind::Computed(expr),
        }
    }
}

/// An ordered, immutable set of `(name, kind)` field descriptors.
///
/// The template defines a shape once; projections filter and extend it
/// without ever reordering the surviving fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTemplate {
    fields: Vec<FieldDef>,
}

impl FieldTemplate {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        FieldTemplate { fields }
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keeps only the named fields, in declared order (not argument order).
    /// Unknown names are ignored, as is a second mention of the same field.
    pub(crate) fn keep(&self, names: &[&str]) -> Self {
        FieldTemplate {
            fields: self
                .fields
                .iter()
                .filter(|f| names.contains(&f.name.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Drops the named fields, keeping declared order for the rest.
    pub(crate) fn without(&self, names: &[&str]) -> Self {
        FieldTemplate {
            fields: self
                .fields
                .iter()
                .filter(|f| !names.contains(&f.name.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Appends derived fields to the end without touching prior fields.
    pub(crate) fn append(&self, extra: Vec<FieldDef>) -> Self {
        let mut fields = self.fields.clone();
        fields.extend(extra);
        FieldTemplate { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> FieldTemplate {
        FieldTemplate::new(vec![
            FieldDef::scalar("id", ScalarKind::Number),
            FieldDef::scalar("name", ScalarKind::String),
            FieldDef::scalar("age", ScalarKind::Number),
        ])
    }

    #[test]
    fn keep_preserves_declared_order() {
        let kept = template().keep(&["age", "id"]);
        let names: Vec<_> = kept.names().collect();
        assert_eq!(names, vec!["id", "age"]);
    }

    #[test]
    fn without_ignores_unknown_names() {
        let rest = template().without(&["age", "missing"]);
        let names: Vec<_> = rest.names().collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn append_goes_to_the_end() {
        let extended = template().append(vec![FieldDef::computed(
            "adult",
            Expr::boolean("age >= 21"),
        )]);
        let names: Vec<_> = extended.names().collect();
        assert_eq!(names, vec!["id", "name", "age", "adult"]);
    }
}
