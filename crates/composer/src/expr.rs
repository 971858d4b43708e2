use model::core::scalar::ScalarKind;

/// A computed SQL expression with a declared result kind.
///
/// The text is spliced verbatim into the projection (`expr AS "alias_name"`);
/// it is caller-trusted, like ON conditions. The kind is purely declarative
/// and travels with the field so extensions stay independently typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    text: String,
    kind: ScalarKind,
}

impl Expr {
    pub fn new(text: &str, kind: ScalarKind) -> Self {
        Expr {
            text: text.to_string(),
            kind,
        }
    }

    pub fn number(text: &str) -> Self {
        Self::new(text, ScalarKind::Number)
    }

    pub fn string(text: &str) -> Self {
        Self::new(text, ScalarKind::String)
    }

    pub fn boolean(text: &str) -> Self {
        Self::new(text, ScalarKind::Boolean)
    }

    pub fn date(text: &str) -> Self {
        Self::new(text, ScalarKind::Date)
    }

    pub fn enumeration(text: &str) -> Self {
        Self::new(text, ScalarKind::Enum)
    }

    pub fn json(text: &str) -> Self {
        Self::new(text, ScalarKind::Json)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &ScalarKind {
        &self.kind
    }
}
