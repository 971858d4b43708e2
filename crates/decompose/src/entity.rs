use indexmap::IndexMap;
use model::core::value::Value;

/// A reconstructed nested object: this level's fields under their original
/// names, plus one slot per declared child.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    fields: IndexMap<String, Value>,
    children: IndexMap<String, Child>,
}

/// A child slot: an ordered list for array-cardinality children, a nullable
/// singleton for single-cardinality children.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Many(Vec<Entity>),
    One(Option<Box<Entity>>),
}

impl Entity {
    pub(crate) fn new(fields: IndexMap<String, Value>, children: IndexMap<String, Child>) -> Self {
        Entity { fields, children }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn child(&self, name: &str) -> Option<&Child> {
        self.children.get(name)
    }

    /// The entities of an array-cardinality child, or `None` when no child
    /// of that name (or of that shape) exists.
    pub fn many(&self, name: &str) -> Option<&[Entity]> {
        match self.children.get(name) {
            Some(Child::Many(entities)) => Some(entities),
            _ => None,
        }
    }

    /// The resolved entity of a single-cardinality child; outer `None` when
    /// no such child exists, inner `None` when it resolved to null.
    pub fn one(&self, name: &str) -> Option<Option<&Entity>> {
        match self.children.get(name) {
            Some(Child::One(entity)) => Some(entity.as_deref()),
            _ => None,
        }
    }

    /// Renders fields and children as one JSON object, the shape the layer
    /// hands back to applications.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for (name, value) in &self.fields {
            object.insert(name.clone(), value.to_json());
        }
        for (name, child) in &self.children {
            let rendered = match child {
                Child::Many(entities) => {
                    serde_json::Value::Array(entities.iter().map(Entity::to_json).collect())
                }
                Child::One(Some(entity)) => entity.to_json(),
                Child::One(None) => serde_json::Value::Null,
            };
            object.insert(name.clone(), rendered);
        }
        serde_json::Value::Object(object)
    }
}
