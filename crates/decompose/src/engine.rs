//! Rebuilds nested entity trees from denormalized flat rows.

use crate::entity::{Child, Entity};
use indexmap::IndexMap;
use model::{
    core::value::Value,
    errors::DecomposeError,
    records::row::FlatRow,
    schema::{Cardinality, DecomposeSchema},
};
use tracing::trace;

/// Decomposes flat rows into entities, treating the root as a list.
///
/// Rows are scanned once, in input order; entities come back in
/// first-row-seen order and are never re-sorted. Zero rows yield an empty
/// list.
pub fn decompose(
    schema: &DecomposeSchema,
    rows: &[FlatRow],
) -> Result<Vec<Entity>, DecomposeError> {
    let refs: Vec<&FlatRow> = rows.iter().collect();
    let entities = decompose_level(schema, &refs)?;
    trace!(rows = rows.len(), entities = entities.len(), "decomposed result set");
    Ok(entities)
}

/// Variant for roots expected to resolve to at most one entity.
pub fn decompose_one(
    schema: &DecomposeSchema,
    rows: &[FlatRow],
) -> Result<Option<Entity>, DecomposeError> {
    let mut entities = decompose(schema, rows)?;
    match entities.len() {
        0 => Ok(None),
        1 => Ok(entities.pop()),
        _ => Err(DecomposeError::AmbiguousRoot),
    }
}

fn decompose_level(
    schema: &DecomposeSchema,
    rows: &[&FlatRow],
) -> Result<Vec<Entity>, DecomposeError> {
    // Group rows by primary-key tuple, first-seen order. A row whose pk
    // tuple contains a null carries no entity at this level.
    let mut groups: IndexMap<Vec<Value>, Vec<&FlatRow>> = IndexMap::new();
    for row in rows {
        if let Some(key) = pk_tuple(schema, row)? {
            groups.entry(key).or_default().push(row);
        }
    }

    let mut entities = Vec::with_capacity(groups.len());
    for rows_of_entity in groups.into_values() {
        let Some(first) = rows_of_entity.first() else {
            continue;
        };

        let mut fields = IndexMap::new();
        for (prefixed, original) in &schema.columns {
            let value = first.get(prefixed).cloned().unwrap_or(Value::Null);
            fields.insert(original.clone(), value);
        }

        let mut children = IndexMap::new();
        for (name, child_schema) in &schema.children {
            let nested = decompose_level(child_schema, &rows_of_entity)?;
            let slot = match child_schema.cardinality {
                Cardinality::Many => Child::Many(nested),
                Cardinality::One => match nested.len() {
                    0 | 1 => Child::One(nested.into_iter().next().map(Box::new)),
                    _ => return Err(DecomposeError::AmbiguousChild(name.clone())),
                },
            };
            children.insert(name.clone(), slot);
        }

        entities.push(Entity::new(fields, children));
    }
    Ok(entities)
}

/// The pk tuple of a row at this level. `Ok(None)` means the row holds no
/// entity here (outer-join absence); a pk column missing from the row
/// entirely means the rows do not match the schema.
fn pk_tuple(
    schema: &DecomposeSchema,
    row: &FlatRow,
) -> Result<Option<Vec<Value>>, DecomposeError> {
    let mut key = Vec::with_capacity(schema.pk.len());
    for column in &schema.pk {
        match row.get(column) {
            None => return Err(DecomposeError::MissingPkColumn(column.clone())),
            Some(Value::Null) => return Ok(None),
            Some(value) => key.push(value.clone()),
        }
    }
    Ok(Some(key))
}
