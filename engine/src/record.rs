use error::ExportError;
use neo4rs::{BoltType, Row};
use value::Entity;

/// One result row: the bound names with their values.
///
/// The driver keeps a row's columns in a hash map, so rows built from it are
/// ordered by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Entity)>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn with<E: Into<Entity>>(mut self, name: &str, entity: E) -> Self {
        self.push(name, entity.into());
        self
    }

    pub fn push(&mut self, name: &str, entity: Entity) {
        self.fields.push((name.to_string(), entity));
    }

    /// Null counts as not bound, the way an `OPTIONAL MATCH` miss comes back.
    pub fn take(&mut self, name: &str) -> Option<Entity> {
        let pos = self
            .fields
            .iter()
            .position(|(n, e)| n == name && !e.is_null())?;
        Some(self.fields.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Entity)> {
        self.fields.iter()
    }
}

impl TryFrom<Row> for Record {
    type Error = ExportError;

    fn try_from(row: Row) -> Result<Self, Self::Error> {
        let mut keys = row.keys().into_iter().map(|k| k.value.clone()).collect::<Vec<_>>();
        keys.sort();

        let mut record = Record::new();
        for key in keys {
            let value = row.get::<BoltType>(&key)?;
            record.push(&key, value.into());
        }
        Ok(record)
    }
}
