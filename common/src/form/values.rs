/// Current text of every form column, in schema order.
///
/// Keys are fixed when the set is built; `set` only updates existing columns,
/// so the key set always matches the schema the set was built from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditableValues {
    entries: Vec<(String, String)>,
}

impl EditableValues {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces the value of an existing column. Returns `false` for columns
    /// that are not part of the set.
    pub fn set(&mut self, column: &str, value: String) -> bool {
        match self.entries.iter_mut().find(|(name, _)| name == column) {
            Some((_, current)) => {
                *current = value;
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(String, String)> for EditableValues {
    /// Later duplicates of a column are dropped.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut values = EditableValues::default();
        for (column, value) in iter {
            if values.get(&column).is_none() {
                values.entries.push((column, value));
            }
        }
        values
    }
}
