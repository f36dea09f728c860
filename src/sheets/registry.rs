use super::*;
use itertools::Itertools as _;

/// An open sheet as far as the editor cares: its name and its column headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
}

impl Sheet {
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Sheet name to column headers for every open sheet, in opening order.
///
/// This is what a sheet-registry notification carries. Re-inserting a name
/// replaces that sheet's columns in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRegistry {
    sheets: Vec<Sheet>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sheet: Sheet) {
        match self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Sheet> {
        let index = self.sheets.iter().position(|s| s.name == name)?;
        Some(self.sheets.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }

    /// Union of every sheet name and every column header, duplicates collapsed.
    ///
    /// Sheet names come first, then columns in sheet order. A column sharing
    /// its name with a sheet stays a sheet.
    pub fn identifiers(&self, case: CaseRule) -> IdentifierSet {
        let sheets = self
            .sheets
            .iter()
            .map(|s| Identifier::new(s.name.as_str(), IdentifierKind::Sheet));
        let columns = self
            .sheets
            .iter()
            .flat_map(|s| s.columns.iter())
            .unique_by(|c| case.key(c).into_owned())
            .map(|c| Identifier::new(c.as_str(), IdentifierKind::Column));
        IdentifierSet::from_identifiers(case, sheets.chain(columns))
    }
}

impl<N, C, I> FromIterator<(N, I)> for SheetRegistry
where
    N: Into<String>,
    C: Into<String>,
    I: IntoIterator<Item = C>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (name, columns) in iter {
            registry.insert(Sheet::new(name, columns));
        }
        registry
    }
}
