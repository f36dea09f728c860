use super::*;

/// What an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IdentifierKind {
    #[display("sheet")]
    Sheet,
    #[display("column")]
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub kind: IdentifierKind,
}

impl Identifier {
    pub fn new(name: impl Into<String>, kind: IdentifierKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// How identifier names are compared against query text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseRule {
    #[default]
    Sensitive,
    /// ASCII case folding.
    Insensitive,
}

impl CaseRule {
    pub fn key<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            CaseRule::Sensitive => Cow::Borrowed(name),
            CaseRule::Insensitive => Cow::Owned(name.to_ascii_lowercase()),
        }
    }
}

/// Every sheet and column name visible to one editor.
///
/// Built in one go and never edited afterwards: a change in the open sheets
/// produces a new set. Insertion order is kept for completion listings; when a
/// name shows up twice (under the case rule) the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    case: CaseRule,
    entries: Vec<Identifier>,
    keys: HashSet<String>,
}

impl IdentifierSet {
    pub fn new(case: CaseRule) -> Self {
        Self {
            case,
            ..Self::default()
        }
    }

    pub fn from_identifiers(case: CaseRule, identifiers: impl IntoIterator<Item = Identifier>) -> Self {
        let mut set = Self::new(case);
        for identifier in identifiers {
            if set.keys.insert(case.key(&identifier.name).into_owned()) {
                set.entries.push(identifier);
            }
        }
        set
    }

    pub fn case_rule(&self) -> CaseRule {
        self.case
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(self.case.key(name).as_ref())
    }

    pub fn get(&self, name: &str) -> Option<&Identifier> {
        let key = self.case.key(name);
        self.entries
            .iter()
            .find(|i| self.case.key(&i.name) == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|i| i.name.as_str())
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(case: CaseRule, names: &[(&str, IdentifierKind)]) -> IdentifierSet {
        IdentifierSet::from_identifiers(case, names.iter().map(|(n, k)| Identifier::new(*n, *k)))
    }

    #[test]
    fn first_occurrence_wins() {
        let s = set(
            CaseRule::Sensitive,
            &[("sales", IdentifierKind::Sheet), ("sales", IdentifierKind::Column)],
        );
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("sales").map(|i| i.kind), Some(IdentifierKind::Sheet));
    }

    #[test]
    fn sensitive_keeps_case_variants_apart() {
        let s = set(
            CaseRule::Sensitive,
            &[("Region", IdentifierKind::Column), ("region", IdentifierKind::Column)],
        );
        assert_eq!(s.len(), 2);
        assert!(!s.contains("REGION"));
    }

    #[test]
    fn insensitive_folds_case() {
        let s = set(
            CaseRule::Insensitive,
            &[("Region", IdentifierKind::Column), ("region", IdentifierKind::Column)],
        );
        assert_eq!(s.len(), 1);
        assert!(s.contains("REGION"));
        assert_eq!(s.get("rEgIoN").map(|i| i.name.as_str()), Some("Region"));
    }

    #[test]
    fn keeps_insertion_order() {
        let s = set(
            CaseRule::Sensitive,
            &[
                ("b", IdentifierKind::Sheet),
                ("a", IdentifierKind::Column),
                ("c", IdentifierKind::Column),
            ],
        );
        assert_eq!(s.names().collect::<Vec<_>>(), ["b", "a", "c"]);
    }
}
