// data model for mapped types and discriminator maps
use serde::{Deserialize, Serialize};

/// Inheritance mapping strategy declared on a root type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InheritanceKind {
    /// No shared-schema hierarchy, every type stands alone.
    #[default]
    None,
    SingleTable,
    Joined,
}

impl InheritanceKind {
    //only strategies that store several concrete types in one shared schema
    //need a discriminator to tell rows apart
    pub fn requires_discriminator(self) -> bool {
        matches!(self, InheritanceKind::SingleTable | InheritanceKind::Joined)
    }
}

/// Inheritance declaration attached to a root type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceDeclaration {
    pub kind: InheritanceKind,
}

impl InheritanceDeclaration {
    pub fn new(kind: InheritanceKind) -> Self {
        InheritanceDeclaration { kind }
    }
}

/// Structural facts about one mapped type. Identity is `name`.
///
/// Fully qualified names use `::` as the namespace delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    pub is_abstract: bool,
    /// Declared parent type name, `None` for hierarchy roots.
    pub parent: Option<String>,
}

impl TypeDescriptor {
    /// A concrete, parentless descriptor. Adjust fields for anything else.
    pub fn new(name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            is_abstract: false,
            parent: None,
        }
    }
}

/// Discriminator name one concrete type declares for itself when it
/// participates in an ancestor's map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscriminatorEntryDeclaration {
    pub name: String,
}

impl DiscriminatorEntryDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        DiscriminatorEntryDeclaration { name: name.into() }
    }
}

/// Explicit author-declared map on a root type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscriminatorMapDeclaration {
    pub entries: DiscriminatorMap,
}

/// Insertion-ordered discriminator-name to type-name mapping.
///
/// Registries are small, so lookups are linear scans over the entry list.
/// Keys are unique; the resolution passes additionally keep values unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscriminatorMap {
    entries: Vec<(String, String)>,
}

impl DiscriminatorMap {
    pub fn new() -> Self {
        DiscriminatorMap {
            entries: Vec::new(),
        }
    }

    /// Bind `name` to `type_name`, replacing an existing binding for `name`.
    pub fn insert(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        let name = name.into();
        let type_name = type_name.into();
        for (existing, bound) in &mut self.entries {
            if *existing == name {
                *bound = type_name;
                return;
            }
        }
        self.entries.push((name, type_name));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    //value check, a type may only back one entry in a resolved map
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.entries.iter().any(|(_, t)| t == type_name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for DiscriminatorMap {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut map = DiscriminatorMap::new();
        for (name, type_name) in iter {
            map.insert(name, type_name);
        }
        map
    }
}
