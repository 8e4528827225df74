// metadata capability trait and the in-memory type registry
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{
    DiscriminatorEntryDeclaration, DiscriminatorMap, DiscriminatorMapDeclaration,
    InheritanceDeclaration, TypeDescriptor,
};

/// Errors raised while building a registry or resolving a discriminator map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The metadata registry could not be obtained. Configuration-time
    /// failure, checked before any scan runs.
    #[error("entity mapping driver could not be loaded")]
    DriverUnavailable,

    /// Two distinct concrete types claim the same discriminator name.
    #[error(
        "found duplicate discriminator map entry \"{name}\" in \"{incoming}\", already used by \"{existing}\""
    )]
    DuplicateDiscriminator {
        name: String,
        existing: String,
        incoming: String,
    },

    /// A type with this name is already registered.
    #[error("mapped type \"{name}\" is already registered")]
    TypeAlreadyRegistered { name: String },
}

/// Read side of the mapped-type registry plus the write-back sink for
/// resolved discriminator entries.
///
/// The resolution passes depend only on this contract, never on a concrete
/// reflection or annotation mechanism. All getters hand out owned snapshots;
/// the registry is read-only for the duration of a pass and the only
/// mutation is the final per-entry write-back.
pub trait MetadataProvider {
    /// Every known mapped type name, complete and deduplicated, in a stable
    /// order. Scan results follow this order.
    fn all_type_names(&self) -> Vec<String>;

    fn descriptor(&self, name: &str) -> Option<TypeDescriptor>;

    fn inheritance(&self, name: &str) -> Option<InheritanceDeclaration>;

    fn discriminator_map(&self, name: &str) -> Option<DiscriminatorMapDeclaration>;

    fn discriminator_entry(&self, name: &str) -> Option<DiscriminatorEntryDeclaration>;

    /// Write one resolved entry into `root`'s metadata.
    fn register_discriminator_entry(&mut self, root: &str, name: &str, type_name: &str);

    /// Whether `child` is a strict transitive descendant of `ancestor`.
    ///
    /// Walks declared parent links. A cycle in parent declarations
    /// terminates the walk as "not a subclass" instead of diverging.
    fn is_subclass_of(&self, child: &str, ancestor: &str) -> bool {
        let mut seen: HashSet<String> = HashSet::new();
        let mut current = self.descriptor(child).and_then(|d| d.parent);

        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            if !seen.insert(parent.clone()) {
                return false;
            }
            current = self.descriptor(&parent).and_then(|d| d.parent);
        }

        false
    }
}

/// One registry record: a descriptor plus the declarations attached to it
/// and the resolved map that write-back fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedType {
    pub descriptor: TypeDescriptor,
    pub inheritance: Option<InheritanceDeclaration>,
    pub discriminator_map: Option<DiscriminatorMapDeclaration>,
    pub discriminator_entry: Option<DiscriminatorEntryDeclaration>,
    /// Populated by resolver write-back, empty until then.
    pub resolved: DiscriminatorMap,
}

impl MappedType {
    /// A record with no declarations. Fill in the rest with struct update
    /// syntax.
    pub fn new(descriptor: TypeDescriptor) -> Self {
        MappedType {
            descriptor,
            inheritance: None,
            discriminator_map: None,
            discriminator_entry: None,
            resolved: DiscriminatorMap::new(),
        }
    }
}

/// In-memory [`MetadataProvider`].
///
/// Registration order is the registry order that scans observe. Lookups go
/// through the name table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRegistry {
    names: Vec<String>,
    types: HashMap<String, MappedType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        TypeRegistry::default()
    }

    /// Register a mapped type. Duplicate names are refused, never silently
    /// replaced.
    pub fn add(&mut self, mapped: MappedType) -> Result<(), MappingError> {
        let name = mapped.descriptor.name.clone();
        if self.types.contains_key(&name) {
            return Err(MappingError::TypeAlreadyRegistered { name });
        }
        self.names.push(name.clone());
        self.types.insert(name, mapped);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MappedType> {
        self.types.get(name)
    }

    /// The map written back onto `root` by the last resolve pass.
    pub fn resolved_map(&self, root: &str) -> Option<&DiscriminatorMap> {
        self.types.get(root).map(|t| &t.resolved)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl MetadataProvider for TypeRegistry {
    fn all_type_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn descriptor(&self, name: &str) -> Option<TypeDescriptor> {
        self.types.get(name).map(|t| t.descriptor.clone())
    }

    fn inheritance(&self, name: &str) -> Option<InheritanceDeclaration> {
        self.types.get(name).and_then(|t| t.inheritance)
    }

    fn discriminator_map(&self, name: &str) -> Option<DiscriminatorMapDeclaration> {
        self.types.get(name).and_then(|t| t.discriminator_map.clone())
    }

    fn discriminator_entry(&self, name: &str) -> Option<DiscriminatorEntryDeclaration> {
        self.types.get(name).and_then(|t| t.discriminator_entry.clone())
    }

    fn register_discriminator_entry(&mut self, root: &str, name: &str, type_name: &str) {
        if let Some(mapped) = self.types.get_mut(root) {
            mapped.resolved.insert(name, type_name);
        }
    }
}
