//! Discriminator map resolution for mapped-entity hierarchies.
//!
//! Given a root type and a registry of all mapped types, this crate works out
//! which discriminator name identifies which concrete subtype and writes the
//! finished map back into the root's metadata. The pipeline is a single
//! synchronous pass per root:
//!
//! - scan the registry for transitive subclasses of the root
//! - collect their declared discriminator entries, rejecting duplicate names
//! - merge with the root's explicit map and a synthesized self entry
//! - register every merged entry on the root via the [`MetadataProvider`]
//!
//! The registry substrate is abstracted behind [`MetadataProvider`];
//! [`TypeRegistry`] is the crate's in-memory implementation. Containers hook
//! the pass in through [`events::EntityDiscriminator`] at metadata-load time.

pub mod core;
pub mod events;

pub use crate::core::registry::{MappedType, MappingError, MetadataProvider, TypeRegistry};
pub use crate::core::resolve::resolve;
pub use crate::core::types::{
    DiscriminatorEntryDeclaration, DiscriminatorMap, DiscriminatorMapDeclaration,
    InheritanceDeclaration, InheritanceKind, TypeDescriptor,
};
pub use crate::events::{EntityDiscriminator, LoadClassMetadata};
