// metadata-load integration surface
use crate::core::registry::{MappingError, MetadataProvider};
use crate::core::resolve::resolve;

/// Event delivered by the container once per root type when that type's
/// metadata is loaded.
///
/// The provider handle is optional because the container may fail to obtain
/// its mapping driver; the subscriber turns that into the startup error.
pub struct LoadClassMetadata<'a, P: MetadataProvider + ?Sized> {
    pub provider: Option<&'a mut P>,
    /// Name of the root type whose metadata is being loaded.
    pub root: &'a str,
}

/// Subscriber that extends discriminator maps whenever class metadata loads.
///
/// When and how often the event fires is the container's decision, as is
/// surfacing a returned error on its startup failure path. Each invocation
/// is one self-contained resolve pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityDiscriminator;

impl EntityDiscriminator {
    pub fn new() -> Self {
        EntityDiscriminator
    }

    /// Resolve and write back the discriminator map for the event's root.
    ///
    /// The write-back into the root metadata is the observable effect; the
    /// computed map itself is dropped here.
    pub fn load_class_metadata<P: MetadataProvider + ?Sized>(
        &self,
        event: LoadClassMetadata<'_, P>,
    ) -> Result<(), MappingError> {
        resolve(event.provider, event.root).map(|_| ())
    }
}
