// resolve orchestration and write-back
use tracing::{debug, trace};

use crate::core::collect::collect_entries;
use crate::core::merge::merge;
use crate::core::registry::{MappingError, MetadataProvider};
use crate::core::scan::find_subclasses;
use crate::core::types::DiscriminatorMap;

/// Resolve the discriminator map for `root_name` and write it back into the
/// root's metadata.
///
/// Steps:
/// 1) fail fast with `DriverUnavailable` when no provider handle exists
/// 2) roots that are unknown or declare no discriminator-bearing
///    inheritance are an explicit no-op, nothing is modified
/// 3) scan -> collect -> merge; any error aborts before write-back, so the
///    root metadata sees either the full merged map or nothing
/// 4) register every merged entry through the provider
///
/// The returned map equals what was written back. Every accumulator is
/// local to this call; resolving different roots concurrently is safe.
pub fn resolve<P: MetadataProvider + ?Sized>(
    provider: Option<&mut P>,
    root_name: &str,
) -> Result<DiscriminatorMap, MappingError> {
    let provider = provider.ok_or(MappingError::DriverUnavailable)?;

    let Some(root) = provider.descriptor(root_name) else {
        trace!("\"{root_name}\" is not a mapped type, skipping");
        return Ok(DiscriminatorMap::new());
    };

    let requires = provider
        .inheritance(root_name)
        .is_some_and(|decl| decl.kind.requires_discriminator());
    if !requires {
        trace!("\"{root_name}\" declares no discriminator-bearing inheritance, skipping");
        return Ok(DiscriminatorMap::new());
    }

    let subclasses = find_subclasses(&*provider, root_name);
    let discovered = collect_entries(&*provider, &subclasses)?;

    let explicit = provider
        .discriminator_map(root_name)
        .map(|decl| decl.entries)
        .unwrap_or_default();

    let merged = merge(&explicit, &discovered, &root)?;

    for (name, type_name) in merged.iter() {
        provider.register_discriminator_entry(root_name, name, type_name);
    }

    debug!(
        "resolved {} discriminator entries for \"{root_name}\"",
        merged.len()
    );

    Ok(merged)
}
