// map merging and the short-name fallback
use crate::core::registry::MappingError;
use crate::core::types::{DiscriminatorMap, TypeDescriptor};

/// Fallback discriminator name for a synthesized self entry.
///
/// `app::models::Invoice` becomes `invoice`, an unqualified `Invoice` also
/// becomes `invoice`. Only self entries use this rule; discovered subclass
/// entries always carry their declared name.
pub fn short_name(type_name: &str) -> String {
    type_name
        .rsplit("::")
        .next()
        .unwrap_or(type_name)
        .to_lowercase()
}

/// Merge the three discriminator sources into the final map.
///
/// Precedence:
/// 1) explicit author entries are the base and are never overwritten
/// 2) a discovered entry is dropped silently when its type is already a
///    value in the map (under any name) or its name is already a key,
///    explicit intent and earlier discoveries win
/// 3) a concrete root not yet present as a value gets a synthesized self
///    entry under its short name; if that name is already taken the merge
///    fails, two types would share one discriminator
pub fn merge(
    explicit: &DiscriminatorMap,
    discovered: &DiscriminatorMap,
    root: &TypeDescriptor,
) -> Result<DiscriminatorMap, MappingError> {
    let mut merged = explicit.clone();

    for (name, type_name) in discovered.iter() {
        if merged.contains_type(type_name) || merged.contains_name(name) {
            continue;
        }
        merged.insert(name, type_name);
    }

    //the root must stay addressable even when never listed anywhere
    if !root.is_abstract && !merged.contains_type(&root.name) {
        let fallback = short_name(&root.name);

        if let Some(existing) = merged.get(&fallback) {
            return Err(MappingError::DuplicateDiscriminator {
                name: fallback.clone(),
                existing: existing.to_string(),
                incoming: root.name.clone(),
            });
        }

        merged.insert(fallback, root.name.clone());
    }

    Ok(merged)
}
