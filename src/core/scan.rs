// hierarchy scanning
use crate::core::registry::MetadataProvider;
use crate::core::types::TypeDescriptor;

/// Find every registered type that is a strict transitive descendant of
/// `root`, in registry order.
///
/// A type with no declared parent can never be a descendant and is skipped
/// before the chain walk. Pure query, no side effects.
pub fn find_subclasses<P: MetadataProvider + ?Sized>(
    provider: &P,
    root: &str,
) -> Vec<TypeDescriptor> {
    let mut found = Vec::new();

    for name in provider.all_type_names() {
        if name == root {
            continue;
        }

        let Some(descriptor) = provider.descriptor(&name) else {
            continue;
        };

        if descriptor.parent.is_none() {
            continue;
        }

        if provider.is_subclass_of(&name, root) {
            found.push(descriptor);
        }
    }

    found
}
