// discriminator entry collection
use tracing::trace;

use crate::core::registry::{MappingError, MetadataProvider};
use crate::core::types::{DiscriminatorMap, TypeDescriptor};

/// Collect declared discriminator entries from the scanner's candidates.
///
/// Per candidate, in scanner order:
/// 1) abstract types never participate as concrete variants, skip
/// 2) no declared entry means the type opted out, skip
/// 3) insert (entry name -> type name); a name already bound to a different
///    type fails the whole pass
///
/// Uniqueness is global to one pass, unrelated branches of the hierarchy
/// still collide. The accumulator is created fresh here on every call and
/// never stored anywhere, so concurrent passes cannot corrupt each other.
pub fn collect_entries<P: MetadataProvider + ?Sized>(
    provider: &P,
    candidates: &[TypeDescriptor],
) -> Result<DiscriminatorMap, MappingError> {
    let mut discovered = DiscriminatorMap::new();

    for candidate in candidates {
        if candidate.is_abstract {
            continue;
        }

        let Some(entry) = provider.discriminator_entry(&candidate.name) else {
            continue;
        };

        if let Some(existing) = discovered.get(&entry.name) {
            //a deduplicated registry cannot present the same type twice, so
            //an occupied slot is always a conflict between two types
            if existing != candidate.name.as_str() {
                return Err(MappingError::DuplicateDiscriminator {
                    name: entry.name.clone(),
                    existing: existing.to_string(),
                    incoming: candidate.name.clone(),
                });
            }
            continue;
        }

        trace!(
            "discovered discriminator entry \"{}\" -> {}",
            entry.name, candidate.name
        );
        discovered.insert(entry.name, candidate.name.clone());
    }

    Ok(discovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{MappedType, TypeRegistry};
    use crate::core::types::DiscriminatorEntryDeclaration;

    fn mk_type(name: &str, entry: Option<&str>, is_abstract: bool) -> MappedType {
        MappedType {
            discriminator_entry: entry.map(DiscriminatorEntryDeclaration::new),
            ..MappedType::new(TypeDescriptor {
                name: name.to_string(),
                is_abstract,
                parent: Some("Animal".to_string()),
            })
        }
    }

    fn registry_of(types: Vec<MappedType>) -> (TypeRegistry, Vec<TypeDescriptor>) {
        let mut registry = TypeRegistry::new();
        let mut candidates = Vec::new();
        for mapped in types {
            candidates.push(mapped.descriptor.clone());
            registry.add(mapped).unwrap();
        }
        (registry, candidates)
    }

    #[test]
    fn collects_declared_entries_in_candidate_order() {
        let (registry, candidates) = registry_of(vec![
            mk_type("Dog", Some("dog"), false),
            mk_type("Cat", Some("cat"), false),
        ]);

        let discovered = collect_entries(&registry, &candidates).unwrap();

        let entries: Vec<(&str, &str)> = discovered.iter().collect();
        assert_eq!(entries, vec![("dog", "Dog"), ("cat", "Cat")]);
    }

    #[test]
    fn skips_abstract_types_even_with_a_declared_entry() {
        let (registry, candidates) = registry_of(vec![
            mk_type("Dog", Some("dog"), false),
            mk_type("Feline", Some("feline"), true),
        ]);

        let discovered = collect_entries(&registry, &candidates).unwrap();

        assert!(!discovered.contains_name("feline"));
        assert!(!discovered.contains_type("Feline"));
        assert_eq!(discovered.len(), 1);
    }

    #[test]
    fn skips_candidates_without_an_entry_declaration() {
        let (registry, candidates) = registry_of(vec![
            mk_type("Dog", Some("dog"), false),
            mk_type("Puppy", None, false),
        ]);

        let discovered = collect_entries(&registry, &candidates).unwrap();

        assert_eq!(discovered.len(), 1);
        assert!(!discovered.contains_type("Puppy"));
    }

    #[test]
    fn duplicate_entry_name_across_branches_fails_and_names_both_types() {
        //Dog and Cat sit on unrelated branches, uniqueness is still global
        let (registry, candidates) = registry_of(vec![
            mk_type("Dog", Some("pet"), false),
            mk_type("Puppy", None, false),
            mk_type("Cat", Some("pet"), false),
        ]);

        let err = collect_entries(&registry, &candidates).unwrap_err();

        assert_eq!(
            err,
            MappingError::DuplicateDiscriminator {
                name: "pet".to_string(),
                existing: "Dog".to_string(),
                incoming: "Cat".to_string(),
            }
        );
    }

    #[test]
    fn empty_candidates_collect_nothing() {
        let (registry, _) = registry_of(vec![]);
        let discovered = collect_entries(&registry, &[]).unwrap();
        assert!(discovered.is_empty());
    }
}
