//! Root and revision resolution.

use crate::parser::{Component, PropertySection};

/// Revision id used when no properties table is supplied or no
/// matching property is found.
// Hard-coded; a PLM integration would supply this instead.
pub const DEFAULT_REVISION: &str = "1";

/// Locate the root component's index in the table.
///
/// Picks the first component named `root_name` when one is given.
/// When the name is absent or not found, defaults to the last entry:
/// PVS lists components bottom-up, so the top assembly comes last.
///
/// The caller must ensure `components` is non-empty.
pub fn root_index(components: &[Component], root_name: Option<&str>) -> usize {
    let default_index = components.len().saturating_sub(1);
    let Some(name) = root_name else {
        return default_index;
    };
    components
        .iter()
        .position(|c| c.name == name)
        .unwrap_or(default_index)
}

/// Revision lookup configuration: the document's property sections
/// plus the name of the property whose value supplies revision ids.
#[derive(Debug, Clone, Copy)]
pub struct RevisionLookup<'a> {
    /// Property sections in document order.
    pub sections: &'a [PropertySection],
    /// Name of the property holding the revision id.
    pub property_name: &'a str,
}

/// Resolve the revision id for the component at positional `index`.
///
/// Scans the sections in document order, reading each section's
/// reference at the component's slot. The first section holding the
/// named property with a non-empty value wins; an empty or missing
/// value falls through to the next section. Without a lookup, or when
/// no section matches, returns [`DEFAULT_REVISION`].
pub fn revision_id(index: usize, lookup: Option<RevisionLookup<'_>>) -> String {
    let Some(lookup) = lookup else {
        return DEFAULT_REVISION.to_string();
    };
    for section in lookup.sections {
        if let Some(component_ref) = section.component_refs.get(index) {
            let matched = component_ref
                .properties
                .iter()
                .find(|p| p.name == lookup.property_name);
            if let Some(property) = matched {
                if !property.value.is_empty() {
                    return property.value.clone();
                }
            }
        }
    }
    DEFAULT_REVISION.to_string()
}
