//! Instance-graph flattening.
//!
//! Walks the component table from the resolved root, depth-first and
//! pre-order, emitting one scene item per visited occurrence. A
//! component referenced by several instances is visited once per
//! occurrence, each visit producing a distinct path. Siblings keep
//! document order so a downstream stage can sort by depth without
//! losing within-level ordering.

use pvscene_math::{floats_or, Transform, IDENTITY_ROTATION, ZERO_TRANSLATION};

use crate::error::{PvsError, Result};
use crate::item::{ItemSource, SceneItem};
use crate::parser::{Component, PvFile};
use crate::resolve::{revision_id, root_index, RevisionLookup};

/// Divisor converting raw PVS translation units (millimeters) into
/// target-platform units (meters).
const TRANSLATION_SCALE: f64 = 1000.0;

/// Flatten `file`'s instance graph into scene items.
///
/// `root_name` selects the root component by name, defaulting to the
/// last table entry. `revision_property` enables revision lookup in
/// the document's property sections; without it every leaf's revision
/// id is the default.
pub fn create_items(
    file: &PvFile,
    root_name: Option<&str>,
    revision_property: Option<&str>,
) -> Result<Vec<SceneItem>> {
    let components = &file.section_structure.components;
    if components.is_empty() {
        return Err(PvsError::EmptyAssembly);
    }

    let lookup = revision_property.map(|property_name| RevisionLookup {
        sections: &file.section_properties,
        property_name,
    });

    let mut items = Vec::new();
    let root = root_index(components, root_name);
    visit(components, root, String::new(), None, lookup, &mut items)?;
    Ok(items)
}

fn visit(
    components: &[Component],
    index: usize,
    path_id: String,
    transform: Option<Transform>,
    lookup: Option<RevisionLookup<'_>>,
    items: &mut Vec<SceneItem>,
) -> Result<()> {
    let component = &components[index];
    if !component.instances.is_empty() {
        // Assembly grouping: one record for the node itself, then the
        // children. Groupings carry no geometry and no local transform.
        items.push(SceneItem::at_path(&path_id, None, None));

        for instance in &component.instances {
            if instance.hidden() {
                continue;
            }
            let local = Transform::from_parts(
                &floats_or(IDENTITY_ROTATION, instance.orientation.as_deref()),
                &floats_or(ZERO_TRANSLATION, instance.translation.as_deref()),
                TRANSLATION_SCALE,
            );
            let composed = match &transform {
                Some(parent) => parent.then(&local),
                None => local,
            };
            if instance.index >= components.len() {
                return Err(PvsError::IndexOutOfBounds {
                    index: instance.index,
                    len: components.len(),
                });
            }
            visit(
                components,
                instance.index,
                format!("{path_id}/{}", instance.orig_occ_id),
                Some(composed),
                lookup,
                items,
            )?;
        }
    } else if let Some(shape) = &component.shape_source {
        // Geometry leaf: the accumulated transform is attached only
        // when it differs from the identity.
        let transform = transform
            .filter(|t| !t.is_identity())
            .map(|t| t.to_row_major());
        let source = ItemSource {
            file_name: shape.file_name.clone(),
            supplied_part_id: component.name.clone(),
            supplied_revision_id: revision_id(index, lookup),
        };
        items.push(SceneItem::at_path(&path_id, Some(source), transform));
    }
    // A component with neither instances nor a shape source emits
    // nothing.
    Ok(())
}
