//! Deserialization of PVS structure files.
//!
//! A PVS document is a `PV_FILE` element holding a `section_structure`
//! with the flat component table, and optionally one or more
//! `section_properties` with per-component metadata. Fields that the
//! source format emits either as a single element or a list (instances,
//! properties) are typed as `Vec` so the rest of the crate never
//! branches on shape.
//!
//! Parsing is deliberately permissive: absent optional fields fall back
//! to empty defaults rather than failing, matching the tolerance the
//! format's producers rely on. Only a structurally unparsable document
//! is an error.

use serde::Deserialize;

use crate::error::Result;

/// A parsed PVS document.
#[derive(Debug, Deserialize)]
pub struct PvFile {
    /// The assembly structure section.
    pub section_structure: SectionStructure,
    /// Metadata property sections, in document order. Each section is
    /// positionally aligned with the component table.
    #[serde(default)]
    pub section_properties: Vec<PropertySection>,
}

impl PvFile {
    /// Deserialize a PVS document from its UTF-8 text.
    pub fn parse(data: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(data)?)
    }
}

/// The structure section: the ordered, flat component table.
///
/// PVS lists components bottom-up, so the top assembly is
/// conventionally the last entry.
#[derive(Debug, Deserialize)]
pub struct SectionStructure {
    /// The component table.
    #[serde(rename = "component", default)]
    pub components: Vec<Component>,
}

/// One node in the component table: an assembly grouping with child
/// instances, or a geometry leaf with a shape source.
#[derive(Debug, Deserialize)]
pub struct Component {
    /// Display name; not guaranteed unique.
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Child occurrences. A single occurrence in the source is
    /// normalized to a one-element list here.
    #[serde(rename = "component_instance", default)]
    pub instances: Vec<ComponentInstance>,
    /// Terminal geometry reference, present on leaves.
    #[serde(default)]
    pub shape_source: Option<ShapeSource>,
}

/// An occurrence of a child component within a parent.
#[derive(Debug, Deserialize)]
pub struct ComponentInstance {
    /// Index into the component table identifying the instantiated
    /// child.
    #[serde(rename = "@index")]
    pub index: usize,
    /// Opaque id discriminating this occurrence from other occurrences
    /// of the same child; becomes one path segment.
    #[serde(rename = "@origOccId", default)]
    pub orig_occ_id: String,
    /// Hide flag for the occurrence itself.
    #[serde(rename = "@hide_self", default)]
    pub hide_self: Option<String>,
    /// Hide flag for the occurrence's subtree.
    #[serde(rename = "@hide_child", default)]
    pub hide_child: Option<String>,
    /// Row-major 3x3 rotation as nine comma-separated floats; identity
    /// when absent.
    #[serde(rename = "@orientation", default)]
    pub orientation: Option<String>,
    /// Translation as three comma-separated floats in source units;
    /// zero when absent.
    #[serde(rename = "@translation", default)]
    pub translation: Option<String>,
}

impl ComponentInstance {
    /// Whether this occurrence and its entire subtree are excluded
    /// from output. Either hide flag excludes the whole subtree.
    ///
    /// A flag counts as set when the attribute is present with a
    /// non-empty value.
    pub fn hidden(&self) -> bool {
        let set = |flag: &Option<String>| flag.as_deref().is_some_and(|v| !v.is_empty());
        set(&self.hide_self) || set(&self.hide_child)
    }
}

/// Terminal geometry reference on a leaf component.
#[derive(Debug, Deserialize)]
pub struct ShapeSource {
    /// Name of the geometry file.
    #[serde(rename = "@file_name", default)]
    pub file_name: String,
}

/// One metadata section: per-component property references, aligned
/// positionally with the component table.
#[derive(Debug, Deserialize)]
pub struct PropertySection {
    /// Property references, one slot per component position.
    #[serde(rename = "property_component_ref", default)]
    pub component_refs: Vec<PropertyComponentRef>,
}

/// The properties attached to one component slot.
#[derive(Debug, Deserialize)]
pub struct PropertyComponentRef {
    /// Named properties. A single property in the source is normalized
    /// to a one-element list here.
    #[serde(rename = "property", default)]
    pub properties: Vec<Property>,
}

/// A named key/value property.
#[derive(Debug, Deserialize)]
pub struct Property {
    /// Property name.
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Property value.
    #[serde(rename = "@value", default)]
    pub value: String,
}
