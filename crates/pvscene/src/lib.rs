#![warn(missing_docs)]

//! pvscene — flattens PVS CAD assembly structure files into
//! positioned scene items ready for upload to a rendering platform.
//!
//! The pipeline is a single synchronous pass: deserialize the
//! `PV_FILE` document, pick the root component, then walk the
//! instance graph depth-first, assigning each visited occurrence a
//! slash-delimited path identity and, for geometry leaves, a composed
//! transform and source-file correlation.
//!
//! # Example
//!
//! ```no_run
//! use pvscene::process_pvs;
//!
//! let xml = std::fs::read_to_string("assembly.pvs").unwrap();
//! let items = process_pvs(&xml, None, None).unwrap();
//! println!("{} scene item(s)", items.len());
//! ```

mod error;
mod flatten;
mod item;
mod parser;
mod resolve;

pub use error::{PvsError, Result};
pub use flatten::create_items;
pub use item::{ItemSource, SceneItem, PATH_ID_ROOT};
pub use parser::{
    Component, ComponentInstance, Property, PropertyComponentRef, PropertySection, PvFile,
    SectionStructure, ShapeSource,
};
pub use resolve::{revision_id, root_index, RevisionLookup, DEFAULT_REVISION};

/// Convert a PVS document into a flat list of scene items.
///
/// `root_name` selects the assembly root by component name, defaulting
/// to the last component in the table. `revision_property` names the
/// metadata property whose value supplies each part's revision id;
/// when absent every revision id is [`DEFAULT_REVISION`].
///
/// Items come back in pre-order document order; callers may sort by
/// depth for upload without losing within-level ordering.
pub fn process_pvs(
    data: &str,
    root_name: Option<&str>,
    revision_property: Option<&str>,
) -> Result<Vec<SceneItem>> {
    let file = PvFile::parse(data)?;
    create_items(&file, root_name, revision_property)
}
