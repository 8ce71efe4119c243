//! Scene-item output model.
//!
//! The flat records produced by the converter, shaped for direct JSON
//! serialization. Optional fields are omitted from the output rather
//! than serialized as null.

use serde::Serialize;

/// Path id of the assembly root.
pub const PATH_ID_ROOT: &str = "/";

const PATH_ID_SEPARATOR: char = '/';

/// Correlation block tying a geometry leaf back to its source file and
/// part identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSource {
    /// Geometry file referenced by the leaf's shape source.
    pub file_name: String,
    /// Component name, used as the supplied part id.
    pub supplied_part_id: String,
    /// Resolved revision id for the part.
    pub supplied_revision_id: String,
}

/// One flattened scene item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneItem {
    /// Number of path segments below the root; 0 for the root itself.
    pub depth: usize,
    /// Supplied id of the parent item; absent only on the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Source correlation, present only on geometry leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ItemSource>,
    /// Slash-delimited path identity; the root is `/`.
    pub supplied_id: String,
    /// Row-major 4x4 transform; omitted when it is the identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<[f64; 16]>,
}

impl SceneItem {
    /// Build a scene item at `path_id`, deriving the supplied id,
    /// parent id, and depth.
    ///
    /// An empty `path_id` denotes the root: its supplied id is `/` and
    /// it has no parent. For any other path the parent id is the path
    /// with its last segment removed, or `/` when that is empty.
    pub fn at_path(
        path_id: &str,
        source: Option<ItemSource>,
        transform: Option<[f64; 16]>,
    ) -> Self {
        let supplied_id = if path_id.is_empty() {
            PATH_ID_ROOT.to_string()
        } else {
            path_id.to_string()
        };
        let parent_id = if supplied_id == PATH_ID_ROOT {
            None
        } else {
            let head = supplied_id
                .rsplit_once(PATH_ID_SEPARATOR)
                .map(|(head, _)| head)
                .unwrap_or("");
            Some(if head.is_empty() {
                PATH_ID_ROOT.to_string()
            } else {
                head.to_string()
            })
        };

        Self {
            depth: path_id.matches(PATH_ID_SEPARATOR).count(),
            parent_id,
            source,
            supplied_id,
            transform,
        }
    }
}
