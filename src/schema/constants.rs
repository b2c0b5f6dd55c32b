/// Derived-table format version - follows semantic versioning.
pub const FEMTO_FORMAT_VERSION: &str = "1.0.0";

/// Schema metadata key for the format version.
pub const KEY_FORMAT_VERSION: &str = "femto:format_version";

/// Schema metadata key naming the table a schema describes.
pub const KEY_TABLE_NAME: &str = "femto:table";

/// Field metadata key for the human-readable column description.
pub const KEY_DESCRIPTION: &str = "femto:description";

/// Field metadata key for the physical unit of a column.
pub const KEY_UNIT: &str = "femto:unit";

/// Schema metadata key for an embedded JSON
/// [`ConventionManifest`](crate::conventions::ConventionManifest).
pub const KEY_CONVENTIONS: &str = "femto:conventions";
