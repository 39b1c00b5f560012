//! Object name derivation.
//!
//! - Entities: `<model without models/, lower case, spaces as _>:<skin>`
//! - Instances: `<file without instances/, lower case, spaces as _>`
//! - Everything else: `<tag>:<index within its collection>`

use super::types::Skin;

/// Prefix stripped from entity model paths.
pub const MODELS_PREFIX: &str = "models/";

/// Prefix stripped from instance file paths.
pub const INSTANCES_PREFIX: &str = "instances/";

/// Tag of reflection probe names.
pub const ENV_CUBEMAP_TAG: &str = "env_cubemap";

/// Tag of point light names.
pub const LIGHT_TAG: &str = "light";

/// Tag of speaker names.
pub const AMBIENT_TAG: &str = "ambient";

/// Lower-case `value`, drop a leading `prefix` and replace spaces.
///
/// The prefix is matched after lower-casing, so `Models/` and `MODELS/`
/// are stripped too.
fn strip_prefix_lower(prefix: &str, value: &str) -> String {
    let lower = value.to_lowercase();
    let stripped = lower.strip_prefix(prefix).unwrap_or(&lower);
    stripped.replace(' ', "_")
}

/// Name of an entity object.
pub fn entity_name(model: &str, skin: &Skin) -> String {
    format!("{}:{}", strip_prefix_lower(MODELS_PREFIX, model), skin)
}

/// Name of an instance object.
pub fn instance_name(file: &str) -> String {
    strip_prefix_lower(INSTANCES_PREFIX, file)
}

/// Name of the `index`-th object of a collection.
pub fn indexed_name(tag: &str, index: usize) -> String {
    format!("{}:{}", tag, index)
}
