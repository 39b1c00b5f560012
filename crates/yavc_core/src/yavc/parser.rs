//! YAVC scene file parser.
//!
//! Two revisions of the format exist:
//!
//! - **JSON** (current): an object with `Entities`, `Instances`,
//!   `EnvCubemaps`, `Lights` and `Ambients` arrays, parsed with serde.
//! - **Lines** (legacy): one entity per line,
//!   `name r g b loc_x loc_y loc_z rot_x rot_y rot_z`.

use thiserror::Error;

use super::options::SceneFormat;
use super::types::{LegacyEntity, SceneFile, YavcDocument};

/// Number of whitespace-separated fields on a legacy line.
const LEGACY_FIELD_COUNT: usize = 10;

/// Errors that can occur during YAVC parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid scene document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error at line {line}: {message}")]
    Line { line: usize, message: String },

    #[error("Invalid number format at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Guess the format revision from the content.
///
/// JSON documents start with `{` (after optional whitespace or a BOM);
/// anything else is treated as legacy lines.
pub fn detect_format(content: &str) -> SceneFormat {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with('{') {
        SceneFormat::Json
    } else {
        SceneFormat::Lines
    }
}

/// Parse a JSON scene document.
pub fn parse_document(content: &str) -> ParseResult<YavcDocument> {
    let content = content.trim_start_matches('\u{feff}');
    Ok(serde_json::from_str(content)?)
}

/// Parse the legacy line format.
///
/// Every line must hold exactly ten fields; blank lines and lines with
/// missing or extra fields are errors.
pub fn parse_legacy_lines(content: &str) -> ParseResult<Vec<LegacyEntity>> {
    let mut entities = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_num = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != LEGACY_FIELD_COUNT {
            return Err(ParseError::Line {
                line: line_num,
                message: format!(
                    "expected {} fields, found {}",
                    LEGACY_FIELD_COUNT,
                    fields.len()
                ),
            });
        }

        let numbers = fields[1..]
            .iter()
            .map(|s| parse_number(s, line_num))
            .collect::<ParseResult<Vec<f32>>>()?;

        entities.push(LegacyEntity {
            name: fields[0].to_string(),
            color: [numbers[0], numbers[1], numbers[2]],
            location: [numbers[3], numbers[4], numbers[5]],
            rotation: [numbers[6], numbers[7], numbers[8]],
        });
    }

    Ok(entities)
}

/// Parse a scene file in the given format.
pub fn parse_scene(content: &str, format: SceneFormat) -> ParseResult<SceneFile> {
    let format = match format {
        SceneFormat::Auto => detect_format(content),
        other => other,
    };

    match format {
        SceneFormat::Lines => Ok(SceneFile::Legacy(parse_legacy_lines(content)?)),
        _ => Ok(SceneFile::Document(parse_document(content)?)),
    }
}

fn parse_number(s: &str, line: usize) -> ParseResult<f32> {
    s.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
        line,
        value: s.to_string(),
    })
}
