use crate::error::ProgramError;
use crate::graph::Position;
use crate::types::ArgType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The only document version this crate reads and writes.
pub const SUPPORTED_VERSION: u32 = 1;

/// `next_nodes` marker for "no successor".
pub const NO_SUCCESSOR: u32 = 0xFFFF_FFFF;

/// A flattened program: one command per node, addressed by array position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub version: u32,
    pub name: String,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub library_func_index: u32,
    pub pos: Position,
    /// Pin ids of the node's data outputs; these are the slots inputs refer to.
    #[serde(default)]
    pub output_argument: Vec<u32>,
    /// Command index per flow output, or `[NO_SUCCESSOR]`.
    #[serde(default)]
    pub next_nodes: Vec<u32>,
    #[serde(default)]
    pub input_argument: Vec<InputArgument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputArgument {
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    /// Canonical constant text, used only when `slots` is empty.
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub slots: Vec<u32>,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

impl Command {
    /// Whether the command has no successor at all.
    pub fn is_terminal(&self) -> bool {
        self.next_nodes.iter().all(|&n| n == NO_SUCCESSOR)
    }
}

impl Program {
    pub fn check_version(&self) -> Result<(), ProgramError> {
        check_version(self.version)
    }

    /// Parses a document. The version is checked before the body is looked at,
    /// so a newer document with a different shape is reported as a version error.
    pub fn from_json_str(json: &str) -> Result<Self, ProgramError> {
        let header: VersionHeader =
            serde_json::from_str(json).map_err(|e| ProgramError::JsonParseError(e.to_string()))?;
        check_version(header.version)?;
        serde_json::from_str(json).map_err(|e| ProgramError::JsonParseError(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ProgramError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    /// Renders the document with four-space indentation.
    pub fn to_json_string(&self) -> Result<String, ProgramError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| ProgramError::JsonParseError(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| ProgramError::JsonParseError(e.to_string()))
    }

    /// Writes the document. The text is fully rendered before the file is touched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProgramError> {
        let path = path.as_ref();
        let mut json = self.to_json_string()?;
        json.push('\n');
        fs::write(path, json).map_err(|e| ProgramError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn check_version(found: u32) -> Result<(), ProgramError> {
    if found != SUPPORTED_VERSION {
        return Err(ProgramError::UnsupportedVersion {
            found,
            supported: SUPPORTED_VERSION,
        });
    }
    Ok(())
}
