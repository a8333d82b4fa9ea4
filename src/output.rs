//! The single JSON object a plugin invocation prints.
//!
//! The plugin host reads one line from stdout, so every invocation renders
//! exactly one [`PluginOutput`] followed by a newline.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::PluginError;

/// Result of a plugin action. Each variant serializes to an object with a
/// single key, so success and error keys never appear together.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PluginOutput {
    Greeting { message: String },
    Version { version: String },
    Error { error: String },
}

impl PluginOutput {
    pub fn greeting(message: impl Into<String>) -> Self {
        Self::Greeting {
            message: message.into(),
        }
    }

    pub fn version(version: impl Into<String>) -> Self {
        Self::Version {
            version: version.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Process exit code for this output: 0 on success, 1 on error.
    pub fn exit_code(&self) -> i32 {
        if self.is_error() {
            1
        } else {
            0
        }
    }

    /// Encodes the output as a single JSON line, without the trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        let mut buf = Vec::with_capacity(64);
        self.write_json(&mut buf)?;
        String::from_utf8(buf).map_err(serde::ser::Error::custom)
    }

    fn write_json<W: io::Write>(&self, writer: W) -> serde_json::Result<()> {
        let mut serializer = Serializer::with_formatter(writer, SpacedFormatter);
        self.serialize(&mut serializer)
    }
}

impl From<PluginError> for PluginOutput {
    fn from(err: PluginError) -> Self {
        Self::error(err.to_string())
    }
}

/// Single-line formatter that separates keys from values with `": "` and
/// members with `", "`, matching what the plugin host emits itself.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Writes an encoded result as one newline-terminated line and flushes.
pub fn emit<W: io::Write>(writer: &mut W, line: &str) -> io::Result<()> {
    writeln!(writer, "{line}")?;
    writer.flush()
}
