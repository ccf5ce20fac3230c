//! JSON serializer shared by all response paths.

use serde::Serialize;

use crate::config::schema::SerializerConfig;
use crate::serialization::depth;

/// Per-call serialization switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Apply the serializer's `max_depth` limit.
    pub max_depth_checks: bool,
}

impl SerializeOptions {
    pub fn depth_checked() -> Self {
        Self {
            max_depth_checks: true,
        }
    }
}

/// Serializes payloads to JSON text, optionally depth-limited.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    max_depth: Option<usize>,
    pretty: bool,
}

impl JsonSerializer {
    pub fn new(config: &SerializerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            pretty: config.pretty,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Serialize `data` to a JSON string.
    ///
    /// With depth checks on and a limit configured, the payload goes through
    /// an intermediate [`serde_json::Value`] so nested containers can be pruned.
    pub fn serialize<T>(&self, data: &T, options: SerializeOptions) -> serde_json::Result<String>
    where
        T: Serialize + ?Sized,
    {
        match self.max_depth {
            Some(limit) if options.max_depth_checks => {
                let mut value = serde_json::to_value(data)?;
                depth::prune(&mut value, limit);
                self.render(&value)
            }
            _ => self.render(data),
        }
    }

    fn render<T>(&self, data: &T) -> serde_json::Result<String>
    where
        T: Serialize + ?Sized,
    {
        if self.pretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        }
    }
}
