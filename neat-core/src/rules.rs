use serde::{Deserialize, Serialize};

/// Configuration for the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRules {
    /// Target column count for reflowed text
    pub max_line_len: usize,

    /// Whether to avoid a lone word on the last wrapped line by moving
    /// the previous line's last word down next to it
    pub avoid_runts: bool,

    /// Whether to drop blank lines between list items when every item
    /// rendered on a single line
    pub compact_lists: bool,
}

impl Default for RenderRules {
    fn default() -> Self {
        Self {
            max_line_len: crate::DEFAULT_LINE_LEN,
            avoid_runts: true,
            compact_lists: true,
        }
    }
}

impl RenderRules {
    /// Rules identical to the defaults except for the target width.
    pub fn with_max_line_len(max_line_len: usize) -> Self {
        Self {
            max_line_len,
            ..Self::default()
        }
    }
}
