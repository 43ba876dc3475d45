//! Viewport width → layout selection

use serde::{Deserialize, Serialize};

/// Widths up to and including this value use the card layout
pub const MOBILE_MAX_WIDTH: u32 = 600;

/// Give up on width detection after this long and fall back to the grid
pub const DETECTION_TIMEOUT_MS: u32 = 3_000;

/// Shown while the width is unknown
pub const LOADING_MESSAGE: &str = "loading screen size...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Stacked cards (mobile)
    Cards,
    /// Data grid (desktop)
    Grid,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Cards => "cards",
            LayoutMode::Grid => "grid",
        }
    }
}

pub fn select_layout(width: u32) -> LayoutMode {
    if width <= MOBILE_MAX_WIDTH {
        LayoutMode::Cards
    } else {
        LayoutMode::Grid
    }
}

/// Outcome of the one-time width query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewportState {
    /// Query in flight, rendering is held back
    #[default]
    Pending,
    Resolved(u32),
    /// Query failed or timed out
    Failed,
}

impl ViewportState {
    /// Layout to render, `None` while pending. A failed query renders the grid.
    pub fn layout(&self) -> Option<LayoutMode> {
        match self {
            ViewportState::Pending => None,
            ViewportState::Resolved(width) => Some(select_layout(*width)),
            ViewportState::Failed => Some(LayoutMode::Grid),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ViewportState::Pending)
    }
}

impl From<Option<u32>> for ViewportState {
    fn from(width: Option<u32>) -> Self {
        match width {
            Some(w) => ViewportState::Resolved(w),
            None => ViewportState::Failed,
        }
    }
}
