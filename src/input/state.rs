//! Input state machine for a single target.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Moving               (press away from the edge margins)
//! Idle -> Resizing             (press within RESIZE_MARGIN of one or two edges)
//!
//! Any -> Idle                  (release, or the target is removed)
//! ```

/// Which edges of the target a resize drags. At most one of `top`/`bottom`
/// and one of `left`/`right` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizeEdges {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn vertical(&self) -> bool {
        self.top || self.bottom
    }

    /// Both axes active: a corner zone.
    pub fn is_corner(&self) -> bool {
        self.horizontal() && self.vertical()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// No active interaction
    #[default]
    Idle,

    /// Dragging the whole target
    Moving,

    /// Dragging one edge or corner
    Resizing {
        /// Edges captured at press time
        edges: ResizeEdges,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Returns true while a press is being dragged
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    /// Get the edges being resized, if any
    pub fn resize_edges(&self) -> Option<ResizeEdges> {
        match self {
            Self::Resizing { edges } => Some(*edges),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_moving(&mut self) {
        *self = Self::Moving;
    }

    /// Start resizing; an empty edge set degrades to a move.
    pub fn start_resizing(&mut self, edges: ResizeEdges) {
        *self = if edges.is_empty() {
            Self::Moving
        } else {
            Self::Resizing { edges }
        };
    }
}
