use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Axis along which two sibling regions are arranged. `Horizontal` places
/// them side by side, `Vertical` stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDirection {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square viewports count as portrait.
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Two percentages that always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct SizePair {
    first: u8,
    second: u8,
}

impl SizePair {
    /// Saturates at 100 for the first half.
    pub const fn split(first: u8) -> Self {
        let first = if first > 100 { 100 } else { first };
        Self {
            first,
            second: 100 - first,
        }
    }

    pub fn try_new(first: u8, second: u8) -> Result<Self, LayoutError> {
        if u16::from(first) + u16::from(second) != 100 {
            return Err(LayoutError::InvalidSizePair { first, second });
        }
        Ok(Self { first, second })
    }

    pub const fn first(&self) -> u8 {
        self.first
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub fn first_fraction(&self) -> f32 {
        f32::from(self.first) / 100.0
    }
}

impl TryFrom<(u8, u8)> for SizePair {
    type Error = LayoutError;

    fn try_from((first, second): (u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(first, second)
    }
}

impl From<SizePair> for (u8, u8) {
    fn from(pair: SizePair) -> Self {
        (pair.first, pair.second)
    }
}

/// Everything the view layer needs to arrange the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub page_split_direction: SplitDirection,
    pub header_body: SizePair,
    pub content_split_direction: SplitDirection,
    pub left_right: SizePair,
    pub split_disabled: bool,
}

impl LayoutState {
    pub fn header_size_in_percent(&self) -> u8 {
        self.header_body.first()
    }

    pub fn body_size_in_percent(&self) -> u8 {
        self.header_body.second()
    }

    pub fn left_child_size_in_percent(&self) -> u8 {
        self.left_right.first()
    }

    pub fn right_child_size_in_percent(&self) -> u8 {
        self.left_right.second()
    }

    pub fn orientation(&self) -> Orientation {
        match self.content_split_direction {
            SplitDirection::Horizontal => Orientation::Landscape,
            SplitDirection::Vertical => Orientation::Portrait,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            page_split_direction: SplitDirection::Vertical,
            header_body: SizePair::split(20),
            content_split_direction: SplitDirection::Horizontal,
            left_right: SizePair::split(50),
            split_disabled: true,
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
