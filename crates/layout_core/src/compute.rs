use crate::domain::{LayoutState, Orientation, SizePair, SplitDirection, Viewport};

/// Sizing applied for one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationPreset {
    pub content_split_direction: SplitDirection,
    pub header_body: SizePair,
    pub left_right: SizePair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPresets {
    pub landscape: OrientationPreset,
    pub portrait: OrientationPreset,
    pub split_disabled: bool,
}

impl LayoutPresets {
    pub fn for_orientation(&self, orientation: Orientation) -> &OrientationPreset {
        match orientation {
            Orientation::Landscape => &self.landscape,
            Orientation::Portrait => &self.portrait,
        }
    }
}

impl Default for LayoutPresets {
    fn default() -> Self {
        Self {
            landscape: OrientationPreset {
                content_split_direction: SplitDirection::Horizontal,
                header_body: SizePair::split(20),
                left_right: SizePair::split(50),
            },
            portrait: OrientationPreset {
                content_split_direction: SplitDirection::Vertical,
                header_body: SizePair::split(15),
                left_right: SizePair::split(55),
            },
            split_disabled: true,
        }
    }
}

pub fn compute_layout(viewport: Viewport) -> LayoutState {
    compute_layout_with(viewport, &LayoutPresets::default())
}

pub fn compute_layout_with(viewport: Viewport, presets: &LayoutPresets) -> LayoutState {
    let preset = presets.for_orientation(viewport.orientation());
    LayoutState {
        page_split_direction: SplitDirection::Vertical,
        header_body: preset.header_body,
        content_split_direction: preset.content_split_direction,
        left_right: preset.left_right,
        split_disabled: presets.split_disabled,
    }
}

#[cfg(test)]
#[path = "tests/compute_tests.rs"]
mod tests;
