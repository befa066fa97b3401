use super::*;

fn assert_landscape(state: LayoutState) {
    assert_eq!(state.content_split_direction, SplitDirection::Horizontal);
    assert_eq!(state.header_size_in_percent(), 20);
    assert_eq!(state.body_size_in_percent(), 80);
    assert_eq!(state.left_child_size_in_percent(), 50);
    assert_eq!(state.right_child_size_in_percent(), 50);
}

fn assert_portrait(state: LayoutState) {
    assert_eq!(state.content_split_direction, SplitDirection::Vertical);
    assert_eq!(state.header_size_in_percent(), 15);
    assert_eq!(state.body_size_in_percent(), 85);
    assert_eq!(state.left_child_size_in_percent(), 55);
    assert_eq!(state.right_child_size_in_percent(), 45);
}

#[test]
fn full_hd_desktop_is_landscape() {
    assert_landscape(compute_layout(Viewport::new(1920.0, 1080.0)));
}

#[test]
fn phone_is_portrait() {
    assert_portrait(compute_layout(Viewport::new(375.0, 812.0)));
}

#[test]
fn square_takes_portrait_branch() {
    assert_portrait(compute_layout(Viewport::new(500.0, 500.0)));
}

#[test]
fn branch_follows_width_height_comparison_across_sizes() {
    for width in (0..=2000).step_by(125) {
        for height in (0..=2000).step_by(125) {
            let state = compute_layout(Viewport::new(width as f32, height as f32));
            if width > height {
                assert_landscape(state);
            } else {
                assert_portrait(state);
            }
            assert_eq!(
                u16::from(state.header_size_in_percent()) + u16::from(state.body_size_in_percent()),
                100
            );
            assert_eq!(
                u16::from(state.left_child_size_in_percent())
                    + u16::from(state.right_child_size_in_percent()),
                100
            );
            assert_eq!(state.page_split_direction, SplitDirection::Vertical);
        }
    }
}

#[test]
fn custom_presets_are_applied() {
    let mut presets = LayoutPresets::default();
    presets.portrait.header_body = SizePair::split(10);
    presets.split_disabled = false;

    let state = compute_layout_with(Viewport::new(320.0, 640.0), &presets);
    assert_eq!(state.header_size_in_percent(), 10);
    assert_eq!(state.body_size_in_percent(), 90);
    assert!(!state.split_disabled);

    let state = compute_layout_with(Viewport::new(640.0, 320.0), &presets);
    assert_eq!(state.header_size_in_percent(), 20);
}
