use layout_core::{
    Drained, LayoutComponent, ResizeNotifier, Settings, SplitDirection, Viewport,
};

#[test]
fn window_rotation_flips_layout_until_teardown() {
    let settings = Settings::default();
    let presets = settings.presets().expect("presets");
    let notifier = ResizeNotifier::new(settings.notifier_capacity);

    let mut component = LayoutComponent::new(presets);
    component.init(&notifier, Viewport::new(1920.0, 1080.0));
    let state = component.state();
    assert_eq!(state.content_split_direction, SplitDirection::Horizontal);
    assert_eq!(
        (state.header_size_in_percent(), state.body_size_in_percent()),
        (20, 80)
    );

    notifier.notify(Viewport::new(1080.0, 1920.0));
    assert!(component.poll());
    let state = component.state();
    assert_eq!(state.content_split_direction, SplitDirection::Vertical);
    assert_eq!(
        (
            state.left_child_size_in_percent(),
            state.right_child_size_in_percent()
        ),
        (55, 45)
    );

    component.destroy();
    notifier.notify(Viewport::new(1920.0, 1080.0));
    assert!(!component.poll());
    assert_eq!(component.state(), state);
}

#[test]
fn several_components_share_one_notifier() {
    let notifier = ResizeNotifier::default();
    let mut first = LayoutComponent::default();
    let mut second = LayoutComponent::default();
    first.init(&notifier, Viewport::new(800.0, 600.0));
    second.init(&notifier, Viewport::new(800.0, 600.0));

    assert_eq!(notifier.notify(Viewport::new(600.0, 800.0)), 2);
    assert!(first.poll());
    assert!(second.poll());
    assert_eq!(first.state(), second.state());
}

#[test]
fn raw_subscription_drains_to_newest_viewport() {
    let notifier = ResizeNotifier::default();
    let mut subscription = notifier.subscribe();
    notifier.notify(Viewport::new(800.0, 600.0));
    notifier.notify(Viewport::new(600.0, 800.0));

    match subscription.drain_latest() {
        Drained::Pending(Some(viewport)) => assert_eq!(viewport, Viewport::new(600.0, 800.0)),
        other => panic!("unexpected drain result {other:?}"),
    }
    drop(subscription);
    assert_eq!(notifier.subscriber_count(), 0);
}
