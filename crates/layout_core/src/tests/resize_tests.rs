use super::*;

#[test]
fn oversized_capacity_is_clamped_instead_of_panicking() {
    let notifier = ResizeNotifier::new(usize::MAX);
    let mut subscription = notifier.subscribe();
    notifier.notify(Viewport::new(10.0, 20.0));
    assert_eq!(
        subscription.drain_latest(),
        Drained::Pending(Some(Viewport::new(10.0, 20.0)))
    );
}

#[test]
fn zero_capacity_still_delivers() {
    let notifier = ResizeNotifier::new(0);
    let mut subscription = notifier.subscribe();
    assert_eq!(notifier.notify(Viewport::new(1.0, 1.0)), 1);
    assert_eq!(
        subscription.drain_latest(),
        Drained::Pending(Some(Viewport::new(1.0, 1.0)))
    );
}

#[test]
fn drain_keeps_newest_and_reports_close() {
    let notifier = ResizeNotifier::default();
    let mut subscription = notifier.subscribe();
    assert_eq!(subscription.drain_latest(), Drained::Pending(None));

    notifier.notify(Viewport::new(1.0, 2.0));
    notifier.notify(Viewport::new(3.0, 4.0));
    drop(notifier);
    assert_eq!(
        subscription.drain_latest(),
        Drained::Closed(Some(Viewport::new(3.0, 4.0)))
    );
}
