use super::*;
use crate::nodes::input::types::PointerEventKind;
use std::cell::Cell;

fn move_event() -> PointerEvent {
    PointerEvent::mouse(PointerEventKind::Move, 1.0, 2.0)
}

#[test]
fn listeners_receive_events_while_subscribed() {
    let scope = PointerScope::new();
    let hits = Rc::new(Cell::new(0));

    let subscription = scope.subscribe({
        let hits = Rc::clone(&hits);
        move |_| hits.set(hits.get() + 1)
    });
    assert_eq!(scope.listener_count(), 1);
    assert!(subscription.is_active());

    scope.dispatch(&move_event());
    scope.dispatch(&move_event());
    assert_eq!(hits.get(), 2);

    drop(subscription);
    assert_eq!(scope.listener_count(), 0);
    scope.dispatch(&move_event());
    assert_eq!(hits.get(), 2);
}

#[test]
fn clones_share_one_registry() {
    let scope = PointerScope::new();
    let other = scope.clone();
    let _subscription = other.subscribe(|_| {});
    assert_eq!(scope.listener_count(), 1);
}

#[test]
fn listener_can_drop_its_own_subscription() {
    let scope = PointerScope::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let hits = Rc::new(Cell::new(0));

    let subscription = scope.subscribe({
        let slot = Rc::clone(&slot);
        let hits = Rc::clone(&hits);
        move |_| {
            hits.set(hits.get() + 1);
            slot.borrow_mut().take();
        }
    });
    slot.borrow_mut().replace(subscription);

    scope.dispatch(&move_event());
    assert_eq!(hits.get(), 1);
    assert_eq!(scope.listener_count(), 0);

    scope.dispatch(&move_event());
    assert_eq!(hits.get(), 1);
}

#[test]
fn listener_detached_mid_dispatch_is_skipped() {
    let scope = PointerScope::new();
    let second_hits = Rc::new(Cell::new(0));
    let second: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let _first = scope.subscribe({
        let second = Rc::clone(&second);
        move |_| {
            second.borrow_mut().take();
        }
    });
    let subscription = scope.subscribe({
        let hits = Rc::clone(&second_hits);
        move |_| hits.set(hits.get() + 1)
    });
    second.borrow_mut().replace(subscription);

    scope.dispatch(&move_event());
    assert_eq!(second_hits.get(), 0);
    assert_eq!(scope.listener_count(), 1);
}

#[test]
fn subscription_outliving_scope_is_inert() {
    let scope = PointerScope::new();
    let subscription = scope.subscribe(|_| {});
    drop(scope);
    assert!(!subscription.is_active());
    drop(subscription);
}
