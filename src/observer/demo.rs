use std::rc::Rc;

use tracing::info;

use super::{Cart, CartObserver, Label, NotificationSink, Observer, Subject};

/// Entry point for the cart example.
///
/// Both observers watch the first two changes, the primary one is detached
/// before the third and the secondary one before the fourth, so later steps
/// print nothing.
pub fn run(steps: &[i64], sink: Rc<dyn NotificationSink>) -> Rc<Cart> {
    let cart = Cart::new();
    info!(steps = steps.len(), "running cart observer scenario");

    let primary: Rc<dyn Observer> =
        CartObserver::attach_to(&cart, Label::Primary, sink.clone());
    let secondary: Rc<dyn Observer> =
        CartObserver::attach_to(&cart, Label::Secondary, sink);

    for (i, &items) in steps.iter().enumerate() {
        match i {
            2 => {
                cart.detach(&primary);
            }
            3 => {
                cart.detach(&secondary);
            }
            _ => {}
        }
        cart.set_item_count(items);
    }
    cart
}
