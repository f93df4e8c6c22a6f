use tactile::{Obj, WeakObj};

use crate::Control;

/// Closure-style action callback. It receives the control that fired.
pub type ActionHandler = Box<dyn FnMut(&mut Control)>;

/// A receiver paired with the message it accepts.
pub(crate) trait ActionTarget {
    fn send(&self, sender: &mut Control);
    fn receiver_name(&self) -> &'static str;
}

struct Selector<T: ?Sized> {
    target: WeakObj<T>,
    selector: fn(&mut T, &mut Control),
}

impl<T: ?Sized + 'static> ActionTarget for Selector<T> {
    fn send(&self, sender: &mut Control) {
        let Some(target) = self.target.try_upgrade() else {
            log::error!("Action target {} no longer exists", self.receiver_name());
            panic!(
                "Action target {} no longer exists; clear it before dropping the receiver",
                self.receiver_name()
            );
        };
        let mut receiver = target.get_mut();
        (self.selector)(&mut *receiver, sender);
    }
    fn receiver_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

pub(crate) fn selector<T: ?Sized + 'static>(
    target: &Obj<T>,
    selector: fn(&mut T, &mut Control),
) -> Box<dyn ActionTarget> {
    Box::new(Selector {
        target: target.downgrade(),
        selector,
    })
}

/// Storage for both action slots. Each slot carries a generation so a
/// dispatch can tell whether the slot was replaced while it was running.
#[derive(Default)]
pub(crate) struct ActionSlots {
    pub handler: Option<ActionHandler>,
    pub handler_generation: u32,
    pub target: Option<Box<dyn ActionTarget>>,
    pub target_generation: u32,
}

impl ActionSlots {
    pub fn replace_handler(&mut self, handler: Option<ActionHandler>) {
        self.handler = handler;
        self.handler_generation = self.handler_generation.wrapping_add(1);
    }
    pub fn replace_target(&mut self, target: Option<Box<dyn ActionTarget>>) {
        self.target = target;
        self.target_generation = self.target_generation.wrapping_add(1);
    }
    pub fn is_empty(&self) -> bool {
        self.handler.is_none() && self.target.is_none()
    }
}
