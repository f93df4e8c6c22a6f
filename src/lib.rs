//! Shared handles and listener lists used across the control workspace.
//!
//! `Obj` is the owning handle a scene keeps for each widget, `WeakObj` is what
//! an action target holds so a control never keeps its receiver alive.

mod event;
mod obj;

pub use event::Event;
pub use obj::{Obj, WeakObj};

/// Converts an `Obj<W>` into an `Obj` of a trait object `W` implements,
/// sharing the same storage.
#[macro_export]
macro_rules! obj_upcast {
    ($obj:expr) => {
        $crate::Obj::from_shared($obj.shared() as _)
    };
}

#[macro_export]
macro_rules! impl_add_event_listener {
    ($type:ty, $member:ident, $param:ty, $fn_name:ident) => {
        impl $type {
            pub fn $fn_name<F>(&mut self, f: F)
            where
                F: FnMut(&$param) + 'static,
            {
                self.$member.add_listener(f);
            }
        }
    };
}
