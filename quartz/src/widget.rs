use glam::Vec2;

use crate::{Control, HitTest, Interaction};

/// A scene object built on a `Control`.
///
/// The pointer phases default to the control's own state machine. Override
/// them to act between the state change and the action, the way `Button`
/// flips its selection before firing.
pub trait Widget: 'static {
    fn control(&self) -> &Control;
    fn control_mut(&mut self) -> &mut Control;

    fn press_begin(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        self.control_mut().press_begin(position, hit)
    }
    fn press_move(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        self.control_mut().press_move(position, hit)
    }
    fn press_end(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        self.control_mut().press_end(position, hit)
    }
    fn press_cancel(&mut self) -> Interaction {
        self.control_mut().press_cancel()
    }
}

impl Widget for Control {
    fn control(&self) -> &Control {
        self
    }
    fn control_mut(&mut self) -> &mut Control {
        self
    }
}
