use glam::Vec2;
use tactile::Obj;

use crate::{
    action::{self, ActionSlots},
    ControlState, HitTest, LayoutHints, SizeType,
};

/// What a pointer phase did to a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// The event did not apply (disabled, not tracking, or began outside).
    Ignored,
    Began,
    Moved,
    /// A continuous control fired its action during a move.
    Changed,
    /// The press ended inside and the action fired.
    Activated,
    /// The press ended outside. No action.
    Released,
    Cancelled,
}

/// Interaction state shared by every control.
///
/// A control follows one press at a time. The owning scene feeds it
/// `press_begin`, `press_move`, `press_end` and `press_cancel` along with a
/// bounds query, and the control updates its flags and fires its action.
///
/// Actions fire synchronously, after all bookkeeping for the event is done,
/// so a handler may freely change the control (disable it, replace its own
/// handler) from inside the call. When both a handler and a target are set,
/// both fire: the handler first, then the target.
pub struct Control {
    state: ControlState,
    layout: LayoutHints,
    needs_layout: bool,
    tracking: bool,
    touch_inside: bool,
    continuous: bool,
    drag_threshold: f32,
    last_position: Vec2,
    action: ActionSlots,
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("state", &self.state)
            .field("layout", &self.layout)
            .field("needs_layout", &self.needs_layout)
            .field("tracking", &self.tracking)
            .field("touch_inside", &self.touch_inside)
            .field("continuous", &self.continuous)
            .field("has_handler", &self.action.handler.is_some())
            .field("has_target", &self.action.target.is_some())
            .finish()
    }
}

impl Control {
    pub fn new() -> Self {
        Control {
            state: ControlState::default(),
            layout: LayoutHints::default(),
            needs_layout: true,
            tracking: false,
            touch_inside: false,
            continuous: false,
            drag_threshold: 0.,
            last_position: Vec2::ZERO,
            action: ActionSlots::default(),
        }
    }

    pub fn on_action<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut Control) + 'static,
    {
        self.set_action_handler(handler);
        self
    }

    // State flags

    pub fn state(&self) -> ControlState {
        self.state
    }
    pub fn set_state(&mut self, mut state: ControlState) {
        if !state.is_enabled() && self.stop_tracking() {
            log::debug!("Control disabled while tracking, press abandoned");
            state.set_highlighted(false);
        }
        self.update_state(state);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }
    pub fn set_enabled(&mut self, enabled: bool) {
        let mut state = self.state;
        if !enabled && self.stop_tracking() {
            log::debug!("Control disabled while tracking, press abandoned");
            state.set_highlighted(false);
        }
        state.set_enabled(enabled);
        self.update_state(state);
    }

    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }
    pub fn set_selected(&mut self, selected: bool) {
        let mut state = self.state;
        state.set_selected(selected);
        self.update_state(state);
    }

    pub fn is_highlighted(&self) -> bool {
        self.state.is_highlighted()
    }
    pub fn set_highlighted(&mut self, highlighted: bool) {
        let mut state = self.state;
        state.set_highlighted(highlighted);
        self.update_state(state);
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }
    pub fn is_touch_inside(&self) -> bool {
        self.touch_inside
    }

    pub fn continuous(&self) -> bool {
        self.continuous
    }
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
    }
    /// Distance a tracked press must move before a continuous control fires
    /// again. Zero fires on any change of position.
    pub fn set_drag_threshold(&mut self, drag_threshold: f32) {
        self.drag_threshold = drag_threshold.max(0.);
    }

    fn update_state(&mut self, state: ControlState) {
        if state != self.state {
            log::trace!("Control state {:?} -> {:?}", self.state, state);
            self.state = state;
            self.needs_layout = true;
        }
    }

    // Layout hints

    pub fn layout_hints(&self) -> &LayoutHints {
        &self.layout
    }
    pub fn preferred_size(&self) -> Vec2 {
        self.layout.preferred_size
    }
    pub fn set_preferred_size(&mut self, size: Vec2) {
        self.layout.preferred_size = size;
        self.needs_layout = true;
    }
    pub fn preferred_size_type(&self) -> SizeType {
        self.layout.preferred_size_type
    }
    pub fn set_preferred_size_type(&mut self, size_type: SizeType) {
        self.layout.preferred_size_type = size_type;
        self.needs_layout = true;
    }
    pub fn max_size(&self) -> Vec2 {
        self.layout.max_size
    }
    pub fn set_max_size(&mut self, size: Vec2) {
        self.layout.max_size = size;
        self.needs_layout = true;
    }
    pub fn max_size_type(&self) -> SizeType {
        self.layout.max_size_type
    }
    pub fn set_max_size_type(&mut self, size_type: SizeType) {
        self.layout.max_size_type = size_type;
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }
    /// Marks the control dirty. Widgets call this when anything that affects
    /// their appearance changes.
    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }
    /// Called by the layout pass once the control has been laid out.
    pub fn layout_finished(&mut self) {
        self.needs_layout = false;
    }

    // Action slots

    pub fn set_action_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Control) + 'static,
    {
        self.action.replace_handler(Some(Box::new(handler)));
    }
    pub fn clear_action_handler(&mut self) {
        self.action.replace_handler(None);
    }

    /// Sends `selector` to `target` whenever the action fires. The target is
    /// held weakly; firing after it has been dropped panics.
    pub fn set_action_target<T: ?Sized + 'static>(
        &mut self,
        target: &Obj<T>,
        selector: fn(&mut T, &mut Control),
    ) {
        self.action
            .replace_target(Some(action::selector(target, selector)));
    }
    pub fn clear_action_target(&mut self) {
        self.action.replace_target(None);
    }

    pub fn has_action(&self) -> bool {
        !self.action.is_empty()
    }

    /// Fires the action: handler first, then target. Does nothing while
    /// disabled.
    pub fn trigger_action(&mut self) {
        if !self.is_enabled() {
            return;
        }

        let generation = self.action.handler_generation;
        if let Some(mut handler) = self.action.handler.take() {
            handler(self);
            if self.action.handler_generation == generation {
                self.action.handler = Some(handler);
            }
        }

        let generation = self.action.target_generation;
        if let Some(target) = self.action.target.take() {
            log::trace!("Sending action to {}", target.receiver_name());
            target.send(self);
            if self.action.target_generation == generation {
                self.action.target = Some(target);
            }
        }
    }

    // Pointer phases

    pub fn press_begin(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        if !self.is_enabled() {
            log::trace!("Press ignored by disabled control");
            return Interaction::Ignored;
        }
        if self.tracking {
            log::warn!("Press began while already tracking, cancelling previous press");
            self.press_cancel();
        }
        if !hit.contains_point(position) {
            return Interaction::Ignored;
        }
        self.tracking = true;
        self.touch_inside = true;
        self.last_position = position;
        self.set_highlighted(true);
        Interaction::Began
    }

    pub fn press_move(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        if !self.is_enabled() || !self.tracking {
            return Interaction::Ignored;
        }
        self.touch_inside = hit.contains_point(position);
        self.set_highlighted(self.touch_inside);

        if self.continuous && position.distance(self.last_position) > self.drag_threshold {
            self.last_position = position;
            self.trigger_action();
            Interaction::Changed
        } else {
            Interaction::Moved
        }
    }

    /// Ends tracking and reports whether the release activates the control.
    /// Widgets that need to act between release and dispatch call this and
    /// then `trigger_action` themselves.
    pub fn end_tracking(&mut self, position: Vec2, hit: &dyn HitTest) -> bool {
        if !self.is_enabled() || !self.tracking {
            return false;
        }
        let inside = hit.contains_point(position);
        self.stop_tracking();
        self.set_highlighted(false);
        inside
    }

    pub fn press_end(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        if !self.is_enabled() || !self.tracking {
            return Interaction::Ignored;
        }
        if self.end_tracking(position, hit) {
            self.trigger_action();
            Interaction::Activated
        } else {
            Interaction::Released
        }
    }

    pub fn press_cancel(&mut self) -> Interaction {
        if !self.is_enabled() || !self.tracking {
            return Interaction::Ignored;
        }
        self.stop_tracking();
        self.set_highlighted(false);
        Interaction::Cancelled
    }

    /// Clears the tracking flags, returning whether a press was in progress.
    fn stop_tracking(&mut self) -> bool {
        let was_tracking = self.tracking;
        self.tracking = false;
        self.touch_inside = false;
        was_tracking
    }
}
