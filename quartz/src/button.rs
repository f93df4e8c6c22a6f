use glam::Vec2;
use palette::LinSrgba;

use crate::{Control, HitTest, Interaction, StateColors, Widget};

/// The smallest concrete control: a labelled push button that can
/// optionally act as a toggle.
pub struct Button {
    control: Control,
    label: String,
    toggles_selected: bool,
    background: StateColors,
}

impl Button {
    pub fn new(label: &str) -> Self {
        Button {
            control: Control::new(),
            label: label.to_owned(),
            toggles_selected: false,
            background: StateColors::default(),
        }
    }
    pub fn new_toggle(label: &str, selected: bool) -> Self {
        let mut button = Self::new(label);
        button.toggles_selected = true;
        button.control.set_selected(selected);
        button
    }
    pub fn on_action<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut Control) + 'static,
    {
        self.control.set_action_handler(handler);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
    pub fn set_label(&mut self, label: String) {
        if label != self.label {
            self.label = label;
            self.control.set_needs_layout();
        }
    }

    pub fn toggles_selected(&self) -> bool {
        self.toggles_selected
    }
    pub fn set_toggles_selected(&mut self, toggles_selected: bool) {
        self.toggles_selected = toggles_selected;
    }

    pub fn set_background(&mut self, background: StateColors) {
        self.background = background;
        self.control.set_needs_layout();
    }
    pub fn background_color(&self) -> LinSrgba {
        self.background.color(self.control.state())
    }
}

impl Widget for Button {
    fn control(&self) -> &Control {
        &self.control
    }
    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn press_end(&mut self, position: Vec2, hit: &dyn HitTest) -> Interaction {
        if !self.control.is_enabled() || !self.control.is_tracking() {
            return Interaction::Ignored;
        }
        if !self.control.end_tracking(position, hit) {
            return Interaction::Released;
        }
        if self.toggles_selected {
            let selected = self.control.is_selected();
            self.control.set_selected(!selected);
        }
        self.control.trigger_action();
        Interaction::Activated
    }
}
