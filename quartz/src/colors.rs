use palette::LinSrgba;

use crate::ControlState;

/// One color per control state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateColors {
    pub normal: LinSrgba,
    pub highlighted: LinSrgba,
    pub selected: LinSrgba,
    pub disabled: LinSrgba,
}

impl StateColors {
    pub const NORMAL: LinSrgba = LinSrgba::new(0.216, 0.216, 0.216, 1.0);
    pub const HIGHLIGHTED: LinSrgba = LinSrgba::new(0.341, 0.341, 0.341, 1.0);
    pub const SELECTED: LinSrgba = LinSrgba::new(0.278, 0.278, 0.278, 1.0);
    pub const DISABLED: LinSrgba = LinSrgba::new(0.216, 0.216, 0.216, 0.5);

    /// Disabled wins over highlighted, which wins over selected.
    pub fn color(&self, state: ControlState) -> LinSrgba {
        if !state.is_enabled() {
            self.disabled
        } else if state.is_highlighted() {
            self.highlighted
        } else if state.is_selected() {
            self.selected
        } else {
            self.normal
        }
    }
}

impl Default for StateColors {
    fn default() -> Self {
        Self {
            normal: Self::NORMAL,
            highlighted: Self::HIGHLIGHTED,
            selected: Self::SELECTED,
            disabled: Self::DISABLED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        let colors = StateColors::default();
        let mut state = ControlState::default();
        assert_eq!(colors.color(state), StateColors::NORMAL);
        state.set_selected(true);
        assert_eq!(colors.color(state), StateColors::SELECTED);
        state.set_highlighted(true);
        assert_eq!(colors.color(state), StateColors::HIGHLIGHTED);
        state.set_enabled(false);
        assert_eq!(colors.color(state), StateColors::DISABLED);
    }
}
