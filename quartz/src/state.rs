use bitflags::bitflags;

bitflags! {
    /// Visual and logical state bits of a control.
    ///
    /// The bits are independent: a control can be disabled and selected at
    /// the same time. `NORMAL` is set on a fresh state and is never recomputed
    /// from the other bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlState: u8 {
        const NORMAL = 1 << 0;
        /// Set while a press that began inside the control stays inside.
        const HIGHLIGHTED = 1 << 1;
        const DISABLED = 1 << 2;
        /// Persistent on/off state, e.g. the "on" state of a toggle button.
        const SELECTED = 1 << 3;
    }
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState::NORMAL
    }
}

impl ControlState {
    pub fn is_enabled(&self) -> bool {
        !self.contains(ControlState::DISABLED)
    }
    pub fn set_enabled(&mut self, enabled: bool) {
        self.set(ControlState::DISABLED, !enabled);
    }

    pub fn is_highlighted(&self) -> bool {
        self.contains(ControlState::HIGHLIGHTED)
    }
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.set(ControlState::HIGHLIGHTED, highlighted);
    }

    pub fn is_selected(&self) -> bool {
        self.contains(ControlState::SELECTED)
    }
    pub fn set_selected(&mut self, selected: bool) {
        self.set(ControlState::SELECTED, selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Setter = fn(&mut ControlState, bool);
    type Getter = fn(&ControlState) -> bool;

    #[test]
    fn fresh_state_is_normal_and_enabled() {
        let state = ControlState::default();
        assert_eq!(state, ControlState::NORMAL);
        assert!(state.is_enabled());
        assert!(!state.is_highlighted());
        assert!(!state.is_selected());
    }

    #[test]
    fn setting_one_flag_leaves_the_others() {
        let accessors: [(Setter, Getter); 3] = [
            (ControlState::set_enabled, ControlState::is_enabled),
            (ControlState::set_highlighted, ControlState::is_highlighted),
            (ControlState::set_selected, ControlState::is_selected),
        ];
        for start in 0..16u8 {
            for (index, (set, get)) in accessors.iter().enumerate() {
                for value in [false, true] {
                    let mut state = ControlState::from_bits_truncate(start);
                    let before: Vec<bool> = accessors.iter().map(|(_, g)| g(&state)).collect();
                    let normal = state.contains(ControlState::NORMAL);
                    set(&mut state, value);
                    assert_eq!(get(&state), value);
                    assert_eq!(state.contains(ControlState::NORMAL), normal);
                    for (other, (_, other_get)) in accessors.iter().enumerate() {
                        if other != index {
                            assert_eq!(other_get(&state), before[other]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn disabled_and_selected_combine() {
        let mut state = ControlState::default();
        state.set_enabled(false);
        state.set_selected(true);
        assert!(state.contains(ControlState::DISABLED | ControlState::SELECTED));
        assert_eq!(state.bits(), 0b1101);
    }
}
