use glam::Vec2;
use taffy::{prelude::*, Style};

/// How a single size component is interpreted by the layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SizeUnit {
    /// Absolute scene points.
    #[default]
    Points,
    /// Points multiplied by the scene's UI scale.
    UiPoints,
    /// Fraction of the parent's size, 1.0 being the full parent.
    Normalized,
}

impl SizeUnit {
    pub fn resolve(self, value: f32, parent: f32, ui_scale: f32) -> f32 {
        match self {
            SizeUnit::Points => value,
            SizeUnit::UiPoints => value * ui_scale,
            SizeUnit::Normalized => value * parent,
        }
    }

    fn to_dimension(self, value: f32, ui_scale: f32) -> Dimension {
        match self {
            SizeUnit::Points => Dimension::Length(value),
            SizeUnit::UiPoints => Dimension::Length(value * ui_scale),
            SizeUnit::Normalized => Dimension::Percent(value),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeType {
    pub width: SizeUnit,
    pub height: SizeUnit,
}

impl SizeType {
    pub const POINTS: SizeType = SizeType {
        width: SizeUnit::Points,
        height: SizeUnit::Points,
    };
    pub const UI_POINTS: SizeType = SizeType {
        width: SizeUnit::UiPoints,
        height: SizeUnit::UiPoints,
    };
    pub const NORMALIZED: SizeType = SizeType {
        width: SizeUnit::Normalized,
        height: SizeUnit::Normalized,
    };

    pub fn new(width: SizeUnit, height: SizeUnit) -> Self {
        SizeType { width, height }
    }

    pub fn resolve(&self, size: Vec2, parent: Vec2, ui_scale: f32) -> Vec2 {
        Vec2::new(
            self.width.resolve(size.x, parent.x, ui_scale),
            self.height.resolve(size.y, parent.y, ui_scale),
        )
    }

    fn to_size(self, size: Vec2, ui_scale: f32) -> Size<Dimension> {
        Size {
            width: self.width.to_dimension(size.x, ui_scale),
            height: self.height.to_dimension(size.y, ui_scale),
        }
    }
}

/// Sizing hints a control hands to the layout pass.
///
/// A zero component means "no preference" for the preferred size and
/// "unbounded" for the max size. Values are stored as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutHints {
    pub preferred_size: Vec2,
    pub preferred_size_type: SizeType,
    pub max_size: Vec2,
    pub max_size_type: SizeType,
}

impl LayoutHints {
    /// Concrete `(preferred, max)` sizes in points for the given parent size.
    /// An unbounded max axis resolves to infinity.
    pub fn resolve(&self, parent: Vec2, ui_scale: f32) -> (Vec2, Vec2) {
        let preferred = self
            .preferred_size_type
            .resolve(self.preferred_size, parent, ui_scale);
        let mut max = self.max_size_type.resolve(self.max_size, parent, ui_scale);
        if self.max_size.x == 0. {
            max.x = f32::INFINITY;
        }
        if self.max_size.y == 0. {
            max.y = f32::INFINITY;
        }
        (preferred, max)
    }

    /// Writes the hints into a layout style as min and max size. A zero
    /// axis leaves the style's own value in place.
    pub fn apply_to_style(&self, style: &mut Style, ui_scale: f32) {
        let min_size = self
            .preferred_size_type
            .to_size(self.preferred_size, ui_scale);
        if self.preferred_size.x != 0. {
            style.min_size.width = min_size.width;
        }
        if self.preferred_size.y != 0. {
            style.min_size.height = min_size.height;
        }
        let max_size = self.max_size_type.to_size(self.max_size, ui_scale);
        if self.max_size.x != 0. {
            style.max_size.width = max_size.width;
        }
        if self.max_size.y != 0. {
            style.max_size.height = max_size.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_resolve_against_parent_and_scale() {
        assert_eq!(SizeUnit::Points.resolve(40., 300., 2.), 40.);
        assert_eq!(SizeUnit::UiPoints.resolve(40., 300., 2.), 80.);
        assert_eq!(SizeUnit::Normalized.resolve(0.5, 300., 2.), 150.);
    }

    #[test]
    fn zero_max_is_unbounded() {
        let hints = LayoutHints {
            preferred_size: Vec2::new(0.25, 32.),
            preferred_size_type: SizeType::new(SizeUnit::Normalized, SizeUnit::Points),
            max_size: Vec2::new(200., 0.),
            ..Default::default()
        };
        let (preferred, max) = hints.resolve(Vec2::new(800., 600.), 1.);
        assert_eq!(preferred, Vec2::new(200., 32.));
        assert_eq!(max.x, 200.);
        assert!(max.y.is_infinite());
    }

    #[test]
    fn style_gets_min_and_max() {
        let hints = LayoutHints {
            preferred_size: Vec2::new(64., 0.),
            preferred_size_type: SizeType::UI_POINTS,
            max_size: Vec2::new(1., 0.),
            max_size_type: SizeType::NORMALIZED,
        };
        let mut style = Style::default();
        hints.apply_to_style(&mut style, 2.);
        assert_eq!(style.min_size.width, Dimension::Length(128.));
        assert_eq!(style.min_size.height, Dimension::Auto);
        assert_eq!(style.max_size.width, Dimension::Percent(1.));
        assert_eq!(style.max_size.height, Dimension::Auto);
    }

    #[test]
    fn zero_axes_keep_style_values() {
        let hints = LayoutHints {
            preferred_size: Vec2::new(0., 24.),
            ..Default::default()
        };
        let mut style = Style {
            min_size: Size::from_lengths(50., 50.),
            max_size: Size::from_lengths(300., 100.),
            ..Default::default()
        };
        hints.apply_to_style(&mut style, 1.);
        assert_eq!(style.min_size, Size::from_lengths(50., 24.));
        assert_eq!(style.max_size, Size::from_lengths(300., 100.));
    }
}
