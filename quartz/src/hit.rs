use glam::Vec2;

/// Bounds query supplied by whatever owns a control's placement.
pub trait HitTest {
    fn contains_point(&self, position: Vec2) -> bool;
}

impl<F> HitTest for F
where
    F: Fn(Vec2) -> bool,
{
    fn contains_point(&self, position: Vec2) -> bool {
        self(position)
    }
}

/// Axis-aligned rectangle in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Bounds {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }
    pub fn translate(self, offset: Vec2) -> Self {
        Bounds {
            origin: self.origin + offset,
            ..self
        }
    }
}

impl HitTest for Bounds {
    fn contains_point(&self, position: Vec2) -> bool {
        let max = self.max();
        position.x >= self.origin.x
            && position.y >= self.origin.y
            && position.x < max.x
            && position.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let bounds = Bounds::new(10., 20., 100., 50.);
        assert!(bounds.contains_point(Vec2::new(10., 20.)));
        assert!(bounds.contains_point(Vec2::new(109.9, 69.9)));
        assert!(!bounds.contains_point(Vec2::new(110., 40.)));
        assert!(!bounds.contains_point(Vec2::new(50., 70.)));
        assert!(!bounds.contains_point(Vec2::new(9.9, 40.)));
    }

    #[test]
    fn closures_hit_test() {
        let left_half = |p: Vec2| p.x < 0.5;
        assert!(left_half.contains_point(Vec2::new(0.2, 9.)));
        assert!(!left_half.contains_point(Vec2::new(0.7, 9.)));
    }
}
