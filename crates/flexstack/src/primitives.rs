use glam::Vec2;

/// Largest representable extent, used as the default maximum size of an item.
pub const UNBOUNDED: Vec2 = Vec2::splat(f32::MAX);

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// The zero rectangle. Returned by lookups that find nothing.
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rect from its min corner and a size.
    ///
    /// The size is not clamped, so a negative extent yields `max < min`.
    ///
    /// ```
    /// # use flexstack::Rect;
    /// # use glam::Vec2;
    /// let rect = Rect::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
    /// assert_eq!(rect.max, Vec2::new(40.0, 60.0));
    /// assert_eq!(rect.width(), 30.0);
    /// ```
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// A rect is empty when it encloses no area, including inverted rects.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }
}

impl From<[f32; 4]> for Rect {
    /// `[min_x, min_y, max_x, max_y]`
    fn from(arr: [f32; 4]) -> Self {
        Self {
            min: Vec2::new(arr[0], arr[1]),
            max: Vec2::new(arr[2], arr[3]),
        }
    }
}
