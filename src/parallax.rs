use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Translation for an element that moves `1 / factor` as fast as the pointer,
/// measured from the viewport center. Larger factors move less.
pub fn parallax_offset(pointer: Point, viewport: Viewport, factor: f64) -> Point {
    if !factor.is_finite() || factor == 0.0 {
        return Point::ORIGIN;
    }

    let center = viewport.center();
    let offset = Point::new(
        (pointer.x - center.x) / factor,
        (pointer.y - center.y) / factor,
    );

    if offset.x.is_finite() && offset.y.is_finite() {
        offset
    } else {
        Point::ORIGIN
    }
}

/// Decorative background shape.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Blob {
    pub class: String,
    pub factor: f64,
}

/// Remembers the last pointer position and derives every blob's offset from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallaxLayer {
    pointer: Option<Point>,
}

impl ParallaxLayer {
    pub fn track(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
    }

    /// Offset for one blob; at rest until the pointer has moved at least once.
    pub fn offset(&self, viewport: Viewport, factor: f64) -> Point {
        self.pointer
            .map_or(Point::ORIGIN, |pointer| parallax_offset(pointer, viewport, factor))
    }

    pub fn transform(&self, viewport: Viewport, factor: f64) -> String {
        let offset = self.offset(viewport, factor);
        format!("transform: translate({:.2}px, {:.2}px);", offset.x, offset.y)
    }
}
