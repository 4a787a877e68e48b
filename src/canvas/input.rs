use crate::foundation::core::Point;

/// Where the surface is displayed, in client (viewport) coordinates.
///
/// The displayed size may differ from the backing resolution; the scale between them is
/// derived on every event, never cached.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    /// A viewport that shows the surface 1:1 at the origin.
    pub fn identity(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Maps a client position into surface pixels. `None` for a collapsed viewport.
    pub fn to_surface(&self, client: Point, surface_w: u32, surface_h: u32) -> Option<Point> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return None;
        }
        let scale_x = f64::from(surface_w) / self.width;
        let scale_y = f64::from(surface_h) / self.height;
        Some(Point::new(
            (client.x - self.left) * scale_x,
            (client.y - self.top) * scale_y,
        ))
    }
}

/// Active contact points carried by a pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum Contacts {
    Mouse(Point),
    /// All touches currently on the surface.
    Touch(Vec<Point>),
}

impl Contacts {
    /// The single drawing contact; multi-touch and empty touch lists yield `None`.
    pub fn single(&self) -> Option<Point> {
        match self {
            Self::Mouse(p) => Some(*p),
            Self::Touch(points) if points.len() == 1 => Some(points[0]),
            Self::Touch(_) => None,
        }
    }
}

/// Raw pointer input as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Down(Contacts),
    Move(Contacts),
    Up,
    /// Pointer left the element.
    Leave,
    /// Touch cancelled by the platform.
    Cancel,
}

/// Notifications produced by stroke operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawEvent {
    Started,
    /// One segment was appended to the active stroke.
    Drawing,
    Ended,
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/input.rs"]
mod tests;
