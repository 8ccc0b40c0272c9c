/// A primitive geometric event emitted by the vector-file importer.
///
/// Mirrors the entity callbacks of a DXF creation adapter: entities arrive
/// in file order, carrying raw (unscaled) coordinates, grouped into panels
/// by the drawing layer announced via [`ImportEvent::Layer`].
#[derive(Debug, Clone, PartialEq)]
pub enum ImportEvent {
    /// The importer switched to a new drawing layer.
    Layer { name: String },
    /// A free-standing point entity. Carries no topology; logged only.
    Point { x: f64, y: f64 },
    /// A straight line segment.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// A circular arc. Not representable topologically; logged only.
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// A full circle. Not representable topologically; logged only.
    Circle { cx: f64, cy: f64, radius: f64 },
    /// Start of a polyline entity; closes the contour under construction.
    Polyline { closed: bool },
    /// One vertex of the current polyline.
    PolylineVertex { x: f64, y: f64, bulge: f64 },
}
