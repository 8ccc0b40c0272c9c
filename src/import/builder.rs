use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::Result;
use crate::math::polygon_2d::{point_in_polygon, signed_area};
use crate::math::{Point2, TOLERANCE};
use crate::operations::euler::{
    KillFaceMakeRingHole, MakeEdgeFace, MakeEdgeVertex, MakeVertexFaceSolid,
};
use crate::topology::{FaceId, SolidId, TopologyStore};

use super::event::ImportEvent;

/// A panel materialized from imported contours.
#[derive(Debug, Clone)]
pub struct ImportedPanel {
    /// The solid holding the panel's topology.
    pub solid: SolidId,
    /// The face bounding the panel region (holes are its inner rings).
    pub face: FaceId,
    /// The drawing layer the panel came from.
    pub layer: String,
}

#[derive(Debug)]
struct Contour {
    layer: String,
    points: Vec<Point2>,
}

/// Accumulates importer events into per-layer contours, then materializes
/// each contour through the Euler operators.
///
/// A contour is closed by a layer change, by the start of a polyline
/// entity, or by [`PanelBuilder::finish`]. Within one layer, the contour
/// enclosing the largest area becomes the panel boundary and every contour
/// geometrically inside it is folded in as a hole; contours outside it
/// become panels of their own.
pub struct PanelBuilder {
    scale: f64,
    layer: String,
    contour: Vec<Point2>,
    contours: Vec<Contour>,
}

impl Default for PanelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelBuilder {
    /// Creates a builder with unit scale, positioned on the default layer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            layer: "0".into(),
            contour: Vec::new(),
            contours: Vec::new(),
        }
    }

    /// Sets the factor applied to all incoming coordinates.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Consumes one importer event.
    pub fn feed(&mut self, event: ImportEvent) {
        match event {
            ImportEvent::Layer { name } => {
                if name != self.layer {
                    self.flush_contour();
                    self.layer = name;
                }
            }
            ImportEvent::Line { x1, y1, x2, y2 } => {
                // Segments are assumed chained; only the first one
                // contributes its start point.
                if self.contour.is_empty() {
                    self.push_point(x1, y1);
                }
                self.push_point(x2, y2);
            }
            ImportEvent::Polyline { closed } => {
                debug!(closed, "polyline begins a new contour");
                self.flush_contour();
            }
            ImportEvent::PolylineVertex { x, y, bulge } => {
                if bulge.abs() > TOLERANCE {
                    debug!(bulge, "bulged segment flattened to a straight edge");
                }
                self.push_point(x, y);
            }
            ImportEvent::Point { x, y } => {
                debug!(x, y, "point entity carries no topology; skipped");
            }
            ImportEvent::Arc { radius, .. } => {
                warn!(radius, "arc entities are not supported; skipped");
            }
            ImportEvent::Circle { radius, .. } => {
                warn!(radius, "circle entities are not supported; skipped");
            }
        }
    }

    /// Closes the last contour and builds all accumulated panels into the
    /// topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if an Euler operator fails while materializing a
    /// contour.
    pub fn finish(mut self, store: &mut TopologyStore) -> Result<Vec<ImportedPanel>> {
        self.flush_contour();
        let contours = std::mem::take(&mut self.contours);

        // group contours by layer, preserving first-seen layer order
        let mut groups: Vec<(String, Vec<Contour>)> = Vec::new();
        for contour in contours {
            match groups.iter_mut().find(|(layer, _)| *layer == contour.layer) {
                Some((_, list)) => list.push(contour),
                None => groups.push((contour.layer.clone(), vec![contour])),
            }
        }

        let mut panels = Vec::new();
        for (layer, mut group) in groups {
            for contour in &mut group {
                if signed_area(&contour.points) < 0.0 {
                    contour.points.reverse();
                }
            }
            // largest enclosed area first: the candidate panel boundary
            group.sort_by(|a, b| {
                signed_area(&b.points)
                    .partial_cmp(&signed_area(&a.points))
                    .unwrap_or(Ordering::Equal)
            });

            let mut group = group.into_iter();
            let Some(outer) = group.next() else { continue };
            let (outer_solid, outer_face) = build_contour(store, &outer.points)?;
            panels.push(ImportedPanel {
                solid: outer_solid,
                face: outer_face,
                layer: layer.clone(),
            });

            for contour in group {
                let (solid, face) = build_contour(store, &contour.points)?;
                if point_in_polygon(contour.points[0], &outer.points) {
                    KillFaceMakeRingHole::new(face, outer_face).execute(store)?;
                    debug!(layer = %layer, "interior contour folded in as a hole");
                } else {
                    panels.push(ImportedPanel {
                        solid,
                        face,
                        layer: layer.clone(),
                    });
                }
            }
        }
        Ok(panels)
    }

    fn push_point(&mut self, x: f64, y: f64) {
        self.contour
            .push(Point2::new(x * self.scale, y * self.scale));
    }

    fn flush_contour(&mut self) {
        if self.contour.is_empty() {
            return;
        }
        let mut points = std::mem::take(&mut self.contour);
        points.dedup_by(|a, b| (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE);
        if points.len() > 1 {
            let first = points[0];
            let last = points[points.len() - 1];
            if (first.x - last.x).abs() < TOLERANCE && (first.y - last.y).abs() < TOLERANCE {
                points.pop();
            }
        }
        if points.len() < 3 {
            warn!(layer = %self.layer, count = points.len(), "skipping degenerate contour");
            return;
        }
        self.contours.push(Contour {
            layer: self.layer.clone(),
            points,
        });
    }
}

/// Materializes one closed contour: seed at the first point, grow the open
/// chain with edge-vertex calls, close it with the chord back to the seed.
/// Returns the solid and the face bounding the input-oriented region.
fn build_contour(store: &mut TopologyStore, points: &[Point2]) -> Result<(SolidId, FaceId)> {
    let seed = MakeVertexFaceSolid::new(points[0]).execute(store);
    let mut tip = seed.vertex;
    for &point in &points[1..] {
        let he = MakeEdgeVertex::new(point, tip, seed.ring).execute(store)?;
        tip = store.half_edge(he)?.dest;
    }
    let face = MakeEdgeFace::new(seed.ring, seed.vertex, tip).execute(store)?;
    Ok((seed.solid, face))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::IsValid;
    use approx::assert_relative_eq;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> ImportEvent {
        ImportEvent::Line { x1, y1, x2, y2 }
    }

    fn vertex(x: f64, y: f64) -> ImportEvent {
        ImportEvent::PolylineVertex { x, y, bulge: 0.0 }
    }

    fn feed_all(builder: &mut PanelBuilder, events: Vec<ImportEvent>) {
        for event in events {
            builder.feed(event);
        }
    }

    fn square_lines(x: f64, y: f64, size: f64) -> Vec<ImportEvent> {
        vec![
            line(x, y, x + size, y),
            line(x + size, y, x + size, y + size),
            line(x + size, y + size, x, y + size),
            line(x, y + size, x, y),
        ]
    }

    #[test]
    fn line_chain_becomes_one_panel() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        feed_all(&mut builder, square_lines(0.0, 0.0, 2.0));
        let panels = builder.finish(&mut store).unwrap();

        assert_eq!(panels.len(), 1);
        let face = store.face(panels[0].face).unwrap();
        let boundary = store.ring_vertices(face.outer_ring).unwrap();
        assert_eq!(boundary.len(), 4);
        assert!(face.inner_rings.is_empty());
        assert!(IsValid::new(panels[0].solid).execute(&store));
    }

    #[test]
    fn interior_contour_becomes_a_hole() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("planis=debug")
            .with_test_writer()
            .try_init();

        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        builder.feed(ImportEvent::Polyline { closed: true });
        feed_all(
            &mut builder,
            vec![
                vertex(0.0, 0.0),
                vertex(4.0, 0.0),
                vertex(4.0, 4.0),
                vertex(0.0, 4.0),
            ],
        );
        builder.feed(ImportEvent::Polyline { closed: true });
        feed_all(
            &mut builder,
            vec![
                vertex(1.0, 1.0),
                vertex(2.0, 1.0),
                vertex(2.0, 2.0),
                vertex(1.0, 2.0),
            ],
        );
        let panels = builder.finish(&mut store).unwrap();

        assert_eq!(panels.len(), 1);
        let face = store.face(panels[0].face).unwrap();
        assert_eq!(face.inner_rings.len(), 1);
        let hole = face.inner_rings[0];
        assert_eq!(store.ring(hole).unwrap().face, panels[0].face);
        assert_eq!(store.ring_half_edges(hole).unwrap().len(), 4);
        // every solid in the store is still structurally sound
        for &solid in store.solids() {
            assert!(IsValid::new(solid).execute(&store));
        }
    }

    #[test]
    fn disjoint_contour_on_one_layer_stays_a_panel() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        feed_all(&mut builder, square_lines(0.0, 0.0, 4.0));
        builder.feed(ImportEvent::Polyline { closed: true });
        feed_all(&mut builder, square_lines(10.0, 10.0, 2.0));
        let panels = builder.finish(&mut store).unwrap();

        assert_eq!(panels.len(), 2);
        for panel in &panels {
            assert!(store.face(panel.face).unwrap().inner_rings.is_empty());
        }
    }

    #[test]
    fn layer_change_splits_panels() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        builder.feed(ImportEvent::Layer {
            name: "front".into(),
        });
        feed_all(&mut builder, square_lines(0.0, 0.0, 2.0));
        builder.feed(ImportEvent::Layer {
            name: "back".into(),
        });
        feed_all(&mut builder, square_lines(0.0, 0.0, 2.0));
        let panels = builder.finish(&mut store).unwrap();

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].layer, "front");
        assert_eq!(panels[1].layer, "back");
    }

    #[test]
    fn unsupported_entities_are_skipped() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        builder.feed(ImportEvent::Point { x: 1.0, y: 1.0 });
        builder.feed(ImportEvent::Arc {
            cx: 0.0,
            cy: 0.0,
            radius: 2.0,
            start_angle: 0.0,
            end_angle: 90.0,
        });
        builder.feed(ImportEvent::Circle {
            cx: 0.0,
            cy: 0.0,
            radius: 1.0,
        });
        feed_all(&mut builder, square_lines(0.0, 0.0, 2.0));
        let panels = builder.finish(&mut store).unwrap();
        assert_eq!(panels.len(), 1);
    }

    #[test]
    fn degenerate_contour_is_dropped() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        builder.feed(line(0.0, 0.0, 1.0, 0.0));
        builder.feed(ImportEvent::Polyline { closed: false });
        feed_all(&mut builder, square_lines(5.0, 5.0, 2.0));
        let panels = builder.finish(&mut store).unwrap();
        assert_eq!(panels.len(), 1);
    }

    #[test]
    fn scale_factor_multiplies_coordinates() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new().with_scale(50.0);
        feed_all(&mut builder, square_lines(0.0, 0.0, 1.0));
        let panels = builder.finish(&mut store).unwrap();

        let face = store.face(panels[0].face).unwrap();
        let verts = store.ring_vertices(face.outer_ring).unwrap();
        let max_x = verts
            .iter()
            .map(|&v| store.vertex(v).unwrap().point.x)
            .fold(f64::MIN, f64::max);
        assert_relative_eq!(max_x, 50.0);
    }

    #[test]
    fn closing_point_repeat_is_deduplicated() {
        let mut store = TopologyStore::new();
        let mut builder = PanelBuilder::new();
        builder.feed(ImportEvent::Polyline { closed: true });
        feed_all(
            &mut builder,
            vec![
                vertex(0.0, 0.0),
                vertex(2.0, 0.0),
                vertex(2.0, 2.0),
                vertex(0.0, 2.0),
                vertex(0.0, 0.0),
            ],
        );
        let panels = builder.finish(&mut store).unwrap();
        let face = store.face(panels[0].face).unwrap();
        assert_eq!(store.ring_vertices(face.outer_ring).unwrap().len(), 4);
    }
}
