//! Solid/void decomposition of a wall around its doors and windows.

use serde::{Deserialize, Serialize};

use crate::model::Opening;

/// Gaps between openings shorter than this (m) get no wall span.
pub const MIN_SPAN_LENGTH: f64 = 0.05;

/// Which part of the wall a span represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Full-height wall between openings.
    Wall,
    /// Lintel from the top of an opening to the top of the wall.
    Above,
    /// Sill from the floor to the bottom of a window.
    Below,
}

/// A solid piece of a wall, in wall-local coordinates: `start`/`end` along
/// the wall from its start point, `bottom`/`top` above the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpan {
    pub kind: SpanKind,
    pub start: f64,
    pub end: f64,
    pub bottom: f64,
    pub top: f64,
}

impl WallSpan {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Splits a wall of given length and height into the spans left standing
/// once its openings are cut out.
pub struct SegmentWall<'a> {
    length: f64,
    height: f64,
    openings: Vec<&'a Opening>,
}

impl<'a> SegmentWall<'a> {
    /// Creates a new `SegmentWall` operation.
    #[must_use]
    pub fn new(length: f64, height: f64, openings: impl IntoIterator<Item = &'a Opening>) -> Self {
        Self {
            length,
            height,
            openings: openings.into_iter().collect(),
        }
    }

    /// Executes the segmentation.
    ///
    /// Openings are projected onto `[0, length]` and walked in order of their
    /// projected start; openings whose projection is empty are skipped.
    /// Overlapping openings are handled one by one and may produce
    /// overlapping lintels, but full-height spans never overlap.
    #[must_use]
    pub fn execute(&self) -> Vec<WallSpan> {
        let length = self.length.max(0.0);
        let mut projected: Vec<(f64, f64, &Opening)> = self
            .openings
            .iter()
            .map(|o| {
                let (start, end) = o.projected_range(length);
                (start, end, *o)
            })
            // Openings entirely off the wall, or without width, cut nothing.
            .filter(|(start, end, _)| end > start)
            .collect();
        // Stable, so openings with equal starts keep their input order.
        projected.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut spans = Vec::with_capacity(projected.len() * 3 + 1);
        let mut cursor = 0.0;
        for (start, end, opening) in projected {
            if start - cursor >= MIN_SPAN_LENGTH {
                spans.push(self.full_height(cursor, start));
            }

            let top = opening.top();
            if top < self.height {
                spans.push(WallSpan {
                    kind: SpanKind::Above,
                    start,
                    end,
                    bottom: top,
                    top: self.height,
                });
            }
            let sill = opening.sill_height();
            if opening.is_window() && sill > 0.0 {
                spans.push(WallSpan {
                    kind: SpanKind::Below,
                    start,
                    end,
                    bottom: 0.0,
                    top: sill,
                });
            }
            cursor = end.max(cursor);
        }

        if length - cursor >= MIN_SPAN_LENGTH {
            spans.push(self.full_height(cursor, length));
        }
        spans
    }

    fn full_height(&self, start: f64, end: f64) -> WallSpan {
        WallSpan {
            kind: SpanKind::Wall,
            start,
            end,
            bottom: 0.0,
            top: self.height,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::WallId;
    use approx::assert_abs_diff_eq;

    fn assert_span(span: &WallSpan, kind: SpanKind, range: (f64, f64), heights: (f64, f64)) {
        assert_eq!(span.kind, kind, "{span:?}");
        assert_abs_diff_eq!(span.start, range.0, epsilon = 1e-9);
        assert_abs_diff_eq!(span.end, range.1, epsilon = 1e-9);
        assert_abs_diff_eq!(span.bottom, heights.0, epsilon = 1e-9);
        assert_abs_diff_eq!(span.top, heights.1, epsilon = 1e-9);
    }

    /// Length covered by the union of the openings' projected ranges.
    fn covered(openings: &[Opening], length: f64) -> f64 {
        let mut ranges: Vec<(f64, f64)> = openings.iter().map(|o| o.projected_range(length)).collect();
        ranges.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut total = 0.0;
        let mut reach = 0.0_f64;
        for (s, e) in ranges {
            let s = s.max(reach);
            if e > s {
                total += e - s;
                reach = e;
            }
        }
        total
    }

    #[test]
    fn centered_door() {
        let door = Opening::door(WallId::default(), 0.5);
        let spans = SegmentWall::new(4.0, 2.8, [&door]).execute();
        assert_eq!(spans.len(), 3);
        assert_span(&spans[0], SpanKind::Wall, (0.0, 1.55), (0.0, 2.8));
        assert_span(&spans[1], SpanKind::Above, (1.55, 2.45), (2.1, 2.8));
        assert_span(&spans[2], SpanKind::Wall, (2.45, 4.0), (0.0, 2.8));
    }

    #[test]
    fn window_has_lintel_and_sill() {
        let window = Opening::window(WallId::default(), 0.5);
        let spans = SegmentWall::new(4.0, 2.8, [&window]).execute();
        assert_eq!(spans.len(), 4);
        assert_span(&spans[0], SpanKind::Wall, (0.0, 1.4), (0.0, 2.8));
        assert_span(&spans[1], SpanKind::Above, (1.4, 2.6), (2.1, 2.8));
        assert_span(&spans[2], SpanKind::Below, (1.4, 2.6), (0.0, 0.9));
        assert_span(&spans[3], SpanKind::Wall, (2.6, 4.0), (0.0, 2.8));
    }

    #[test]
    fn full_height_door_has_no_lintel() {
        let door = Opening::door(WallId::default(), 0.5).with_height(3.0);
        let spans = SegmentWall::new(4.0, 2.8, [&door]).execute();
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.kind == SpanKind::Wall));
    }

    #[test]
    fn no_openings_gives_whole_wall() {
        let none: [&Opening; 0] = [];
        let spans = SegmentWall::new(3.0, 2.5, none).execute();
        assert_eq!(spans.len(), 1);
        assert_span(&spans[0], SpanKind::Wall, (0.0, 3.0), (0.0, 2.5));
    }

    #[test]
    fn opening_past_wall_end_is_clamped() {
        let door = Opening::door(WallId::default(), 0.98);
        let spans = SegmentWall::new(4.0, 2.8, [&door]).execute();
        assert_eq!(spans.len(), 2);
        assert_span(&spans[0], SpanKind::Wall, (0.0, 3.47), (0.0, 2.8));
        assert_span(&spans[1], SpanKind::Above, (3.47, 4.0), (2.1, 2.8));
    }

    #[test]
    fn narrow_gaps_get_no_wall_span() {
        // Two doors 3 cm apart.
        let a = Opening::door(WallId::default(), 0.25).with_width(1.0);
        let b = Opening::door(WallId::default(), 0.5075).with_width(1.0);
        let spans = SegmentWall::new(4.0, 2.8, [&a, &b]).execute();
        let walls: Vec<&WallSpan> = spans.iter().filter(|s| s.kind == SpanKind::Wall).collect();
        assert_eq!(walls.len(), 2);
        assert_abs_diff_eq!(walls[0].end, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(walls[1].start, 2.53, epsilon = 1e-9);
    }

    #[test]
    fn overlapping_openings_do_not_panic() {
        let a = Opening::window(WallId::default(), 0.4);
        let b = Opening::door(WallId::default(), 0.45);
        let c = Opening::window(WallId::default(), 0.4).with_width(0.0);
        let spans = SegmentWall::new(4.0, 2.8, [&a, &b, &c]).execute();
        assert!(spans.iter().all(|s| s.start < s.end));
        assert_eq!(spans.iter().filter(|s| s.kind == SpanKind::Above).count(), 2);
    }

    #[test]
    fn opening_off_the_wall_cuts_nothing() {
        let door = Opening::door(WallId::default(), 1.2);
        let spans = SegmentWall::new(4.0, 2.8, [&door]).execute();
        assert_eq!(spans.len(), 1);
        assert_span(&spans[0], SpanKind::Wall, (0.0, 4.0), (0.0, 2.8));
    }

    #[test]
    fn negative_width_cuts_nothing() {
        let door = Opening::door(WallId::default(), 0.5).with_width(-1.0);
        let spans = SegmentWall::new(4.0, 2.8, [&door]).execute();
        assert_eq!(spans.len(), 1);
        assert_span(&spans[0], SpanKind::Wall, (0.0, 4.0), (0.0, 2.8));
    }

    #[test]
    fn nested_opening_does_not_rewind() {
        // The narrow window sits inside the wide door's range.
        let door = Opening::door(WallId::default(), 0.5).with_width(2.0);
        let window = Opening::window(WallId::default(), 0.45).with_width(0.4);
        let spans = SegmentWall::new(4.0, 2.8, [&door, &window]).execute();
        let walls: Vec<&WallSpan> = spans.iter().filter(|s| s.kind == SpanKind::Wall).collect();
        assert_eq!(walls.len(), 2);
        assert_span(walls[0], SpanKind::Wall, (0.0, 1.0), (0.0, 2.8));
        assert_span(walls[1], SpanKind::Wall, (3.0, 4.0), (0.0, 2.8));
    }

    #[test]
    fn spans_and_openings_cover_the_wall() {
        let length = 6.0;
        let positions = [-0.2, 0.0, 0.1, 0.33, 0.5, 0.52, 0.9, 1.0, 1.3];
        let widths = [-0.5, 0.0, 0.02, 0.9, 1.5, 4.0];

        for &p1 in &positions {
            for &w1 in &widths {
                for &p2 in &positions {
                    for &w2 in &widths {
                        let openings = vec![
                            Opening::door(WallId::default(), p1).with_width(w1),
                            Opening::window(WallId::default(), p2).with_width(w2),
                        ];
                        let spans = SegmentWall::new(length, 2.8, &openings).execute();
                        assert!(spans.iter().all(|s| s.start < s.end), "{spans:?}");

                        let walls: Vec<&WallSpan> =
                            spans.iter().filter(|s| s.kind == SpanKind::Wall).collect();
                        assert!(
                            walls.windows(2).all(|w| w[0].end <= w[1].start),
                            "{openings:?} -> {spans:?}"
                        );

                        let solid: f64 = walls.iter().map(|s| s.length()).sum();
                        let gap = length - solid - covered(&openings, length);
                        // Up to three uncut slivers: before, between and after.
                        assert!(
                            gap > -1e-9 && gap < 3.0 * MIN_SPAN_LENGTH,
                            "{openings:?} -> {spans:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn tied_starts_keep_input_order() {
        let door = Opening::door(WallId::default(), 0.5)
            .with_width(1.0)
            .with_height(2.0);
        let window = Opening::window(WallId::default(), 0.5).with_width(1.0);
        let spans = SegmentWall::new(4.0, 2.8, [&window, &door]).execute();
        let above: Vec<f64> = spans
            .iter()
            .filter(|s| s.kind == SpanKind::Above)
            .map(|s| s.bottom)
            .collect();
        assert_eq!(above.len(), 2);
        assert_abs_diff_eq!(above[0], 2.1, epsilon = 1e-9);
        assert_abs_diff_eq!(above[1], 2.0, epsilon = 1e-9);
        assert_eq!(spans[2].kind, SpanKind::Below);
    }

    #[test]
    fn span_kind_serializes_lowercase() {
        let json = serde_json::to_string(&SpanKind::Above).unwrap();
        assert_eq!(json, "\"above\"");
    }
}
