//! Randomised checks of the clipping invariants.
//!
//! Inputs come from a fixed-seed xorshift generator so every run sees the
//! same cases.

use rectclip::{cohen_sutherland, outcode, sutherland_hodgman, ClipWindow, Outcode, Point2, Polygon, Segment2};

const CASES: usize = 2000;
const EPS: f64 = 1e-9;

struct XorShift(u64);

impl XorShift {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0 as f64 / u64::MAX as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    fn point(&mut self, lo: f64, hi: f64) -> Point2<f64> {
        Point2::new(self.range(lo, hi), self.range(lo, hi))
    }

    fn point_in(&mut self, w: &ClipWindow<f64>) -> Point2<f64> {
        let p = Point2::new(
            self.range(w.xmin(), w.xmax()),
            self.range(w.ymin(), w.ymax()),
        );
        // Rounding in `range` may land a hair past the far edge.
        w.clamp(p)
    }

    fn window(&mut self) -> ClipWindow<f64> {
        ClipWindow::from_corners(self.point(-20.0, 20.0), self.point(-20.0, 20.0)).unwrap()
    }
}

fn within(p: Point2<f64>, w: &ClipWindow<f64>) -> bool {
    p.x >= w.xmin() - EPS && p.x <= w.xmax() + EPS && p.y >= w.ymin() - EPS && p.y <= w.ymax() + EPS
}

/// Distance from `p` to the infinite line through `s`, scaled by the segment length.
fn off_line(p: Point2<f64>, s: Segment2<f64>) -> f64 {
    let dx = s.end.x - s.start.x;
    let dy = s.end.y - s.start.y;
    ((p.x - s.start.x) * dy - (p.y - s.start.y) * dx).abs() / s.length()
}

#[test]
fn inside_points_have_inside_outcode() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for _ in 0..CASES {
        let w = rng.window();
        let p = rng.point_in(&w);
        assert_eq!(outcode(p, &w), Outcode::INSIDE, "{:?} in {:?}", p, w);
    }
}

#[test]
fn outcode_never_sets_opposite_sides() {
    let mut rng = XorShift(17);
    for _ in 0..CASES {
        let w = rng.window();
        let code = outcode(rng.point(-50.0, 50.0), &w);
        assert!(!(code.contains(Outcode::LEFT) && code.contains(Outcode::RIGHT)));
        assert!(!(code.contains(Outcode::BOTTOM) && code.contains(Outcode::TOP)));
    }
}

#[test]
fn inside_segments_are_unchanged() {
    let mut rng = XorShift(23);
    for _ in 0..CASES {
        let w = rng.window();
        let s = Segment2::new(rng.point_in(&w), rng.point_in(&w));
        assert_eq!(cohen_sutherland(s, &w), Some(s));
    }
}

#[test]
fn segments_beyond_one_side_are_rejected() {
    let mut rng = XorShift(29);
    for _ in 0..CASES {
        let w = rng.window();
        let x1 = rng.range(w.xmax() + 0.001, w.xmax() + 30.0);
        let x2 = rng.range(w.xmax() + 0.001, w.xmax() + 30.0);
        let s = Segment2::from_coords(x1, rng.range(-50.0, 50.0), x2, rng.range(-50.0, 50.0));
        assert!(cohen_sutherland(s, &w).is_none());

        let y1 = rng.range(w.ymin() - 30.0, w.ymin() - 0.001);
        let y2 = rng.range(w.ymin() - 30.0, w.ymin() - 0.001);
        let s = Segment2::from_coords(rng.range(-50.0, 50.0), y1, rng.range(-50.0, 50.0), y2);
        assert!(cohen_sutherland(s, &w).is_none());
    }
}

#[test]
fn segment_clipping_is_idempotent_and_stays_on_line() {
    let mut rng = XorShift(31);
    let mut visible = 0;
    for _ in 0..CASES {
        let w = rng.window();
        let s = Segment2::new(rng.point(-50.0, 50.0), rng.point(-50.0, 50.0));
        let Some(clipped) = cohen_sutherland(s, &w) else {
            continue;
        };
        visible += 1;

        assert!(outcode(clipped.start, &w).is_inside());
        assert!(outcode(clipped.end, &w).is_inside());
        assert_eq!(cohen_sutherland(clipped, &w), Some(clipped));

        if !s.is_point() {
            assert!(off_line(clipped.start, s) < 1e-6, "{:?} -> {:?}", s, clipped);
            assert!(off_line(clipped.end, s) < 1e-6, "{:?} -> {:?}", s, clipped);
        }
    }
    assert!(visible > CASES / 10);
}

#[test]
fn segment_clipping_is_symmetric() {
    let mut rng = XorShift(37);
    for _ in 0..CASES {
        let w = rng.window();
        let s = Segment2::new(rng.point(-50.0, 50.0), rng.point(-50.0, 50.0));
        let forward = cohen_sutherland(s, &w);
        let backward = cohen_sutherland(s.reversed(), &w).map(Segment2::reversed);
        match (forward, backward) {
            (Some(f), Some(b)) => {
                assert!(f.start.distance(b.start) < 1e-6, "{:?} vs {:?}", f, b);
                assert!(f.end.distance(b.end) < 1e-6, "{:?} vs {:?}", f, b);
            }
            (None, None) => {}
            // A line grazing a corner may round either way.
            (Some(f), None) | (None, Some(f)) => assert!(f.length() < 1e-6, "{:?}", f),
        }
    }
}

#[test]
fn inside_polygons_are_unchanged() {
    let mut rng = XorShift(41);
    for _ in 0..CASES / 4 {
        let w = rng.window();
        let n = 3 + (rng.next_f64() * 6.0) as usize;
        let subject: Polygon<f64> = (0..n).map(|_| rng.point_in(&w)).collect();
        assert_eq!(sutherland_hodgman(&subject, &w), subject);
    }
}

#[test]
fn polygons_beyond_one_side_are_empty() {
    let mut rng = XorShift(43);
    for _ in 0..CASES / 4 {
        let w = rng.window();
        let n = 3 + (rng.next_f64() * 6.0) as usize;
        let subject: Polygon<f64> = (0..n)
            .map(|_| {
                Point2::new(
                    rng.range(-50.0, 50.0),
                    rng.range(w.ymax() + 0.001, w.ymax() + 30.0),
                )
            })
            .collect();
        assert!(sutherland_hodgman(&subject, &w).is_empty());
    }
}

#[test]
fn clipped_polygons_stay_inside_window() {
    let mut rng = XorShift(47);
    for _ in 0..CASES / 4 {
        let w = rng.window();
        let n = 3 + (rng.next_f64() * 10.0) as usize;
        let subject: Polygon<f64> = (0..n).map(|_| rng.point(-40.0, 40.0)).collect();
        let clipped = sutherland_hodgman(&subject, &w);
        for v in &clipped.vertices {
            assert!(within(*v, &w), "{:?} outside {:?}", v, w);
        }
    }
}

#[test]
fn convex_clip_never_grows_area() {
    let mut rng = XorShift(53);
    for _ in 0..CASES / 4 {
        let w = rng.window();
        // Triangles are always simple, so the clipped area is the overlap.
        let subject: Polygon<f64> = (0..3).map(|_| rng.point(-40.0, 40.0)).collect();
        let clipped = sutherland_hodgman(&subject, &w);
        assert!(clipped.area() <= subject.area() + 1e-6);
        assert!(clipped.area() <= w.area() + 1e-6);
    }
}
