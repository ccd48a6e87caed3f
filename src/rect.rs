use crate::{Point, Quad};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Side {
    min: f64,
    max: f64,
}
impl Side {
    const fn min_max(min: f64, max: f64) -> Self {
        Self { min, max }
    }
    fn contains(&self, a: f64) -> bool {
        self.min <= a && a <= self.max
    }
    fn overlaps(&self, other: Side) -> bool {
        self.min <= other.max && other.min <= self.max
    }
    fn mid(&self) -> f64 {
        self.min + (self.max - self.min) / 2.0
    }
    /// the half up to the midpoint, midpoint included
    fn lower(&self) -> Side {
        Self::min_max(self.min, self.mid())
    }
    /// the half from the midpoint on, midpoint included
    fn upper(&self) -> Side {
        Self::min_max(self.mid(), self.max)
    }
    fn len(&self) -> f64 {
        self.max - self.min
    }
}

/// axis-aligned rect that inclusively contains a min and max corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: Side,
    y: Side,
}
impl Rect {
    const fn from_sides(x: Side, y: Side) -> Self {
        Self { x, y }
    }
    pub fn min_max(min: Point, max: Point) -> Self {
        Self::from_sides(Side::min_max(min.x, max.x), Side::min_max(min.y, max.y))
    }
    /// rect from its north-west corner and extents
    pub fn origin_size(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::from_sides(Side::min_max(x, x + w), Side::min_max(y, y + h))
    }
    /// square of half side `r` centered on `center`
    pub fn around(center: Point, r: f64) -> Self {
        Self::from_sides(
            Side::min_max(center.x - r, center.x + r),
            Side::min_max(center.y - r, center.y + r),
        )
    }

    pub fn west(&self) -> f64 {
        self.x.min
    }
    pub fn east(&self) -> f64 {
        self.x.max
    }
    pub fn north(&self) -> f64 {
        self.y.min
    }
    pub fn south(&self) -> f64 {
        self.y.max
    }
    pub fn width(&self) -> f64 {
        self.x.len()
    }
    pub fn height(&self) -> f64 {
        self.y.len()
    }
    pub fn center(&self) -> Point {
        Point::new(self.x.mid(), self.y.mid())
    }

    /// point containment, inclusive on all four edges
    pub fn contains(&self, p: Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }
    /// rect overlap, touching edges count
    pub fn overlaps(&self, other: Rect) -> bool {
        self.x.overlaps(other.x) && self.y.overlaps(other.y)
    }

    /// the four quadrant sub-rects split at the midpoint
    ///
    /// children reuse the parent's min, mid and max values verbatim, so
    /// they tile the parent exactly
    pub fn quadrants(&self) -> Quad<Rect> {
        let (w, e) = (self.x.lower(), self.x.upper());
        let (n, s) = (self.y.lower(), self.y.upper());
        Quad {
            nw: Self::from_sides(w, n),
            ne: Self::from_sides(e, n),
            sw: Self::from_sides(w, s),
            se: Self::from_sides(e, s),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::origin_size(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 50.0)));
        assert!(r.contains(Point::new(100.0, 0.0)));
        assert!(!r.contains(Point::new(100.1, 25.0)));
        assert!(!r.contains(Point::new(50.0, -0.1)));
    }

    #[test]
    fn overlaps_touching_edges() {
        let a = Rect::origin_size(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(Rect::origin_size(10.0, 10.0, 5.0, 5.0)));
        assert!(a.overlaps(Rect::origin_size(5.0, 5.0, 100.0, 100.0)));
        assert!(!a.overlaps(Rect::origin_size(10.1, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(Rect::origin_size(0.0, -5.1, 10.0, 5.0)));
    }

    #[test]
    fn quadrants_tile_exactly() {
        let r = Rect::origin_size(0.0, 0.0, 100.0, 50.0);
        let q = r.quadrants();
        let c = r.center();
        assert_eq!(q.nw, Rect::min_max(Point::new(0.0, 0.0), c));
        assert_eq!(q.se, Rect::min_max(c, Point::new(100.0, 50.0)));
        // shared edges, no gaps
        assert_eq!(q.nw.east(), q.ne.west());
        assert_eq!(q.nw.south(), q.sw.north());
        assert_eq!(q.ne.south(), q.se.north());
        assert_eq!(q.sw.east(), q.se.west());
        assert_eq!(q.nw.west(), r.west());
        assert_eq!(q.se.east(), r.east());
        assert_eq!(q.ne.north(), r.north());
        assert_eq!(q.sw.south(), r.south());
    }
}
