use tracing::trace;

use crate::{Point, Position, QuadTree, Rect, Store};

impl<P, const CAP: usize> QuadTree<P, CAP>
where
    P: Position,
{
    /// collect the points inside `query`, inclusive of its edges
    ///
    /// results come out in depth-first quadrant order, leaf storage order
    /// within a leaf
    pub fn query_rect(&self, query: Rect) -> Vec<P> {
        let mut found = Vec::new();
        self.query_rect_into(query, &mut found);
        trace!(query = ?query, found = found.len(), "query_rect");
        found
    }

    fn query_rect_into(&self, query: Rect, found: &mut Vec<P>) {
        if !self.rect.overlaps(query) {
            return;
        }
        match &self.store {
            Store::Leaf(points) => {
                found.extend(points.iter().filter(|p| query.contains(p.pos())).copied());
            }
            Store::Inner(children) => {
                for child in children.iter() {
                    child.query_rect_into(query, found);
                }
            }
        }
    }

    /// collect the points within `radius` of `center`
    ///
    /// nodes are pruned by the circle's bounding square, the per-point
    /// test is the exact euclidean distance, inclusive at the radius
    pub fn query_circle(&self, center: Point, radius: f64) -> Vec<P> {
        let mut found = Vec::new();
        self.query_circle_into(center, radius, &mut found);
        trace!(x = center.x, y = center.y, radius, found = found.len(), "query_circle");
        found
    }

    fn query_circle_into(&self, center: Point, radius: f64, found: &mut Vec<P>) {
        if !self.rect.overlaps(Rect::around(center, radius)) {
            return;
        }
        match &self.store {
            Store::Leaf(points) => {
                let r_sq = radius * radius;
                found.extend(
                    points
                        .iter()
                        .filter(|p| center.dist_sq(p.pos()) <= r_sq)
                        .copied(),
                );
            }
            Store::Inner(children) => {
                for child in children.iter() {
                    child.query_circle_into(center, radius, found);
                }
            }
        }
    }
}
