use tracing::trace;

use crate::{Count, Position, Quadrant, QuadTree, Store};

impl<P, const CAP: usize> QuadTree<P, CAP>
where
    P: Position,
{
    /// insert a point
    ///
    /// points outside this node's rect are silently dropped
    pub fn push(&mut self, point: P) {
        if !self.rect.contains(point.pos()) {
            trace!(x = point.x(), y = point.y(), "point outside the rect, dropped");
            return;
        }
        self.push_in_bounds(point);
    }

    fn push_in_bounds(&mut self, point: P) {
        self.count += 1;
        match &mut self.store {
            Store::Leaf(points) if points.len() < CAP => points.push(point),
            Store::Leaf(_) => {
                self.split();
                self.sink(point);
                debug_assert_eq!(self.count, self.store.count());
            }
            Store::Inner(_) => self.sink(point),
        }
    }

    /// the insert that would exceed the leaf capacity turns the node into
    /// four quadrant children and re-routes the stored points
    fn split(&mut self) {
        trace!(rect = ?self.rect, count = self.count, "splitting leaf");
        let children = Box::new(self.rect.quadrants().map(Self::new));
        let Store::Leaf(points) = std::mem::replace(&mut self.store, Store::Inner(children))
        else {
            unreachable!("only leaves split");
        };
        for point in points {
            self.sink(point);
        }
    }

    /// route a point to the child owning its quadrant, the east/south
    /// child owns the split lines
    fn sink(&mut self, point: P) {
        let q = Quadrant::from_point(point.pos(), self.rect.center());
        match &mut self.store {
            Store::Inner(children) => children[q].push_in_bounds(point),
            Store::Leaf(_) => unreachable!("sink into a leaf"),
        }
    }
}
