use crate::{Count, Quad, Rect};

/// region quadtree over values with a 2d position
///
/// a node stores at most `CAP` points directly, the insert that would
/// exceed that splits the node into four quadrant children, once split a
/// node never merges back
pub struct QuadTree<P, const CAP: usize = 32> {
    pub(crate) rect: Rect,
    pub(crate) count: usize,
    pub(crate) store: Store<P, CAP>,
}

/// leaf points or four quadrant children, never both
#[derive(Debug)]
pub enum Store<P, const CAP: usize> {
    Leaf(Vec<P>),
    Inner(Box<Quad<QuadTree<P, CAP>>>),
}

impl<P, const CAP: usize> QuadTree<P, CAP> {
    pub fn new(rect: Rect) -> Self {
        assert!(CAP > 0, "leaf capacity must be nonzero");
        Self {
            rect,
            count: 0,
            store: Store::Leaf(Vec::new()),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
    pub fn store(&self) -> &Store<P, CAP> {
        &self.store
    }
    /// the points stored directly in this node, `None` once split
    pub fn points(&self) -> Option<&[P]> {
        self.store.leaf()
    }
    /// the four quadrant children, `None` until split
    pub fn children(&self) -> Option<&Quad<Self>> {
        self.store.inner()
    }
}

impl<P, const CAP: usize> Store<P, CAP> {
    pub fn leaf(&self) -> Option<&[P]> {
        match self {
            Self::Leaf(points) => Some(points),
            Self::Inner(_) => None,
        }
    }
    pub fn inner(&self) -> Option<&Quad<QuadTree<P, CAP>>> {
        match self {
            Self::Leaf(_) => None,
            Self::Inner(children) => Some(children),
        }
    }
}

// not in ops/count.rs since the count is cached on the node
impl<P, const CAP: usize> Count for QuadTree<P, CAP> {
    fn count(&self) -> usize {
        self.count
    }
}

impl<P, const CAP: usize> std::fmt::Debug for QuadTree<P, CAP> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("rect", &self.rect)
            .field("count", &self.count)
            .field("split", &matches!(self.store, Store::Inner(_)))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::{Count, Point, Position, QuadTree, Rect};

    // the original consumer stores colored particles, equality is kind
    // plus position
    #[derive(Clone, Copy, Debug)]
    struct Particle {
        kind: u8,
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
    }
    impl PartialEq for Particle {
        fn eq(&self, other: &Self) -> bool {
            self.kind == other.kind && self.x == other.x && self.y == other.y
        }
    }
    impl Position for Particle {
        fn x(&self) -> f64 {
            self.x
        }
        fn y(&self) -> f64 {
            self.y
        }
    }

    #[test]
    fn new_tree_is_an_empty_leaf() {
        let tree: QuadTree<Point, 8> = QuadTree::new(Rect::origin_size(-50.0, -50.0, 100.0, 100.0));
        assert!(tree.is_empty());
        assert!(tree.points().expect("new tree is a leaf").is_empty());
        assert!(tree.children().is_none());
        assert_eq!(100.0, tree.rect().width());
        assert_eq!(50.0, tree.rect().east());
    }

    #[test]
    fn stores_opaque_payloads() {
        let mut tree: QuadTree<Particle, 4> =
            QuadTree::new(Rect::origin_size(0.0, 0.0, 100.0, 100.0));
        let p = Particle {
            kind: 2,
            x: 40.0,
            y: 60.0,
            vx: -1.0,
            vy: 0.5,
        };
        tree.push(p);
        assert_eq!(1, tree.count());
        let hood = tree.query_circle(Point::new(42.0, 60.0), 5.0);
        assert_eq!(vec![p], hood);
        assert_eq!((-1.0, 0.5), (hood[0].vx, hood[0].vy));
    }

    #[test]
    #[should_panic(expected = "leaf capacity")]
    fn zero_capacity_is_rejected() {
        let _ = QuadTree::<Point, 0>::new(Rect::origin_size(0.0, 0.0, 1.0, 1.0));
    }
}
