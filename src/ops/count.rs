use crate::{Quad, Store};

/// number of points stored in a subtree
// a trait so quads of nodes and raw stores sum the same way, annoying to
// have to bring it into scope
pub trait Count {
    fn count(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> Count for Quad<T>
where
    T: Count,
{
    fn count(&self) -> usize {
        self.iter().map(T::count).sum()
    }
}

impl<P, const CAP: usize> Count for Store<P, CAP> {
    fn count(&self) -> usize {
        match self {
            Store::Leaf(points) => points.len(),
            Store::Inner(children) => children.count(),
        }
    }
}
