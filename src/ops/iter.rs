use std::iter::FusedIterator;
use std::slice;

use either::Either;

use crate::{Count, Quad, QuadTree, Store};

/// one cursor per tree level, a leaf walks its points, an inner node
/// walks its children
type Frame<'a, P, const CAP: usize> =
    Either<slice::Iter<'a, P>, std::array::IntoIter<&'a QuadTree<P, CAP>, 4>>;

/// depth-first iterator over every point in a subtree
///
/// visits children in `[NW, NE, SW, SE]` order and leaf points in storage
/// order, the shared borrow keeps the tree unchanged while iterating
pub struct Iter<'a, P, const CAP: usize> {
    stack: Vec<Frame<'a, P, CAP>>,
    remaining: usize,
}

impl<P, const CAP: usize> QuadTree<P, CAP> {
    pub fn iter(&self) -> Iter<'_, P, CAP> {
        Iter {
            stack: vec![frame(self)],
            remaining: self.count(),
        }
    }
}

fn frame<P, const CAP: usize>(tree: &QuadTree<P, CAP>) -> Frame<'_, P, CAP> {
    match tree.store() {
        Store::Leaf(points) => Either::Left(points.iter()),
        Store::Inner(children) => {
            let children: &Quad<_> = children;
            Either::Right(children.into_iter())
        }
    }
}

impl<'a, P, const CAP: usize> Iterator for Iter<'a, P, CAP> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.last_mut()? {
                Either::Left(points) => {
                    if let Some(point) = points.next() {
                        self.remaining -= 1;
                        return Some(point);
                    }
                    self.stack.pop();
                }
                Either::Right(children) => {
                    if let Some(child) = children.next() {
                        self.stack.push(frame(child));
                    } else {
                        self.stack.pop();
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<P, const CAP: usize> ExactSizeIterator for Iter<'_, P, CAP> {}
impl<P, const CAP: usize> FusedIterator for Iter<'_, P, CAP> {}

impl<'a, P, const CAP: usize> IntoIterator for &'a QuadTree<P, CAP> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P, CAP>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
