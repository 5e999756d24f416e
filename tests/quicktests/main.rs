use quickcheck::{Arbitrary, Gen};

mod tree;

/// Things a quicktest can do to a tree from the outside.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Insert the K into a copy, leaving the original alone
    InsertIntoCopy(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::InsertIntoCopy(K::arbitrary(g))
        }
    }
}
