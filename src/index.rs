/// Default attribute key under which read lengths are stored.
pub const READ_LENGTH_KEY: &str = "read_length";

/// Default attribute key under which overlap lengths are stored.
pub const OVERLAP_LENGTH_KEY: &str = "overlap_length";

/// Strand of a read: forward as sequenced, or its reverse complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    /// The opposite strand. `reverse` is an involution.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Integer encoding (forward = 0, reverse = 1) used for dense indexing.
    #[inline]
    pub fn as_int(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Reverse => 1,
        }
    }

    /// Decode from the 0/1 integer encoding; any non-zero value is reverse.
    #[inline]
    pub fn from_int(value: usize) -> Self {
        if value == 0 {
            Self::Forward
        } else {
            Self::Reverse
        }
    }
}

/// A read index paired with a strand.
///
/// Each underlying read contributes two oriented vertices to the graph, one
/// per strand. Attributes such as read length are shared by both, so they are
/// keyed by `index` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientedVertex {
    index: usize,
    orientation: Orientation,
}

impl OrientedVertex {
    #[inline]
    pub fn new(index: usize, orientation: Orientation) -> Self {
        Self { index, orientation }
    }

    /// Forward-strand vertex for a read index.
    #[inline]
    pub fn forward(index: usize) -> Self {
        Self::new(index, Orientation::Forward)
    }

    /// Reverse-strand vertex for a read index.
    #[inline]
    pub fn reverse_strand(index: usize) -> Self {
        Self::new(index, Orientation::Reverse)
    }

    /// Underlying read index, independent of strand.
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    /// The opposite-strand counterpart; `v.reverse().reverse() == v`.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::new(self.index, self.orientation.reverse())
    }

    /// Dense index in `0..2n` (forward and reverse interleaved), used for
    /// marker arrays and matrix export.
    #[inline]
    pub fn linear(self) -> usize {
        self.index * 2 + self.orientation.as_int()
    }
}

/// Identifier of an overlap edge. An edge and its mirror share one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        let v = OrientedVertex::forward(3);
        assert_eq!(v.reverse().reverse(), v);
        assert_eq!(v.reverse().orientation(), Orientation::Reverse);
        assert_eq!(v.reverse().index(), 3);
    }

    #[test]
    fn linear_indices_are_dense_and_distinct() {
        let fwd = OrientedVertex::forward(2);
        let rev = fwd.reverse();
        assert_eq!(fwd.linear(), 4);
        assert_eq!(rev.linear(), 5);
    }

    #[test]
    fn orientation_round_trips_through_int_encoding() {
        assert_eq!(Orientation::from_int(Orientation::Forward.as_int()), Orientation::Forward);
        assert_eq!(Orientation::from_int(Orientation::Reverse.as_int()), Orientation::Reverse);
    }
}
