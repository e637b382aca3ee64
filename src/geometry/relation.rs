/// Positional relation between a shape and a point or another shape.
///
/// Each query documents which subset it can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// On the boundary.
    On,
    /// Strictly inside.
    In,
    /// Strictly outside.
    Out,
    /// Left of a directed line.
    Left,
    /// Right of a directed line.
    Right,
    /// Below.
    Down,
    /// Above.
    Up,
    /// The queried shape contains the receiver.
    Contain,
    /// The queried shape is contained in the receiver.
    Contained,
    /// Both shapes coincide.
    Overlap,
    /// Boundaries cross.
    Intersect,
    /// Touching from the inside.
    InternallyTangent,
    /// Touching from the outside.
    ExternallyTangent,
    /// No common point.
    Disjoint,
}

/// Traversal direction of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winding {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }
}
