pub mod aabb;
pub mod angle;
pub mod codec;
pub mod curve;
pub mod path;
pub mod point;
pub mod polyline;
pub mod relation;
pub mod transform;
pub mod vector;

pub use aabb::Aabb;
pub use angle::Angle;
pub use codec::TextCodec;
pub use curve::{Arc, Bezier, Circle, Ellipse, Line, SegPath, Segment, StretchAnchor};
pub use path::{Path, SegmentKind};
pub use point::{PointExt, Quadrant};
pub use polyline::Polyline;
pub use relation::{Relation, Winding};
pub use transform::{Axis, Transform};
pub use vector::VectorExt;

pub use crate::math::intersect_2d::{Extent, Intersection};
