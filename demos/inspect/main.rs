//! Plangeo Inspect — prints a few kernel queries and their text forms.
//!
//! Usage:
//! ```text
//! cargo run --example inspect
//! RUST_LOG=plangeo=trace cargo run --example inspect
//! ```

use plangeo::geometry::{
    Aabb, Angle, Bezier, Circle, Ellipse, Extent, Path, Polyline, Segment, SegmentKind,
    TextCodec, Winding,
};
use plangeo::math::Point2;
use plangeo::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for plangeo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=plangeo=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("inspect=info".parse().unwrap_or_default())
        .add_directive("plangeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Segment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
    let b = Segment::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0));
    tracing::info!(a = %a.encode(), b = %b.encode(), hit = ?a.intersect(&b), "segments");

    let outline = Polyline::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(3.0, -1.0),
        Point2::new(5.0, 5.0),
        Point2::new(1.0, 2.0),
        Point2::new(2.0, 1.0),
    ]);
    let hull = outline.convex_hull();
    tracing::info!(
        hull = %hull.encode(),
        area = hull.area(),
        winding = ?hull.winding(),
        "convex hull"
    );
    for sample in [Point2::new(2.0, 2.0), Point2::new(3.0, -1.0), Point2::new(-1.0, 0.0)] {
        tracing::info!(?sample, relation = ?hull.relation_with_pt(&sample), "point in hull");
    }

    let wide = Circle::new(Point2::origin(), 5.0)?;
    let small = Circle::new(Point2::new(1.0, 1.0), 2.0)?;
    tracing::info!(relation = ?wide.relation_with_circle(&small), "circles");

    let ellipse = Ellipse::from_aabb(&Aabb::new(-4.0, 4.0, -2.0, 2.0))?;
    let approx = Path::from_ellipse(&ellipse, Winding::CounterClockwise);
    tracing::info!(
        ellipse = %ellipse.encode(),
        area = ellipse.area(),
        path_bounds = ?approx.aabb()?,
        "ellipse"
    );

    let curve = Bezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 3.0),
        Point2::new(3.0, -3.0),
        Point2::new(4.0, 0.0),
    );
    let axis = Segment::new(Point2::new(-1.0, 0.0), Point2::new(5.0, 0.0));
    tracing::info!(
        length = curve.length(0.01)?,
        crossings = ?curve.intersect_segment(&axis, Extent::Bounded),
        "bezier"
    );

    let square = Path::from_aabb(
        &Aabb::new(0.0, 1.0, 0.0, 1.0),
        SegmentKind::Bezier,
        Winding::Clockwise,
    );
    tracing::info!(path = %square.encode(), "bezier square");

    let corner = Angle::new(Point2::new(1.0, 0.0), Point2::origin(), Point2::new(0.0, 1.0));
    tracing::info!(bisector = %corner.bisector().encode(), "angle");

    Ok(())
}
