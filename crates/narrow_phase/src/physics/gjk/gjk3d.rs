//! GJK over 3D Minkowski differences
//!
//! The simplex grows point → segment → triangle → tetrahedron. Each step
//! keeps only the feature whose Voronoi region holds the origin and aims the
//! next support query from that feature toward the origin.

use log::{debug, trace};

use crate::core::config::GjkConfig;
use crate::foundation::math::{utils, Vec3};
use crate::physics::collision::{support, Collider, CollisionError};
use super::simplex::Simplex;
use super::{axes, on_surface, screen_direction, Evolution, Heading};

/// Tetrahedron-capped simplex
pub(crate) type Simplex3 = Simplex<Vec3, 4>;

/// Run the 3D engine; see [`crate::physics::collides`]
pub(crate) fn collides<A, B>(a: &A, b: &B, config: &GjkConfig) -> Result<bool, CollisionError>
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    let minkowski = |direction: &Vec3| support(a, b, direction);

    let seed = minkowski(&Vec3::x());
    if !utils::is_finite3(&seed) {
        return Err(CollisionError::degeneracy(0, format!("seed support point {seed:?} is not finite")));
    }

    let mut simplex = Simplex3::single(seed);
    let mut direction = match screen_direction(-seed, seed.norm(), simplex.len(), 0, config)? {
        Heading::Search(direction) => direction,
        Heading::Touching => return Ok(settle_on_feature(&minkowski, &simplex)),
    };

    for iteration in 1..=config.max_iterations {
        let point = minkowski(&direction);
        if !utils::is_finite3(&point) {
            return Err(CollisionError::degeneracy(
                iteration,
                format!("support point {point:?} is not finite"),
            ));
        }

        let progress = point.dot(&direction);
        trace!(
            "GJK-3D iteration {}: {} point(s), support {:?}, progress {}",
            iteration,
            simplex.len(),
            point,
            progress
        );

        // Support point does not pass the origin: a separating direction exists
        if progress <= 0.0 {
            debug!("GJK-3D: separated after {} iteration(s)", iteration);
            return Ok(false);
        }

        simplex.push_front(point);
        let (reduced, evolution) = next_simplex(&simplex);
        simplex = reduced;

        direction = match evolution {
            Evolution::Contains => {
                debug!("GJK-3D: origin enclosed after {} iteration(s)", iteration);
                return Ok(settle_enclosed(&minkowski, &simplex));
            }
            Evolution::Search { direction, scale } => {
                match screen_direction(direction, scale, simplex.len(), iteration, config)? {
                    Heading::Search(next) => next,
                    Heading::Touching => return Ok(settle_on_feature(&minkowski, &simplex)),
                }
            }
        };
    }

    log::warn!("GJK-3D: no verdict within {} iterations", config.max_iterations);
    Err(CollisionError::IterationLimit { max_iterations: config.max_iterations })
}

/// Verdict once the origin lies on the retained point or segment
fn settle_on_feature(minkowski: impl Fn(&Vec3) -> Vec3, simplex: &Simplex3) -> bool {
    let edge = match simplex.points() {
        &[a, b] => Some(b - a),
        _ => None,
    };
    // Directions across the segment, one per axis it is not parallel to
    let across = edge.into_iter().flat_map(|ab| axes::<3>().map(move |axis| ab.cross(&axis)));

    if on_surface(minkowski, axes::<3>().chain(across)) {
        debug!("GJK-3D: origin on the surface of the difference, shapes only touch");
        false
    } else {
        debug!("GJK-3D: difference is degenerate around the origin");
        true
    }
}

/// Verdict once a tetrahedron encloses the origin
fn settle_enclosed(minkowski: impl Fn(&Vec3) -> Vec3, simplex: &Simplex3) -> bool {
    match face_normals_through_origin(simplex) {
        Some(normals) if on_surface(minkowski, axes::<3>().chain(normals)) => {
            debug!("GJK-3D: origin on a face shared with the surface, shapes only touch");
            false
        }
        _ => true,
    }
}

/// Normals of all four faces, when the origin lies in the plane of any of them
#[allow(clippy::float_cmp)]
fn face_normals_through_origin(simplex: &Simplex3) -> Option<[Vec3; 4]> {
    let &[a, b, c, d] = simplex.points() else {
        return None;
    };

    let faces = [(a, b, c), (a, c, d), (a, d, b), (b, c, d)];
    let normals = faces.map(|(p, q, r)| (q - p).cross(&(r - p)));
    let through_origin = faces.iter().zip(&normals).any(|((p, _, _), normal)| normal.dot(p) == 0.0);

    through_origin.then_some(normals)
}

/// Reduce a freshly grown simplex and pick the next search direction
pub(crate) fn next_simplex(simplex: &Simplex3) -> (Simplex3, Evolution<Vec3>) {
    match simplex.points() {
        &[a, b] => line(a, b),
        &[a, b, c] => triangle(a, b, c),
        &[a, b, c, d] => tetrahedron(a, b, c, d),
        points => unreachable!("reduction runs after a push, got {} point(s)", points.len()),
    }
}

fn same_direction(direction: &Vec3, ao: &Vec3) -> bool {
    direction.dot(ao) > 0.0
}

/// Direction from edge `ab` toward the origin, perpendicular to the edge
fn edge_search(ab: Vec3, ao: Vec3) -> Evolution<Vec3> {
    Evolution::Search {
        direction: ab.cross(&ao).cross(&ab),
        scale: ab.norm_squared() * ao.norm(),
    }
}

fn line(a: Vec3, b: Vec3) -> (Simplex3, Evolution<Vec3>) {
    let ab = b - a;
    let ao = -a;

    if same_direction(&ab, &ao) {
        (Simplex3::from_points(&[a, b]), edge_search(ab, ao))
    } else {
        (Simplex3::single(a), Evolution::Search { direction: ao, scale: ab.norm() })
    }
}

fn triangle(a: Vec3, b: Vec3, c: Vec3) -> (Simplex3, Evolution<Vec3>) {
    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(&ac);
    let face_scale = ab.norm() * ac.norm();

    if same_direction(&abc.cross(&ac), &ao) {
        if same_direction(&ac, &ao) {
            (Simplex3::from_points(&[a, c]), edge_search(ac, ao))
        } else {
            line(a, b)
        }
    } else if same_direction(&ab.cross(&abc), &ao) {
        line(a, b)
    } else if same_direction(&abc, &ao) {
        (Simplex3::from_points(&[a, b, c]), Evolution::Search { direction: abc, scale: face_scale })
    } else {
        // Below the face: flip winding so the normal faces the origin
        (Simplex3::from_points(&[a, c, b]), Evolution::Search { direction: -abc, scale: face_scale })
    }
}

fn tetrahedron(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> (Simplex3, Evolution<Vec3>) {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ao = -a;

    let abc = ab.cross(&ac);
    let acd = ac.cross(&ad);
    let adb = ad.cross(&ab);

    if same_direction(&abc, &ao) {
        return triangle(a, b, c);
    }
    if same_direction(&acd, &ao) {
        return triangle(a, c, d);
    }
    if same_direction(&adb, &ao) {
        return triangle(a, d, b);
    }

    (Simplex3::from_points(&[a, b, c, d]), Evolution::Contains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn search(evolution: Evolution<Vec3>) -> Vec3 {
        match evolution {
            Evolution::Search { direction, .. } => direction,
            Evolution::Contains => panic!("Expected a search direction"),
        }
    }

    #[test]
    fn test_line_keeps_segment_when_origin_is_beside_it() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(-1.0, 1.0, 0.0);

        let (simplex, evolution) = line(a, b);
        let direction = search(evolution);

        assert_eq!(simplex.points(), &[a, b]);
        // Perpendicular to AB and pointing at the origin
        assert_relative_eq!(direction.dot(&(b - a)), 0.0);
        assert!(direction.y < 0.0);
    }

    #[test]
    fn test_line_drops_b_when_origin_is_behind_a() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 0.0, 0.0);

        let (simplex, evolution) = line(a, b);

        assert_eq!(simplex.points(), &[a]);
        assert_relative_eq!(search(evolution), -a);
    }

    #[test]
    fn test_triangle_above_face_keeps_winding() {
        // Triangle in the z = -1 plane around the z axis; origin above it
        let a = Vec3::new(1.0, 0.0, -1.0);
        let b = Vec3::new(-1.0, 1.0, -1.0);
        let c = Vec3::new(-1.0, -1.0, -1.0);

        let (simplex, evolution) = triangle(a, b, c);
        let direction = search(evolution);

        assert_eq!(simplex.points(), &[a, b, c]);
        assert_relative_eq!(direction, (b - a).cross(&(c - a)));
        assert!(direction.z > 0.0);
    }

    #[test]
    fn test_triangle_below_face_swaps_b_and_c() {
        // Same triangle wound the other way round
        let a = Vec3::new(1.0, 0.0, -1.0);
        let b = Vec3::new(-1.0, -1.0, -1.0);
        let c = Vec3::new(-1.0, 1.0, -1.0);

        let (simplex, evolution) = triangle(a, b, c);
        let direction = search(evolution);

        assert_eq!(simplex.points(), &[a, c, b]);
        assert!(direction.z > 0.0);
    }

    #[test]
    fn test_triangle_edge_region_reduces_to_line() {
        // Origin lies past edge AC, outside the triangle's plane footprint
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(3.0, 1.0, 0.0);
        let c = Vec3::new(1.0, -1.0, 0.0);

        let (simplex, evolution) = triangle(a, b, c);
        let direction = search(evolution);

        assert_eq!(simplex.points(), &[a, c]);
        assert_relative_eq!(direction.dot(&(c - a)), 0.0);
        assert!(direction.x < 0.0);
    }

    #[test]
    fn test_tetrahedron_enclosing_origin() {
        // Faces ABC, ACD and ADB wind outward
        let a = Vec3::new(0.0, 0.0, 1.0);
        let b = Vec3::new(1.0, -1.0, -1.0);
        let c = Vec3::new(0.0, 1.0, -1.0);
        let d = Vec3::new(-1.0, -1.0, -1.0);

        let (_, evolution) = tetrahedron(a, b, c, d);
        assert_eq!(evolution, Evolution::Contains);
    }

    #[test]
    fn test_tetrahedron_outside_face_reduces_to_triangle() {
        // Whole tetrahedron shifted up so the origin sits below its base
        let lift = Vec3::new(0.0, 0.0, 3.0);
        let a = Vec3::new(0.0, 0.0, 1.0) + lift;
        let b = Vec3::new(1.0, -1.0, -1.0) + lift;
        let c = Vec3::new(0.0, 1.0, -1.0) + lift;
        let d = Vec3::new(-1.0, -1.0, -1.0) + lift;

        let (simplex, evolution) = tetrahedron(a, b, c, d);

        assert!(simplex.len() < 4);
        assert!(matches!(evolution, Evolution::Search { .. }));
    }

    #[test]
    fn test_edge_direction_is_measured_against_edge_size() {
        let ratio = |evolution: Evolution<Vec3>| match evolution {
            Evolution::Search { direction, scale } => direction.norm() / scale,
            Evolution::Contains => panic!("Expected a search direction"),
        };

        let (_, unit) = line(Vec3::new(1.0, 1.0, 0.0), Vec3::new(-1.0, 1.0, 0.0));
        let (_, small) = line(Vec3::new(1e-3, 1e-3, 0.0), Vec3::new(-1e-3, 1e-3, 0.0));

        // The raw direction shrinks a billionfold, the ratio does not
        assert_relative_eq!(ratio(unit), ratio(small), max_relative = 1e-4);
    }

    #[test]
    fn test_face_through_origin_is_reported() {
        // Base BCD lies in the z = 0 plane
        let grounded = Simplex3::from_points(&[
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
        ]);
        let enclosing = Simplex3::from_points(&[
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
        ]);

        assert!(face_normals_through_origin(&grounded).is_some());
        assert!(face_normals_through_origin(&enclosing).is_none());
    }
}
