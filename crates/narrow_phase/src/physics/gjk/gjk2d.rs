//! GJK over planar Minkowski differences
//!
//! Same outer loop as the 3D engine with a triangle cap. Perpendiculars come
//! from the planar triple product instead of chained cross products.
//!
//! The segment step has no "origin behind A" branch: it always searches
//! perpendicular to AB. From the main loop the origin is always between the
//! two points when a segment forms, and the triangle step only hands over a
//! segment whose outward side faces the origin, so the branch is never needed
//! for convex input. Tests pin this behaviour down.

use log::{debug, trace};

use crate::core::config::GjkConfig;
use crate::foundation::math::{utils, Vec2};
use crate::physics::collision::{support_2d, Collider, CollisionError};
use super::simplex::Simplex;
use super::{axes, on_surface, screen_direction, Evolution, Heading};

/// Triangle-capped simplex
pub(crate) type Simplex2 = Simplex<Vec2, 3>;

/// Run the 2D engine; see [`crate::physics::collides_2d`]
pub(crate) fn collides<A, B>(a: &A, b: &B, config: &GjkConfig) -> Result<bool, CollisionError>
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    let minkowski = |direction: &Vec2| support_2d(a, b, direction);

    let seed = minkowski(&Vec2::x());
    if !utils::is_finite2(&seed) {
        return Err(CollisionError::degeneracy(0, format!("seed support point {seed:?} is not finite")));
    }

    let mut simplex = Simplex2::single(seed);
    let mut direction = match screen_direction(-seed, seed.norm(), simplex.len(), 0, config)? {
        Heading::Search(direction) => direction,
        Heading::Touching => return Ok(settle_on_feature(&minkowski, &simplex)),
    };

    for iteration in 1..=config.max_iterations {
        let point = minkowski(&direction);
        if !utils::is_finite2(&point) {
            return Err(CollisionError::degeneracy(
                iteration,
                format!("support point {point:?} is not finite"),
            ));
        }

        let progress = point.dot(&direction);
        trace!(
            "GJK-2D iteration {}: {} point(s), support {:?}, progress {}",
            iteration,
            simplex.len(),
            point,
            progress
        );

        if progress <= 0.0 {
            debug!("GJK-2D: separated after {} iteration(s)", iteration);
            return Ok(false);
        }

        simplex.push_front(point);
        let (reduced, evolution) = next_simplex(&simplex);
        simplex = reduced;

        direction = match evolution {
            Evolution::Contains => {
                debug!("GJK-2D: origin enclosed after {} iteration(s)", iteration);
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

    log::warn!("GJK-2D: no verdict within {} iterations", config.max_iterations);
    Err(CollisionError::IterationLimit { max_iterations: config.max_iterations })
}

fn perpendicular(edge: &Vec2) -> Vec2 {
    Vec2::new(-edge.y, edge.x)
}

/// Verdict once the origin lies on the retained point or segment
fn settle_on_feature(minkowski: impl Fn(&Vec2) -> Vec2, simplex: &Simplex2) -> bool {
    let across = match simplex.points() {
        &[a, b] => Some(perpendicular(&(b - a))),
        _ => None,
    };

    if on_surface(minkowski, axes::<2>().chain(across)) {
        debug!("GJK-2D: origin on the outline of the difference, shapes only touch");
        false
    } else {
        debug!("GJK-2D: difference is degenerate around the origin");
        true
    }
}

/// Verdict once a triangle encloses the origin
fn settle_enclosed(minkowski: impl Fn(&Vec2) -> Vec2, simplex: &Simplex2) -> bool {
    match edge_normals_through_origin(simplex) {
        Some(normals) if on_surface(minkowski, axes::<2>().chain(normals)) => {
            debug!("GJK-2D: origin on an edge shared with the outline, shapes only touch");
            false
        }
        _ => true,
    }
}

/// Normals of all three edges, when the origin lies on the line of any of them
#[allow(clippy::float_cmp)]
fn edge_normals_through_origin(simplex: &Simplex2) -> Option<[Vec2; 3]> {
    let &[a, b, c] = simplex.points() else {
        return None;
    };

    let edges = [(a, b), (a, c), (b, c)];
    let normals = edges.map(|(p, q)| perpendicular(&(q - p)));
    let through_origin = edges.iter().zip(&normals).any(|((p, _), normal)| normal.dot(p) == 0.0);

    through_origin.then_some(normals)
}

/// Reduce a freshly grown simplex and pick the next search direction
pub(crate) fn next_simplex(simplex: &Simplex2) -> (Simplex2, Evolution<Vec2>) {
    match simplex.points() {
        &[a, b] => line(a, b),
        &[a, b, c] => triangle(a, b, c),
        points => unreachable!("reduction runs after a push, got {} point(s)", points.len()),
    }
}

fn same_direction(direction: &Vec2, ao: &Vec2) -> bool {
    direction.dot(ao) > 0.0
}

fn line(a: Vec2, b: Vec2) -> (Simplex2, Evolution<Vec2>) {
    let ab = b - a;
    let ao = -a;

    (
        Simplex2::from_points(&[a, b]),
        Evolution::Search {
            direction: utils::triple_product_2d(&ab, &ao, &ab),
            scale: ab.norm_squared() * ao.norm(),
        },
    )
}

fn triangle(a: Vec2, b: Vec2, c: Vec2) -> (Simplex2, Evolution<Vec2>) {
    let ab = b - a;
    let ac = c - a;
    let ao = -a;

    // Edge normals pointing away from the opposite vertex
    let ab_perp = utils::triple_product_2d(&ac, &ab, &ab);
    let ac_perp = utils::triple_product_2d(&ab, &ac, &ac);

    if same_direction(&ab_perp, &ao) {
        return line(a, b);
    }
    if same_direction(&ac_perp, &ao) {
        return line(a, c);
    }

    (Simplex2::from_points(&[a, b, c]), Evolution::Contains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn search(evolution: Evolution<Vec2>) -> Vec2 {
        match evolution {
            Evolution::Search { direction, .. } => direction,
            Evolution::Contains => panic!("Expected a search direction"),
        }
    }

    #[test]
    fn test_line_searches_perpendicular_toward_origin() {
        let a = Vec2::new(-1.0, 1.0);
        let b = Vec2::new(1.0, 1.0);

        let (simplex, evolution) = line(a, b);
        let direction = search(evolution);

        assert_eq!(simplex.points(), &[a, b]);
        assert_relative_eq!(direction.dot(&(b - a)), 0.0);
        assert!(direction.y < 0.0);
    }

    #[test]
    fn test_line_keeps_both_points_even_with_origin_behind_a() {
        // The 3D segment step would drop B here; the planar one does not
        let a = Vec2::new(1.0, 0.5);
        let b = Vec2::new(2.0, 0.5);

        let (simplex, evolution) = line(a, b);
        let direction = search(evolution);

        assert_eq!(simplex.len(), 2);
        assert_relative_eq!(direction.dot(&(b - a)), 0.0);
        assert!(direction.y < 0.0);
    }

    #[test]
    fn test_line_collinear_origin_gives_zero_direction() {
        let (_, evolution) = line(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        assert_relative_eq!(search(evolution), Vec2::zeros());
    }

    #[test]
    fn test_triangle_enclosing_origin() {
        let (_, evolution) = triangle(Vec2::new(0.0, 1.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0));
        assert_eq!(evolution, Evolution::Contains);
    }

    #[test]
    fn test_triangle_outside_ab_drops_c() {
        // Origin lies beyond edge AB
        let a = Vec2::new(0.0, 1.0);
        let b = Vec2::new(2.0, 1.0);
        let c = Vec2::new(1.0, 3.0);

        let (simplex, evolution) = triangle(a, b, c);

        assert_eq!(simplex.points(), &[a, b]);
        assert!(search(evolution).y < 0.0);
    }

    #[test]
    fn test_triangle_outside_ac_drops_b() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(3.0, 1.0);
        let c = Vec2::new(1.0, 2.0);

        let (simplex, evolution) = triangle(a, b, c);

        assert_eq!(simplex.points(), &[a, c]);
        assert!(search(evolution).x < 0.0);
    }

    #[test]
    fn test_edge_on_origin_is_reported() {
        // Edge BC runs along the x axis through the origin
        let on_edge = Simplex2::from_points(&[Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)]);
        let inside = Simplex2::from_points(&[Vec2::new(0.0, 1.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0)]);

        assert!(edge_normals_through_origin(&on_edge).is_some());
        assert!(edge_normals_through_origin(&inside).is_none());
    }
}
