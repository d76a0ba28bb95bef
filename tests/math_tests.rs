use soft_physics::math::{approx_eq, approx_zero, Axis, AxisNormalization, Vector2};
use approx::assert_relative_eq;
use nalgebra as na;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector2::new(5.0, 8.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector2::new(3.0, 4.0));

    // Scalar multiplication
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));

    // Dot and cross products
    assert_eq!(v1.dot(&v2), 16.0);
    assert_eq!(v1.cross(&v2), 1.0 * 6.0 - 2.0 * 4.0);

    // Length
    assert_relative_eq!(diff.length(), 5.0);
    assert_relative_eq!(v1.distance(&v2), 5.0);

    // Negation and perpendicular
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));
    assert_eq!(v1.perpendicular().dot(&v1), 0.0);
}

#[test]
fn test_assign_operators() {
    let mut v = Vector2::new(1.0, 1.0);
    v += Vector2::new(2.0, 3.0);
    v -= Vector2::new(1.0, 1.0);
    v *= 2.0;
    v /= 4.0;
    assert_eq!(v, Vector2::new(1.0, 1.5));
}

#[test]
fn test_component_sum_normalization() {
    // Positive quadrant: same direction, shorter than unit length
    let v = Vector2::new(3.0, 4.0);
    let n = v.vnormal().unwrap();
    assert_relative_eq!(n, Vector2::new(3.0 / 7.0, 4.0 / 7.0));
    assert_relative_eq!(n.x + n.y, 1.0);
    assert!(n.length() < 1.0);

    // Mixed signs: longer than unit length
    let n = Vector2::new(3.0, -1.0).vnormal().unwrap();
    assert_relative_eq!(n, Vector2::new(1.5, -0.5));

    // Negative sum flips the direction
    let n = Vector2::new(-3.0, -4.0).vnormal().unwrap();
    assert_relative_eq!(n, Vector2::new(3.0 / 7.0, 4.0 / 7.0));

    // Zero sum cannot be normalized this way
    assert!(Vector2::new(2.0, -2.0).vnormal().is_none());
}

#[test]
fn test_axis_normalization_modes() {
    let v = Vector2::new(3.0, 4.0);

    let sum = AxisNormalization::ComponentSum.direction(v).unwrap();
    assert_relative_eq!(sum, Vector2::new(3.0 / 7.0, 4.0 / 7.0));

    let unit = AxisNormalization::Euclidean.direction(v).unwrap();
    assert_relative_eq!(unit, Vector2::new(0.6, 0.8));

    // Zero component sum falls back to the unit vector
    let diagonal = AxisNormalization::ComponentSum
        .direction(Vector2::new(2.0, -2.0))
        .unwrap();
    assert_relative_eq!(diagonal.length(), 1.0, epsilon = 1e-12);

    assert_eq!(AxisNormalization::default(), AxisNormalization::ComponentSum);
}

#[test]
fn test_nalgebra_conversion() {
    let v = Vector2::new(1.5, -2.5);
    let na_v = v.to_nalgebra();
    assert_eq!(na_v, na::Vector2::new(1.5, -2.5));
    assert_eq!(Vector2::from_nalgebra(&na_v), v);
    assert_eq!(Vector2::from(na_v), v);
}

#[test]
fn test_conversions_and_axes() {
    let v: Vector2 = [1.0, 2.0].into();
    assert_eq!(v, Vector2::from((1.0, 2.0)));
    let array: [f64; 2] = v.into();
    assert_eq!(array, [1.0, 2.0]);
    assert_eq!(v[Axis::X], 1.0);
    assert_eq!(v[Axis::Y], 2.0);
    assert_eq!(format!("{}", v), "(1, 2)");
}

#[test]
fn test_helpers() {
    assert!(approx_eq(0.1 + 0.2, 0.3));
    assert!(approx_zero(1e-12));
    assert!(!approx_zero(1e-3));
    assert!(Vector2::new(f64::NAN, 0.0).is_finite() == false);
    assert!(Vector2::new(0.0, 1e-12).is_zero());
    assert_relative_eq!(
        Vector2::zero().lerp(&Vector2::new(10.0, 10.0), 0.5),
        Vector2::new(5.0, 5.0)
    );
}
