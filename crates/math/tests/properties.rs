use approx::{assert_abs_diff_eq, assert_relative_eq};
use math::{
    ops::{
        angle, cross_product, dot_product, magnitude, projection, scale, subtract, sum,
        unit_vector, vector_area, vector_component,
    },
    Vector2, Vector3,
};
use proptest::prelude::*;

const RANGE: f64 = 100.0;

fn vector2() -> impl Strategy<Value = Vector2> {
    (-RANGE..RANGE, -RANGE..RANGE).prop_map(|(x, y)| Vector2::new(x, y))
}

fn vector3() -> impl Strategy<Value = Vector3> {
    (-RANGE..RANGE, -RANGE..RANGE, -RANGE..RANGE).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

proptest! {
    #[test]
    fn test_subtract_undoes_sum(v in vector3(), w in vector3()) {
        let back = subtract(&sum(&v, &w), &w);
        assert_abs_diff_eq!(back.x(), v.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(back.y(), v.y(), epsilon = 1e-12);
        assert_abs_diff_eq!(back.z(), v.z(), epsilon = 1e-12);
    }

    #[test]
    fn test_subtract_undoes_sum_2d(v in vector2(), w in vector2()) {
        let back = subtract(&sum(&v, &w), &w);
        assert_abs_diff_eq!(back.x(), v.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(back.y(), v.y(), epsilon = 1e-12);
    }

    #[test]
    fn test_scale_scales_magnitude(v in vector3(), k in -RANGE..RANGE) {
        assert_relative_eq!(
            magnitude(&scale(&v, k)),
            k.abs() * magnitude(&v),
            epsilon = 1e-9,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_unit_vector_has_unit_length(v in vector3()) {
        prop_assume!(magnitude(&v) > 1e-6);
        assert_relative_eq!(magnitude(&unit_vector(&v)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_vector_has_unit_length_2d(v in vector2()) {
        prop_assume!(magnitude(&v) > 1e-6);
        assert_relative_eq!(magnitude(&unit_vector(&v)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cross_product_is_orthogonal(v1 in vector3(), v2 in vector3()) {
        let c = cross_product(&v1, &v2);
        assert_abs_diff_eq!(dot_product(&c, &v1), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(dot_product(&c, &v2), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_with_self_is_zero(v in vector3()) {
        prop_assume!(magnitude(&v) > 1e-3);
        assert_abs_diff_eq!(angle(&v, &v), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_angle_is_symmetric_and_bounded(v1 in vector2(), v2 in vector2()) {
        let a = angle(&v1, &v2);
        // to_degrees can land a rounding step past 180 for antiparallel inputs.
        prop_assert!(a >= 0.0 && a <= 180.0 + 1e-9);
        assert_relative_eq!(a, angle(&v2, &v1), epsilon = 1e-9);
    }

    #[test]
    fn test_angle_with_zero_vector_is_zero(v in vector3()) {
        prop_assert_eq!(angle(&v, &Vector3::zero()), 0.0);
        prop_assert_eq!(angle(&Vector3::zero(), &v), 0.0);
    }

    #[test]
    fn test_area_2d_matches_embedded_3d(v1 in vector2(), v2 in vector2()) {
        let embedded1 = Vector3::new(v1.x(), v1.y(), 0.0);
        let embedded2 = Vector3::new(v2.x(), v2.y(), 0.0);
        assert_relative_eq!(
            vector_area(&v1, &v2),
            vector_area(&embedded1, &embedded2),
            epsilon = 1e-9,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_projection_length_is_vector_component(v1 in vector3(), v2 in vector3()) {
        prop_assume!(magnitude(&v2) > 1e-3);
        assert_relative_eq!(
            magnitude(&projection(&v1, &v2)),
            vector_component(&v1, &v2).abs(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_operators_agree_with_ops(v in vector2(), w in vector2(), k in -RANGE..RANGE) {
        prop_assert_eq!(v + w, sum(&v, &w));
        prop_assert_eq!(v - w, subtract(&v, &w));
        prop_assert_eq!(v * k, scale(&v, k));
    }
}
