// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use echo_math::{MathError, Vec2, Vec3, Vec4};

fn approx_eq3(a: Vec3, b: Vec3, tol: f32) {
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= tol, "index {i}: {a} vs {b}, diff={diff}, tol={tol}");
    }
}

#[test]
fn add_sub_mul_div_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!((a + b).to_array(), [5.0, 7.0, 9.0]);
    assert_eq!((b - a).to_array(), [3.0, 3.0, 3.0]);
    assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0]);
    assert_eq!((2.0 * a).to_array(), [2.0, 4.0, 6.0]);
    assert_eq!(a.scale(2.0), a * 2.0);
    assert_eq!((a / 2.0).to_array(), [0.5, 1.0, 1.5]);
    assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0]);
}

#[test]
fn scalar_divided_by_vector_divides_components() {
    let v = Vec4::new(2.0, 4.0, 8.0, 16.0);
    assert_eq!(2.0 / v, v / 2.0);
}

#[test]
fn compound_assignment_matches_binary_ops() {
    let a = Vec2::new(3.0, -1.0);
    let b = Vec2::new(0.5, 2.0);

    let mut v = a;
    v += b;
    assert_eq!(v, a + b);
    v -= b;
    assert_eq!(v, a);
    v *= 4.0;
    assert_eq!(v, a * 4.0);
    v /= 4.0;
    assert_eq!(v, a);
}

#[test]
fn aliased_views_share_storage() {
    let mut c = Vec3::new(0.1, 0.2, 0.3);
    c.set_r(0.9);
    assert_eq!(c.x(), 0.9);
    c.as_mut_array()[2] = 0.7;
    assert_eq!(c.b(), 0.7);
    c[1] = 0.5;
    assert_eq!(c.g(), 0.5);

    let mut size = Vec2::new(640.0, 480.0);
    assert_eq!(size.width(), size.x());
    size.set_height(720.0);
    assert_eq!(size.y(), 720.0);

    let mut rgba = Vec4::new(1.0, 0.5, 0.25, 0.0);
    rgba.set_a(1.0);
    assert_eq!(rgba.w(), 1.0);
    assert_eq!(rgba.as_array(), &[1.0, 0.5, 0.25, 1.0]);
}

#[test]
fn index_clamps_to_last_component() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v[10], 3.0);
    assert_eq!(v.component(99), 3.0);
    v[5] = 9.0;
    assert_eq!(v.to_array(), [1.0, 2.0, 9.0]);
    v.set_component(7, 4.0);
    assert_eq!(v.z(), 4.0);
}

#[test]
fn dot_and_cross_follow_right_handed_basis() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(a.dot(b), 32.0);
    assert_eq!(Vec3::dot(a, b), b.dot(a));

    assert_eq!(Vec3::right().cross(Vec3::up()), Vec3::forward());
    assert_eq!(Vec3::up().cross(Vec3::forward()), Vec3::right());
    assert_eq!(Vec3::forward().cross(Vec3::right()), Vec3::up());
    assert_eq!(Vec3::up().cross(Vec3::right()), Vec3::back());
}

#[test]
fn direction_constants() {
    assert_eq!(Vec3::down(), -Vec3::up());
    assert_eq!(Vec3::left(), -Vec3::right());
    assert_eq!(Vec3::back(), -Vec3::forward());
    assert_eq!(Vec2::left(), -Vec2::right());
    assert_eq!(Vec2::down().to_array(), [0.0, -1.0]);
    assert_eq!(Vec4::one().to_array(), [1.0; 4]);
    assert_eq!(Vec4::default(), Vec4::zero());
    assert_eq!(Vec3::default(), Vec3::ZERO);
}

#[test]
fn magnitude_and_normalize() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert_eq!(v.sqr_magnitude(), 25.0);
    assert_eq!(v.magnitude(), 5.0);

    let n = v.normalized();
    assert!((n.magnitude() - 1.0).abs() < 1e-3, "{n}");
    approx_eq3(n, Vec3::new(0.6, 0.8, 0.0), 1e-3);

    let mut m = Vec4::new(-2.0, 7.0, 0.5, 3.0);
    m.normalize();
    assert!((m.magnitude() - 1.0).abs() < 1e-3, "{m}");
}

#[test]
fn lerp_hits_endpoints() {
    let a = Vec3::new(1.0, -2.0, 3.0);
    let b = Vec3::new(-4.0, 8.0, 0.5);
    assert_eq!(Vec3::lerp(a, b, 0.0), a);
    assert_eq!(Vec3::lerp(a, b, 1.0), b);
    approx_eq3(Vec3::lerp(a, b, 0.5), Vec3::new(-1.5, 3.0, 1.75), 1e-6);
}

#[test]
fn inverse_lerp_projects_onto_segment() {
    let a = Vec3::ZERO;
    let b = Vec3::new(10.0, 0.0, 0.0);
    assert_eq!(Vec3::inverse_lerp(a, b, Vec3::new(5.0, 3.0, 0.0)), 0.5);
    assert_eq!(Vec3::inverse_lerp(a, b, Vec3::new(-5.0, 0.0, 0.0)), -0.5);
    assert_eq!(Vec3::inverse_lerp(a, a, b), 0.0);
    assert_eq!(Vec3::inverse_lerp(a, b, a), 0.0);
}

#[test]
fn vec2_det_and_perp_dot() {
    let a = Vec2::new(2.0, 3.0);
    let b = Vec2::new(4.0, 5.0);
    assert_eq!(a.det(b), -7.0);
    assert_eq!(a.perp_dot(b), -2.0);
    assert_eq!(Vec2::right().perp_dot(Vec2::up()), 1.0);
}

#[test]
fn widening_and_narrowing() {
    let v2 = Vec2::new(1.0, 2.0);
    assert_eq!(v2.to_vec3().to_array(), [1.0, 2.0, 0.0]);
    assert_eq!(Vec4::from(v2).to_array(), [1.0, 2.0, 0.0, 0.0]);

    let v3 = Vec3::from(v2);
    assert_eq!(v3.to_vec2(), v2);
    assert_eq!(Vec4::from(Vec3::ONE).to_array(), [1.0, 1.0, 1.0, 0.0]);
    assert_eq!(Vec3::ONE.extend(1.0), Vec4::ONE);

    let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v4.to_vec3().to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(v4.to_vec2(), v2);
}

#[test]
fn array_conversions() {
    let v = Vec3::from([1.0, 2.0, 3.0]);
    let arr: [f32; 3] = v.into();
    assert_eq!(arr, [1.0, 2.0, 3.0]);

    let data = [1.0_f32, 2.0, 3.0, 4.0];
    assert_eq!(Vec4::try_from(&data[..]), Ok(Vec4::new(1.0, 2.0, 3.0, 4.0)));
    assert_eq!(
        Vec3::try_from(&data[..2]),
        Err(MathError::LengthMismatch {
            expected: 3,
            actual: 2
        })
    );
    let err = Vec2::try_from(&data[..]).unwrap_err();
    assert_eq!(err.to_string(), "expected 2 components, got 4");
}

#[test]
fn display_lists_components() {
    assert_eq!(Vec3::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
    assert_eq!(Vec2::new(0.0, 1.0).to_string(), "(0, 1)");
}
