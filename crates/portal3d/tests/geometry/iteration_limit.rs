use portal3d::math::{Isometry, Vector};
use portal3d::query::details;
use portal3d::query::mpr::{MprOptions, MprResult};
use portal3d::shape::Cuboid;

#[test]
fn zero_iterations_never_report_contact() {
    let c = Cuboid::new(Vector::repeat(0.5));
    let pos12 = Isometry::translation(0.8, 0.1, 0.05);
    let options = MprOptions {
        max_iterations: 0,
        ..MprOptions::default()
    };

    assert_eq!(
        details::intersection_test_support_map_support_map_with_params(&pos12, &c, &c, &options),
        MprResult::Stalled
    );
    assert_eq!(
        details::contact_support_map_support_map_with_params(&pos12, &c, &c, &options),
        None
    );
}

#[test]
fn default_iteration_limit_is_enough() {
    let c = Cuboid::new(Vector::repeat(0.5));
    let pos12 = Isometry::translation(0.8, 0.1, 0.05);
    let options = MprOptions::default();

    assert_eq!(options.max_iterations, 64);
    assert_eq!(
        details::intersection_test_support_map_support_map_with_params(&pos12, &c, &c, &options),
        MprResult::Intersection
    );
}
