use super::*;
use crate::SearchDirection::{Decreasing, Increasing};
use ndarray::array;

#[test]
fn already_smooth_dims_pass_through() {
    let factors = FactorSet::default();
    let dims = array![8usize, 9, 10];
    let result = dims.closest_optimal(Increasing, &factors).unwrap();
    assert_eq!(result, array![8usize, 9, 10]);
}

#[test]
fn batch_preserves_order_and_length() {
    let factors = FactorSet::default();
    let dims = array![101usize, 1, 100];
    let result = dims.closest_optimal(Increasing, &factors).unwrap();
    assert_eq!(result, array![105usize, 2, 100]);
    assert_eq!(result.len(), dims.len());
}

#[test]
fn batch_equals_element_wise_scalar() {
    let factors = FactorSet::default();
    let dims = array![1usize, 7, 11, 101, 480, 1013];
    for direction in [Increasing, Decreasing] {
        let batch = dims
            .closest_optimal_with(direction, &factors, |_| {})
            .unwrap();
        for (i, (&input, &output)) in dims.iter().zip(batch.iter()).enumerate() {
            let scalar = crate::nearest_smooth_with(input, direction, &factors, |_| {});
            assert_eq!(
                output, scalar,
                "Mismatch at index {}: batch={}, scalar={}",
                i, output, scalar
            );
        }
    }
}

#[test]
fn generic_elements_round_trip() {
    let factors = FactorSet::default();
    let dims = array![100i32, 101];
    let result = dims.closest_optimal(Increasing, &factors).unwrap();
    assert_eq!(result, array![100i32, 105]);

    let dims = array![13u64, 17, 31];
    let result = dims.closest_optimal(Increasing, &factors).unwrap();
    assert_eq!(result, array![14u64, 18, 32]);
}

#[test]
fn negative_dimension_aborts_the_whole_batch() {
    let factors = FactorSet::default();
    let dims = array![10i64, -3, 100];
    let err = dims.closest_optimal(Increasing, &factors).unwrap_err();
    assert_eq!(
        err,
        FftDimsError::InvalidDimension {
            value: "-3".to_string(),
        }
    );
    assert!(err.to_string().contains("-3"));
}

#[test]
fn result_too_large_for_element_type_is_an_error() {
    let factors = FactorSet::default();
    // next smooth value above 127 is 128, which i8 cannot hold
    let dims = array![127i8];
    let err = dims.closest_optimal(Increasing, &factors).unwrap_err();
    assert_eq!(err, FftDimsError::ResultOutOfRange { value: 128 });
}

#[test]
fn batch_observer_sees_each_clamped_element_in_order() {
    let factors = FactorSet::default();
    let dims = array![1usize, 8, 1];
    let mut warnings = Vec::new();
    let result = dims
        .closest_optimal_with(Decreasing, &factors, |w| warnings.push(w))
        .unwrap();
    assert_eq!(result, array![2usize, 8, 2]);
    assert_eq!(
        warnings,
        vec![
            BoundaryWarning {
                requested: 1,
                clamped_to: 2,
            };
            2
        ]
    );
}

#[test]
fn shape_arrays_are_searched_per_axis() {
    let factors = FactorSet::default();
    assert_eq!(
        closest_optimal_dims(&[13, 17, 31], Increasing, &factors),
        [14, 18, 32]
    );
    assert_eq!(
        closest_optimal_dims(&[13, 17, 31], Decreasing, &factors),
        [12, 16, 30]
    );
}

#[test]
fn scalar_entry_point_scenarios() {
    let factors = FactorSet::default();
    assert_eq!(closest_optimal(100, Increasing, &factors), 100);
    assert_eq!(closest_optimal(101, Increasing, &factors), 105);
    assert_eq!(closest_optimal(1, Increasing, &factors), 2);
    assert_eq!(closest_optimal(1, Decreasing, &factors), 2);
}

#[test]
fn empty_batch_is_fine() {
    let factors = FactorSet::default();
    let dims: Array1<usize> = array![];
    let result = dims.closest_optimal(Increasing, &factors).unwrap();
    assert!(result.is_empty());
}
