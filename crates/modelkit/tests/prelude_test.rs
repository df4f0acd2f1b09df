//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed to use grow
//! arrays and implement matchers without reaching into internal modules.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Aliases** - One alias per common element kind

use modelkit::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the container and error type are exported.
#[test]
fn test_prelude_grow_array() {
    let mut array: GrowArray<i64> = GrowArray::new();
    array.push(3);

    let err: ModelKitError = array.get(1).unwrap_err();
    assert!(matches!(err, ModelKitError::IndexOutOfBounds { .. }));
}

/// Test that the fitting types are exported.
#[test]
fn test_prelude_fitting() {
    struct Echo(Option<MatchSet<u8, u8>>);

    impl ModelMatcher<u8> for Echo {
        type Model = u8;

        fn process(&mut self, data_set: &[u8]) -> bool {
            if !self.has_minimum(data_set) {
                return false;
            }
            self.0 = MatchSet::select(data_set[0], data_set, &[0], 0.0).ok();
            self.0.is_some()
        }

        fn match_set(&self) -> Option<&MatchSet<u8, u8>> {
            self.0.as_ref()
        }

        fn minimum_size(&self) -> usize {
            1
        }
    }

    let mut echo = Echo(None);
    assert!(!echo.process(&[]));
    assert!(echo.process(&[42, 7]));
    assert_eq!(echo.model(), Some(&42));
    assert_eq!(echo.input_index(0), Ok(0));
}

// ============================================================================
// Type Alias Tests
// ============================================================================

/// Test that each alias names a usable instance.
#[test]
fn test_prelude_aliases() {
    assert_eq!(GrowArrayI8::zeros(2).len(), 2);
    assert_eq!(GrowArrayI16::zeros(2).len(), 2);
    assert_eq!(GrowArrayI32::zeros(2).len(), 2);
    assert_eq!(GrowArrayI64::zeros(2).len(), 2);
    assert_eq!(GrowArrayU8::zeros(2).len(), 2);
    assert_eq!(GrowArrayU16::zeros(2).len(), 2);
    assert_eq!(GrowArrayU32::zeros(2).len(), 2);
    assert_eq!(GrowArrayU64::zeros(2).len(), 2);
    assert_eq!(GrowArrayUsize::zeros(2).len(), 2);
    assert_eq!(GrowArrayF32::zeros(2).len(), 2);
    assert_eq!(GrowArrayF64::zeros(2).len(), 2);
}

/// Test that the element bound is usable in user generics.
#[test]
fn test_prelude_element_bound() {
    fn largest<T: Element>(values: &[T]) -> Option<T> {
        let mut array = GrowArray::from_slice(values);
        array.sort();
        array.pop().ok()
    }

    assert_eq!(largest(&[3u16, 9, 1]), Some(9));
    assert_eq!(largest::<f32>(&[]), None);
}
