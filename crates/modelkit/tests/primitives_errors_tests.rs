#![cfg(feature = "dev")]
//! Tests for error formatting.
//!
//! These tests verify that every error variant renders a message carrying
//! the values needed to diagnose the failure.
//!
//! ## Test Organization
//!
//! 1. **Display** - Message content per variant
//! 2. **Error Trait** - Interop with `std::error::Error`

use modelkit::internals::primitives::errors::ModelKitError;
use modelkit::internals::primitives::grow_array::GrowArrayI32;

// ============================================================================
// Display Tests
// ============================================================================

/// Test bounds errors mention the index and length.
#[test]
fn test_display_index_out_of_bounds() {
    let err = ModelKitError::IndexOutOfBounds { index: 7, len: 3 };

    assert_eq!(err.to_string(), "Index out of bounds: index = 7, len = 3");
}

/// Test range errors mention the range and length.
#[test]
fn test_display_invalid_range() {
    let err = ModelKitError::InvalidRange {
        first: 4,
        last: 2,
        len: 10,
    };
    let msg = err.to_string();

    assert!(msg.contains("[4, 2]"), "Message should show the range: {msg}");
    assert!(msg.contains("10"), "Message should show the length: {msg}");
}

/// Test remaining variants render distinct messages.
#[test]
fn test_display_other_variants() {
    assert_eq!(
        ModelKitError::SourceOutOfBounds { end: 5, len: 4 }.to_string(),
        "Source out of bounds: end 5 exceeds source length 4"
    );
    assert_eq!(ModelKitError::EmptyContainer.to_string(), "Container is empty");
    assert!(ModelKitError::InvalidFraction(1.5).to_string().contains("1.5"));
    assert!(ModelKitError::DuplicateIndex(3).to_string().contains('3'));
    assert_eq!(
        ModelKitError::NoModel.to_string(),
        "No model has been fitted yet"
    );
}

// ============================================================================
// Error Trait Tests
// ============================================================================

/// Test errors propagate through `Box<dyn Error>` with `?`.
#[test]
fn test_error_trait_propagation() {
    fn first_element(array: &GrowArrayI32) -> Result<i32, Box<dyn std::error::Error>> {
        Ok(array.get(0)?)
    }

    assert_eq!(first_element(&GrowArrayI32::from_slice(&[9])).unwrap(), 9);

    let err = first_element(&GrowArrayI32::new()).unwrap_err();
    assert_eq!(err.to_string(), "Index out of bounds: index = 0, len = 0");
}
