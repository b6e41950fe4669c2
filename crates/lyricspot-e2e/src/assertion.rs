//! Text assertions.
//!
//! Scenario assertions compare expected literals against rendered DOM text
//! and fail with both sides in the message, so a failing run reports exactly
//! what differed.

use crate::result::{E2eError, E2eResult};

/// Assert observed text equals the expected literal.
pub fn expect_eq(expected: &str, actual: &str) -> E2eResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(E2eError::Assertion {
            message: format!("expected text '{expected}' but got '{actual}'"),
        })
    }
}

/// Assert observed text contains the expected substring.
pub fn expect_contains(expected: &str, actual: &str) -> E2eResult<()> {
    if actual.contains(expected) {
        Ok(())
    } else {
        Err(E2eError::Assertion {
            message: format!("expected text to contain '{expected}' but got '{actual}'"),
        })
    }
}

/// Assert a list of observed texts contains the expected literal as an item.
pub fn expect_contains_item<S: AsRef<str>>(expected: &str, items: &[S]) -> E2eResult<()> {
    if items.iter().any(|item| item.as_ref() == expected) {
        Ok(())
    } else {
        let observed: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
        Err(E2eError::Assertion {
            message: format!("expected '{expected}' in {observed:?}"),
        })
    }
}
