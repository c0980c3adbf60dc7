//! The first-result serving strategy.

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::traits::Serving;
use crate::{Error, Result};

/// Serving strategy that returns the first present prediction.
///
/// Predictions are examined in algorithm registry insertion order and the
/// first `Some` value wins; the rest are ignored. If every slot is `None`
/// (or no algorithm produced anything at all), serving fails with
/// [`Error::Serving`], since there is no universally constructible "empty"
/// prediction to fall back to.
///
/// # Examples
///
/// ```rust
/// use enginekit::defaults::FirstServing;
/// use enginekit::traits::Serving;
///
/// let serving = FirstServing::new();
/// let predictions = vec![None, Some("X".to_string()), Some("Y".to_string())];
/// let served = tokio_test::block_on(serving.serve(&"q".to_string(), predictions)).unwrap();
/// assert_eq!(served, "X");
/// ```
pub struct FirstServing<Q, P> {
    _marker: PhantomData<fn() -> (Q, P)>,
}

impl<Q, P> FirstServing<Q, P> {
    /// Create a new first-result serving strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<Q, P> Default for FirstServing<Q, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, P> std::fmt::Debug for FirstServing<Q, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstServing").finish()
    }
}

#[async_trait]
impl<Q, P> Serving<Q, P> for FirstServing<Q, P>
where
    Q: Send + Sync + 'static,
    P: Send + Sync + 'static,
{
    async fn serve(&self, _query: &Q, predictions: Vec<Option<P>>) -> Result<P> {
        predictions
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| Error::serving("no prediction available"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(vec![None, Some("X"), Some("Y")], "X"; "skips a leading absent slot")]
    #[test_case(vec![Some("A"), Some("B")], "A"; "takes the first of two")]
    #[test_case(vec![None, None, Some("Z")], "Z"; "takes the only present slot")]
    fn test_first_present_wins(predictions: Vec<Option<&'static str>>, expected: &str) {
        let serving = FirstServing::new();
        let served = tokio_test::block_on(serving.serve(&"q", predictions)).unwrap();
        assert_eq!(served, expected);
    }

    #[test]
    fn test_no_predictions_is_an_error() {
        let serving: FirstServing<&str, &str> = FirstServing::new();
        let err = tokio_test::block_on(serving.serve(&"q", Vec::new())).unwrap_err();
        assert!(matches!(err, Error::Serving { .. }));
    }

    #[test]
    fn test_all_absent_is_an_error() {
        let serving: FirstServing<&str, &str> = FirstServing::new();
        let err = tokio_test::block_on(serving.serve(&"q", vec![None, None])).unwrap_err();
        assert!(matches!(err, Error::Serving { .. }));
    }
}
