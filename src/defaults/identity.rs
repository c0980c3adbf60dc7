//! The identity preparator.

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::traits::Preparator;
use crate::Result;

/// Preparator that returns its input training data unchanged.
///
/// This is the default occupant of the preparator slot for engines whose
/// data source already emits algorithm-ready training data.
///
/// # Examples
///
/// ```rust
/// use enginekit::defaults::IdentityPreparator;
/// use enginekit::traits::Preparator;
///
/// let preparator = IdentityPreparator::new();
/// let prepared = tokio_test::block_on(preparator.prepare(vec![1, 2, 3])).unwrap();
/// assert_eq!(prepared, vec![1, 2, 3]);
/// ```
pub struct IdentityPreparator<TD> {
    _marker: PhantomData<fn() -> TD>,
}

impl<TD> IdentityPreparator<TD> {
    /// Create a new identity preparator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<TD> Default for IdentityPreparator<TD> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TD> std::fmt::Debug for IdentityPreparator<TD> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityPreparator").finish()
    }
}

#[async_trait]
impl<TD> Preparator<TD> for IdentityPreparator<TD>
where
    TD: Send + Sync + 'static,
{
    async fn prepare(&self, data: TD) -> Result<TD> {
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_input_unchanged() {
        let preparator = IdentityPreparator::new();
        let prepared =
            tokio_test::block_on(preparator.prepare(vec!["a".to_string(), "b".to_string()]))
                .unwrap();
        assert_eq!(prepared, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_debug_omits_role_type() {
        let preparator: IdentityPreparator<String> = IdentityPreparator::default();
        assert_eq!(format!("{preparator:?}"), "IdentityPreparator");
    }
}
