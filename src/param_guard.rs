use std::error::Error;

use crate::traits::Transformer;

/// A set of parameters whose values have not been checked for validity. A reference to the
/// checked parameters can only be obtained after checking has completed. If the
/// `Transformer` trait has been implemented on the checked parameters, it will also be
/// implemented on the unchecked parameters with the checking step done automatically.
///
/// The validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked parameters
    type Checked;
    /// Error type resulting from failed checking
    type Error: Error;

    /// Checks the parameters and returns a reference to the checked parameters if successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the parameters and returns the checked parameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Performs checking step and calls `transform` on the checked parameters. If checking
/// failed, the checking error is converted to the transformer's error type and returned.
pub trait TransformGuard: ParamGuard {}

impl<R, T, E, P> Transformer<R, Result<T, E>> for P
where
    P: TransformGuard,
    P::Checked: Transformer<R, Result<T, E>>,
    E: From<P::Error>,
{
    fn transform(&self, x: R) -> Result<T, E> {
        let checked = self.check_ref()?;
        checked.transform(x)
    }
}
