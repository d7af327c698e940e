use crate::aa::{Argument, LabelType};
use crate::CoreError;

/// A trait for solvers able to compute a single extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// In case an extension is found, it is returned as a vector of arguments.
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>>;
}

/// A trait for solvers able to compute the full set of extensions of a semantics.
pub trait ExtensionSetComputer<T>
where
    T: LabelType,
{
    /// Computes all the extensions of the underlying semantics.
    ///
    /// Solvers relying on an exhaustive search may enforce a size cap on the
    /// framework, in which case a [`CoreError::FrameworkTooLarge`] is returned
    /// instead of a result that would take exponential time to compute.
    ///
    /// No ordering is guaranteed among the returned extensions.
    fn compute_extensions(&mut self) -> Result<Vec<Vec<&Argument<T>>>, CoreError>;
}

/// A trait for solvers able to check the credulous acceptance of an argument,
/// that is, its acceptance by at least one extension.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Checks the credulous acceptance of an argument, and provides a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension accepting the argument.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}

/// A trait for solvers able to check the skeptical acceptance of an argument,
/// that is, its acceptance by every extension.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Checks the skeptical acceptance of an argument, and provides a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension rejecting the argument.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>);
}
