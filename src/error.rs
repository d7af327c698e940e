use thiserror::Error;

/// The errors raised by the engine core.
///
/// All of them indicate a caller programming error or a policy limit.
/// None is retryable; the caller is expected to discard the framework under
/// construction or, for [`CoreError::FrameworkTooLarge`], to degrade to the
/// heuristic mode provided by [`crate::debate::fallback`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An argument with the same label is already defined.
    #[error(r#"an argument labelled "{0}" is already defined"#)]
    DuplicateArgument(String),
    /// An attack refers to an argument that was never added.
    #[error(r#"no such argument: "{0}""#)]
    UnknownArgument(String),
    /// Complete-extension enumeration was requested on an oversized framework.
    #[error("framework has {n_arguments} arguments; complete extensions can be enumerated for at most {max} of them")]
    FrameworkTooLarge {
        /// The number of arguments in the framework.
        n_arguments: usize,
        /// The maximal number of arguments allowed for enumeration.
        max: usize,
    },
}
