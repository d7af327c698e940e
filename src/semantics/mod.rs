//! The native labelling/extension calculator for argumentation frameworks.
//!
//! Two solvers are provided: [`GroundedSemanticsSolver`] computes the unique
//! grounded extension in polynomial time, while [`CompleteSemanticsSolver`]
//! enumerates the full set of complete extensions of frameworks small enough
//! for the search to stay cheap.

mod complete;
pub use complete::CompleteSemanticsSolver;
pub use complete::DEFAULT_MAX_ENUMERABLE;

mod grounded;
pub use grounded::GroundedSemanticsSolver;

mod labelling;
pub use labelling::ArgLabel;
pub use labelling::Labelling;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionSetComputer;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;
