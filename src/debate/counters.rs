use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The types of counter-arguments the engine knows how to model.
///
/// The type of a counter-argument drives the attack pattern used when
/// building its attack graph; see
/// [`AttackGraphBuilder`](crate::debate::AttackGraphBuilder).
///
/// The string form of each variant is its snake-case name, e.g.
/// `direct_refutation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum CounterArgumentType {
    /// A refutation of the argument as a whole.
    DirectRefutation,
    /// A counter-example to a generalization made by the argument.
    CounterExample,
    /// An alternative explanation competing for the argument's conclusion.
    AlternativeExplanation,
    /// A challenge of one of the argument's premises.
    PremiseChallenge,
    /// A derivation of an absurdity from the argument.
    ReductioAdAbsurdum,
}

/// The strength of an argument, as declared by the caller.
///
/// The engine core never reads it; it only feeds the heuristic degraded mode
/// of [`crate::debate::fallback`].
/// Variants are ordered from the weakest to the strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ArgumentStrength {
    /// A weak argument.
    Weak,
    /// A moderately convincing argument.
    Moderate,
    /// A strong argument.
    Strong,
    /// A decisive argument.
    Decisive,
}
