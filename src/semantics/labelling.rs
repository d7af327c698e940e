use crate::aa::{AAFramework, Argument, LabelType};

/// The status given to an argument by a [`Labelling`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgLabel {
    /// The argument is accepted.
    In,
    /// The argument is rejected (some attacker is accepted).
    Out,
    /// The status of the argument is left undecided.
    Undec,
}

/// An IN/OUT/UNDEC assignment over the arguments of a framework.
///
/// A labelling is the equivalent, more operational representation of an
/// extension: the extension is exactly the set of IN arguments.
pub struct Labelling<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    labels: Vec<ArgLabel>,
}

impl<'a, T> Labelling<'a, T>
where
    T: LabelType,
{
    /// Builds a labelling in which every argument of the framework is undecided.
    pub fn new_all_undecided(af: &'a AAFramework<T>) -> Self {
        Labelling {
            af,
            labels: vec![ArgLabel::Undec; af.n_arguments()],
        }
    }

    /// Builds the labelling associated with an extension.
    ///
    /// The members of the extension are labelled IN, the arguments they
    /// attack are labelled OUT, and the remaining arguments stay UNDEC.
    pub fn from_extension(af: &'a AAFramework<T>, extension: &[&Argument<T>]) -> Self {
        let mut labelling = Self::new_all_undecided(af);
        for arg in extension {
            labelling.labels[arg.id()] = ArgLabel::In;
        }
        for attack in af.iter_attacks() {
            if labelling.labels[attack.attacker().id()] == ArgLabel::In {
                labelling.labels[attack.attacked().id()] = ArgLabel::Out;
            }
        }
        labelling
    }

    pub(crate) fn set_label_of_id(&mut self, id: usize, label: ArgLabel) {
        self.labels[id] = label;
    }

    /// Returns the label given to an argument.
    pub fn label_of(&self, arg: &Argument<T>) -> ArgLabel {
        self.labels[arg.id()]
    }

    pub(crate) fn label_of_id(&self, id: usize) -> ArgLabel {
        self.labels[id]
    }

    /// Returns the extension associated with this labelling, that is, its IN arguments.
    pub fn extension(&self) -> Vec<&'a Argument<T>> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, l)| **l == ArgLabel::In)
            .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
            .collect()
    }

    /// Checks the legality of this labelling.
    ///
    /// A labelling is legal iff an argument is IN exactly when all its
    /// attackers are OUT, and OUT exactly when at least one attacker is IN.
    /// Legal labellings are in one-to-one correspondence with complete
    /// extensions.
    pub fn is_legal(&self) -> bool {
        (0..self.labels.len()).all(|id| {
            let attackers = self.af.attacker_ids_of(id);
            let all_attackers_out = attackers.iter().all(|a| self.labels[*a] == ArgLabel::Out);
            let some_attacker_in = attackers.iter().any(|a| self.labels[*a] == ArgLabel::In);
            match self.labels[id] {
                ArgLabel::In => all_attackers_out,
                ArgLabel::Out => some_attacker_in,
                ArgLabel::Undec => !all_attackers_out && !some_attacker_in,
            }
        })
    }
}
