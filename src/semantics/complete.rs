use super::ExtensionSetComputer;
use crate::aa::{AAFramework, Argument, LabelType};
use crate::CoreError;

/// The default maximal number of arguments for which complete extensions are enumerated.
pub const DEFAULT_MAX_ENUMERABLE: usize = 32;

/// A solver dedicated to the complete semantics.
///
/// A set of arguments is a complete extension iff it is conflict-free and is a
/// fixpoint of the characteristic function of the framework, that is, it
/// contains exactly the arguments it defends.
/// The set of complete extensions always contains at least the grounded
/// extension, which is the intersection of all of them.
///
/// The solver enumerates ALL complete extensions by a backtracking search
/// over conflict-free subsets, which is exponential in the worst case.
/// It is intended for the small frameworks produced by counter-argument
/// validation; a hard cap on the number of arguments (defaulting to
/// [`DEFAULT_MAX_ENUMERABLE`]) makes oversized requests fail fast with
/// [`CoreError::FrameworkTooLarge`] instead of hanging.
/// Callers facing such frameworks should downgrade to the (polynomial)
/// grounded semantics.
///
/// # Example
///
/// ```
/// # use riposte::aa::{AAFramework, ArgumentSet};
/// # use riposte::semantics::{CompleteSemanticsSolver, ExtensionSetComputer};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// af.new_attack(&"b", &"a").unwrap();
/// let mut solver = CompleteSemanticsSolver::new(&af);
/// let extensions = solver.compute_extensions().unwrap();
/// assert_eq!(3, extensions.len()); // {}, {a} and {b}
/// ```
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    max_enumerable: usize,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the complete semantics, with the default size cap.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_max_enumerable(af, DEFAULT_MAX_ENUMERABLE)
    }

    /// Builds a new solver dedicated to the complete semantics, with the provided size cap.
    pub fn new_with_max_enumerable(af: &'a AAFramework<T>, max_enumerable: usize) -> Self {
        Self { af, max_enumerable }
    }

    /// Computes the image of a set of arguments by the characteristic function.
    ///
    /// An argument belongs to the image iff each of its attackers is attacked
    /// by a member of the input set.
    fn characteristic_function(&self, in_set: &[bool]) -> Vec<bool> {
        let mut attacked_by_set = vec![false; in_set.len()];
        for attack in self.af.iter_attacks() {
            if in_set[attack.attacker().id()] {
                attacked_by_set[attack.attacked().id()] = true;
            }
        }
        (0..in_set.len())
            .map(|id| {
                self.af
                    .attacker_ids_of(id)
                    .iter()
                    .all(|a| attacked_by_set[*a])
            })
            .collect()
    }

    fn conflicts_with_set(&self, candidate: usize, in_set: &[bool]) -> bool {
        if self.af.is_attack_by_ids(candidate, candidate) {
            return true;
        }
        in_set.iter().enumerate().any(|(member, is_in)| {
            *is_in
                && (self.af.is_attack_by_ids(member, candidate)
                    || self.af.is_attack_by_ids(candidate, member))
        })
    }

    fn search(
        &self,
        next_arg: usize,
        in_set: &mut Vec<bool>,
        extensions: &mut Vec<Vec<&'a Argument<T>>>,
    ) {
        if next_arg == in_set.len() {
            if self.characteristic_function(in_set) == *in_set {
                extensions.push(
                    in_set
                        .iter()
                        .enumerate()
                        .filter(|(_, is_in)| **is_in)
                        .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
                        .collect(),
                );
            }
            return;
        }
        self.search(next_arg + 1, in_set, extensions);
        if !self.conflicts_with_set(next_arg, in_set) {
            in_set[next_arg] = true;
            self.search(next_arg + 1, in_set, extensions);
            in_set[next_arg] = false;
        }
    }
}

impl<T> ExtensionSetComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> Result<Vec<Vec<&Argument<T>>>, CoreError> {
        let n_arguments = self.af.n_arguments();
        if n_arguments > self.max_enumerable {
            return Err(CoreError::FrameworkTooLarge {
                n_arguments,
                max: self.max_enumerable,
            });
        }
        let mut extensions = Vec::new();
        let mut in_set = vec![false; n_arguments];
        self.search(0, &mut in_set, &mut extensions);
        Ok(extensions)
    }
}
