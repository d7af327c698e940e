use super::{
    ArgLabel, CredulousAcceptanceComputer, Labelling, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType};

/// A solver dedicated to the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension, that is,
/// the least fixpoint of the characteristic function of the framework starting
/// from the empty set.
/// It is computed in time polynomial in the size of the framework, by
/// propagation: arguments without live attackers are accepted, the arguments
/// they attack are rejected, and rejections may in turn free new arguments.
///
/// This solver implements [SingleExtensionComputer] and both
/// [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer] interfaces.
/// In all three cases the computation resumes to the computation of the
/// grounded extension, in which credulous and skeptical acceptance coincide.
///
/// # Example
///
/// ```
/// # use riposte::aa::{AAFramework, ArgumentSet};
/// # use riposte::semantics::{GroundedSemanticsSolver, SingleExtensionComputer};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let mut solver = GroundedSemanticsSolver::new(&af);
/// let ext = solver.compute_one_extension().unwrap();
/// assert_eq!(1, ext.len());
/// assert_eq!(&"a", ext[0].label());
/// ```
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Computes the grounded labelling of the framework.
    ///
    /// The IN arguments form the grounded extension, the OUT arguments are
    /// the ones it attacks, and the remaining arguments are UNDEC.
    pub fn compute_labelling(&self) -> Labelling<'a, T> {
        let af = self.af;
        let n = af.n_arguments();
        let mut labelling = Labelling::new_all_undecided(af);
        let mut attacks_from: Vec<Vec<usize>> = vec![vec![]; n];
        for attack in af.iter_attacks() {
            attacks_from[attack.attacker().id()].push(attack.attacked().id());
        }
        // counts the attackers not rejected yet; an argument is accepted as
        // soon as its counter reaches zero
        let mut n_live_attackers: Vec<usize> =
            (0..n).map(|id| af.attacker_ids_of(id).len()).collect();
        let mut accepted: Vec<usize> = (0..n).filter(|id| n_live_attackers[*id] == 0).collect();
        accepted
            .iter()
            .for_each(|id| labelling.set_label_of_id(*id, ArgLabel::In));
        let mut n_processed = 0;
        while n_processed < accepted.len() {
            let in_arg = accepted[n_processed];
            for &defeated in &attacks_from[in_arg] {
                if labelling.label_of_id(defeated) != ArgLabel::Undec {
                    continue;
                }
                labelling.set_label_of_id(defeated, ArgLabel::Out);
                for &freed in &attacks_from[defeated] {
                    n_live_attackers[freed] -= 1;
                    if n_live_attackers[freed] == 0 && labelling.label_of_id(freed) == ArgLabel::Undec
                    {
                        labelling.set_label_of_id(freed, ArgLabel::In);
                        accepted.push(freed);
                    }
                }
            }
            n_processed += 1;
        }
        labelling
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(self.compute_labelling().extension())
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_credulously_accepted_with_certificate(arg).0
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let ext = self.compute_labelling().extension();
        if ext.contains(&arg) {
            (true, Some(ext))
        } else {
            (false, None)
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_labelling().label_of(arg) == ArgLabel::In
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        let ext = self.compute_labelling().extension();
        if ext.contains(&arg) {
            (true, None)
        } else {
            (false, Some(ext))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn af_with_attacks(
        labels: &[&'static str],
        attacks: &[(&'static str, &'static str)],
    ) -> AAFramework<&'static str> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(labels));
        for (from, to) in attacks {
            af.new_attack(from, to).unwrap();
        }
        af
    }

    fn sorted_grounded(af: &AAFramework<&'static str>) -> Vec<&'static str> {
        let mut ext = GroundedSemanticsSolver::new(af)
            .compute_one_extension()
            .unwrap()
            .iter()
            .map(|a| *a.label())
            .collect::<Vec<_>>();
        ext.sort_unstable();
        ext
    }

    #[test]
    fn test_grounded_of_chain() {
        let af = af_with_attacks(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("b", "d"),
                ("c", "e"),
                ("d", "e"),
                ("e", "f"),
            ],
        );
        assert_eq!(vec!["a", "c", "d", "f"], sorted_grounded(&af));
    }

    #[test]
    fn test_grounded_of_chain_with_root_attacker() {
        let af = af_with_attacks(
            &["x", "a", "b", "c", "d", "e", "f"],
            &[
                ("x", "a"),
                ("a", "b"),
                ("b", "c"),
                ("b", "d"),
                ("c", "e"),
                ("d", "e"),
                ("e", "f"),
            ],
        );
        assert_eq!(vec!["b", "e", "x"], sorted_grounded(&af));
    }

    #[test]
    fn test_grounded_of_empty_framework() {
        let af = af_with_attacks(&[], &[]);
        assert!(sorted_grounded(&af).is_empty());
    }

    #[test]
    fn test_grounded_of_isolated_argument() {
        let af = af_with_attacks(&["a"], &[]);
        assert_eq!(vec!["a"], sorted_grounded(&af));
    }

    #[test]
    fn test_grounded_of_mutual_attack_is_empty() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert!(sorted_grounded(&af).is_empty());
    }

    #[test]
    fn test_grounded_of_self_attacker() {
        let af = af_with_attacks(&["a", "b"], &[("a", "a")]);
        assert_eq!(vec!["b"], sorted_grounded(&af));
    }

    #[test]
    fn test_grounded_is_deterministic() {
        let af = af_with_attacks(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(sorted_grounded(&af), sorted_grounded(&af));
    }

    #[test]
    fn test_grounded_labelling_is_legal() {
        let af = af_with_attacks(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let labelling = GroundedSemanticsSolver::new(&af).compute_labelling();
        assert!(labelling.is_legal());
    }

    #[test]
    fn test_acceptance() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b")]);
        let args = af.argument_set();
        let mut solver = GroundedSemanticsSolver::new(&af);
        assert!(solver.is_credulously_accepted(args.get_argument(&"a").unwrap()));
        assert!(!solver.is_credulously_accepted(args.get_argument(&"b").unwrap()));
        assert!(solver.is_skeptically_accepted(args.get_argument(&"a").unwrap()));
        assert!(!solver.is_skeptically_accepted(args.get_argument(&"b").unwrap()));
    }

    #[test]
    fn test_certificates() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b")]);
        let args = af.argument_set();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let (accepted, certificate) =
            solver.is_credulously_accepted_with_certificate(args.get_argument(&"a").unwrap());
        assert!(accepted);
        assert_eq!(
            vec!["a"],
            certificate
                .unwrap()
                .iter()
                .map(|a| *a.label())
                .collect::<Vec<_>>()
        );
        let (accepted, certificate) =
            solver.is_skeptically_accepted_with_certificate(args.get_argument(&"b").unwrap());
        assert!(!accepted);
        assert_eq!(
            vec!["a"],
            certificate
                .unwrap()
                .iter()
                .map(|a| *a.label())
                .collect::<Vec<_>>()
        );
    }
}
