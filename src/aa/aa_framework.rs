use crate::aa::{Argument, ArgumentSet, LabelType};
use crate::CoreError;
use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework is a set of arguments and a set of attacks between them.
/// Attacks follow set semantics: adding the same attack twice leaves a single
/// edge. Self-attacks are permitted.
///
/// Frameworks are built once per validation or assessment call and are
/// read-only afterward; there is no removal operation.
#[derive(Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attack_set: HashSet<(usize, usize)>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the set of arguments
    ///
    /// # Example
    ///
    /// ```
    /// # use riposte::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_to = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attack_set: HashSet::new(),
            attacks_to,
        }
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// An error is returned if an argument with the same label is already
    /// defined. See [`ensure_argument`](Self::ensure_argument) for the
    /// idempotent flavor.
    pub fn new_argument(&mut self, label: T) -> Result<(), CoreError> {
        self.arguments.new_argument(label)?;
        self.attacks_to.push(Vec::new());
        Ok(())
    }

    /// Adds a new argument to this argumentation framework, if not already present.
    pub fn ensure_argument(&mut self, label: T) {
        let old_len = self.arguments.len();
        self.arguments.ensure_argument(label);
        if self.arguments.len() > old_len {
            self.attacks_to.push(Vec::new());
        }
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If one of the provided arguments is undefined, an error caused by a
    /// [`CoreError::UnknownArgument`] is returned.
    /// If the attack already exists, nothing is added (set semantics).
    ///
    /// # Arguments
    ///
    /// * `from` - the label of the source argument (attacker)
    /// * `to` - the label of the destination argument (attacked)
    ///
    /// # Example
    ///
    /// ```
    /// # use riposte::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.add_attack_by_ids(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new attack given the ids of the source and destination arguments.
    ///
    /// If one of the provided ids is out of range, an error is returned.
    /// If the attack already exists, nothing is added (set semantics).
    ///
    /// # Arguments
    ///
    /// * `from` - the id of the source argument (attacker)
    /// * `to` - the id of the destination argument (attacked)
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add an attack from id {} to id {}; max id is {}",
                from,
                to,
                n_arguments - 1
            ));
        }
        self.add_attack_by_ids(from, to);
        Ok(())
    }

    fn add_attack_by_ids(&mut self, from: usize, to: usize) {
        if self.attack_set.insert((from, to)) {
            self.attacks.push((from, to));
            self.attacks_to[to].push(from);
        }
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator over the attacks, in insertion order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Provides an iterator over the arguments attacking the given argument.
    pub fn iter_attackers_of(&self, arg: &Argument<T>) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.attacks_to[arg.id()]
            .iter()
            .map(|id| self.arguments.get_argument_by_id(*id))
    }

    /// Returns the ids of the arguments attacking the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn attacker_ids_of(&self, attacked_id: usize) -> &[usize] {
        &self.attacks_to[attacked_id]
    }

    /// Returns `true` iff the argument with id `from` attacks the one with id `to`.
    pub fn is_attack_by_ids(&self, from: usize, to: usize) -> bool {
        self.attack_set.contains(&(from, to))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_af(labels: &[&'static str]) -> AAFramework<&'static str> {
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(labels))
    }

    #[test]
    fn test_n_args() {
        let af = new_af(&["a", "b", "c"]);
        assert_eq!(3, af.n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let mut af = new_af(&["a", "b", "c"]);
        assert_eq!(0, af.n_attacks());
        af.new_attack(&"a", &"b").unwrap();
        assert_eq!(1, af.n_attacks());
        assert!(af.is_attack_by_ids(0, 1));
    }

    #[test]
    fn test_new_attack_is_set_semantics() {
        let mut af = new_af(&["a", "b"]);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"a", &"b").unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!(&[0_usize] as &[usize], af.attacker_ids_of(1));
    }

    #[test]
    fn test_new_self_attack() {
        let mut af = new_af(&["a"]);
        af.new_attack(&"a", &"a").unwrap();
        assert_eq!(1, af.n_attacks());
        assert!(af.is_attack_by_ids(0, 0));
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let mut af = new_af(&["a", "b", "c"]);
        af.new_attack(&"d", &"a").unwrap_err();
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let mut af = new_af(&["a", "b", "c"]);
        af.new_attack(&"a", &"d").unwrap_err();
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id() {
        let mut af = new_af(&["a", "b", "c"]);
        af.new_attack_by_ids(3, 0).unwrap_err();
        af.new_attack_by_ids(0, 3).unwrap_err();
    }

    #[test]
    fn test_new_argument() {
        let mut af = new_af(&["a", "b", "c"]);
        af.new_argument("d").unwrap();
        assert_eq!(4, af.n_arguments());
        af.new_argument("d").unwrap_err();
        assert_eq!(4, af.n_arguments());
        af.ensure_argument("d");
        assert_eq!(4, af.n_arguments());
        af.new_attack(&"d", &"a").unwrap();
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_iter_attackers_of() {
        let mut af = new_af(&["a", "b", "c"]);
        af.new_attack(&"a", &"c").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        let attackers = af
            .iter_attackers_of(af.argument_set().get_argument(&"c").unwrap())
            .map(|a| *a.label())
            .collect::<Vec<_>>();
        assert_eq!(vec!["a", "b"], attackers);
        assert_eq!(
            0,
            af.iter_attackers_of(af.argument_set().get_argument(&"a").unwrap())
                .count()
        );
    }
}
