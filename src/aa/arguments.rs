use crate::CoreError;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits allowing
/// their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
/// The engine never inspects the content behind a label; domain data (text,
/// strength, ...) stays in caller-owned records.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// Ids are the indices of the arguments in their set, in insertion order.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// # Example
///
/// ```
/// # use riposte::aa::ArgumentSet;
/// let labels = vec!["a", "b", "c"];
/// let arguments = ArgumentSet::new_with_labels(&labels);
/// assert_eq!(3, arguments.len());
/// assert_eq!(0, arguments.get_argument_index(&"a").unwrap());
/// ```
#[derive(Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument is assigned an id equal to its index in the provided
    /// slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only
    /// one that is considered.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels
            .iter()
            .for_each(|l| argument_set.ensure_argument(l.clone()));
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, a
    /// [`CoreError::DuplicateArgument`] is returned and the set is left
    /// unchanged.
    ///
    /// See [`ensure_argument`](Self::ensure_argument) for the idempotent
    /// flavor of this operation.
    pub fn new_argument(&mut self, label: T) -> Result<(), CoreError> {
        if self.label_to_id.contains_key(&label) {
            return Err(CoreError::DuplicateArgument(format!("{}", label)));
        }
        self.ensure_argument(label);
        Ok(())
    }

    /// Adds a new argument to this set, if not already present.
    ///
    /// If an argument with the same label is already defined, no argument is
    /// added and the existing one keeps its id.
    pub fn ensure_argument(&mut self, label: T) {
        if self.label_to_id.contains_key(&label) {
            return;
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Argument { id, label });
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated with an argument label.
    ///
    /// If no such label exists, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `label` - the argument label
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!(CoreError::UnknownArgument(format!("{}", label))))
    }

    /// Returns the argument associated with an argument label.
    ///
    /// # Arguments
    ///
    /// * `label` - the argument label
    ///
    /// # Example
    ///
    /// ```
    /// # use riposte::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.get_argument_index(label).map(|i| &self.arguments[i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator over the arguments, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}
