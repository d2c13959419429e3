use derive_more::Deref;

///
/// FoldEntry
///
/// One stored value plus the running fold of the stack from its bottom up to
/// and including this entry.
///

#[derive(Clone, Debug)]
pub(crate) struct FoldEntry<T> {
    pub(crate) value: T,
    pub(crate) fold: T,
}

///
/// FoldStack
///
/// LIFO stack whose top entry's `fold` always equals the fold of every value
/// currently on the stack. `Deref` exposes read-only slice access; mutation
/// goes through `push`, `pop`, and `clear` so the running folds stay
/// consistent with the values.
///
/// Fold orientation belongs to the caller: `push` hands
/// `(fold_below, value)` to the supplied closure and stores whatever it
/// returns, so the same stack type serves both queue sides.
///

#[derive(Clone, Debug, Deref)]
pub(crate) struct FoldStack<T>(Vec<FoldEntry<T>>);

impl<T> FoldStack<T> {
    pub(crate) const fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of entries on the stack.
    #[must_use]
    pub(crate) const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the stack holds no entries.
    #[must_use]
    pub(crate) const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value on top of the stack (most recently pushed).
    #[must_use]
    pub(crate) fn top(&self) -> Option<&T> {
        self.0.last().map(|entry| &entry.value)
    }

    /// Value at the bottom of the stack (least recently pushed).
    #[must_use]
    pub(crate) fn bottom(&self) -> Option<&T> {
        self.0.first().map(|entry| &entry.value)
    }

    /// Running fold of the whole stack.
    #[must_use]
    pub(crate) fn fold(&self) -> Option<&T> {
        self.0.last().map(|entry| &entry.fold)
    }

    /// Pop the top entry, if any.
    pub(crate) fn pop(&mut self) -> Option<FoldEntry<T>> {
        self.0.pop()
    }

    /// Drop every entry.
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Clone> FoldStack<T> {
    /// Push `value`, deriving its running fold from the entry below it.
    ///
    /// `fold_with` receives `(fold_below, value)`; a bottom-most entry seeds
    /// its fold with the value itself.
    pub(crate) fn push(&mut self, value: T, fold_with: impl FnOnce(&T, &T) -> T) {
        let fold = match self.0.last() {
            Some(below) => fold_with(&below.fold, &value),
            None => value.clone(),
        };

        self.0.push(FoldEntry { value, fold });
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_entry_seeds_fold_with_its_value() {
        let mut stack: FoldStack<u32> = FoldStack::new();

        stack.push(7, |_, _| unreachable!("bottom entry must not fold"));

        assert_eq!(stack.fold(), Some(&7));
        assert_eq!(stack.top(), stack.bottom());
    }

    #[test]
    fn push_folds_against_the_entry_below() {
        let mut stack: FoldStack<u32> = FoldStack::new();

        stack.push(2, |below, value| below + value);
        stack.push(3, |below, value| below + value);
        stack.push(4, |below, value| below + value);

        assert_eq!(stack.fold(), Some(&9));
        assert_eq!(stack.top(), Some(&4));
        assert_eq!(stack.bottom(), Some(&2));
    }

    #[test]
    fn fold_orientation_is_caller_controlled() {
        let mut stack: FoldStack<String> = FoldStack::new();

        stack.push("a".to_string(), |below, value| format!("{below}{value}"));
        stack.push("b".to_string(), |below, value| format!("{below}{value}"));
        stack.push("c".to_string(), |below, value| format!("{value}{below}"));

        assert_eq!(stack.fold().map(String::as_str), Some("cab"));
    }

    #[test]
    fn pop_restores_the_previous_running_fold() {
        let mut stack: FoldStack<u32> = FoldStack::new();

        stack.push(1, |below, value| below + value);
        stack.push(2, |below, value| below + value);

        let popped = stack.pop().expect("stack should hold two entries");
        assert_eq!(popped.value, 2);
        assert_eq!(popped.fold, 3);
        assert_eq!(stack.fold(), Some(&1));

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.fold(), None);
    }
}
