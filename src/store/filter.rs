//! Generic predicate-conjunction engine behind the List operations.
//!
//! Callers register predicates only for the query values that were actually
//! supplied; an empty conjunction matches everything, so a query with no
//! predicates returns the full collection.

/// A conjunction of optional predicates over elements of type `T`.
pub struct Conjunction<T> {
    preds: Vec<Box<dyn Fn(&T) -> bool>>,
}

impl<T> Conjunction<T> {
    pub fn new() -> Self {
        Conjunction { preds: Vec::new() }
    }

    /// Registers `pred` if the caller supplied one; `None` is ignored.
    pub fn when<P>(mut self, pred: Option<P>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        if let Some(pred) = pred {
            self.preds.push(Box::new(pred));
        }
        self
    }

    /// Exact-match equality on a scalar field.
    pub fn eq<V, F>(self, want: Option<V>, field: F) -> Self
    where
        V: PartialEq + 'static,
        F: Fn(&T) -> &V + 'static,
    {
        self.when(want.map(|want| move |item: &T| *field(item) == want))
    }

    /// Inclusive numeric lower bound on a scalar field.
    pub fn at_least<V, F>(self, floor: Option<V>, field: F) -> Self
    where
        V: PartialOrd + Copy + 'static,
        F: Fn(&T) -> V + 'static,
    {
        self.when(floor.map(|floor| move |item: &T| field(item) >= floor))
    }

    /// True when every registered predicate holds. Evaluation order is
    /// irrelevant to the result; short-circuits on the first miss.
    pub fn matches(&self, item: &T) -> bool {
        self.preds.iter().all(|pred| pred(item))
    }

    /// Applies the conjunction over a collection, cloning the matches in
    /// the collection's own iteration order.
    pub fn filter<'a, I>(&self, items: I) -> Vec<T>
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items
            .into_iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

impl<T> Default for Conjunction<T> {
    fn default() -> Self {
        Self::new()
    }
}
