use std::rc::Rc;

use crate::observable::{Observable, Subscription};

/// Elements of a [`ListState`] carry an identifier that callers keep unique.
pub trait Identified {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

/// An ordered list that is replaced, never mutated in place.
///
/// Every effective change installs a fresh `Rc<Vec<T>>`, so a view obtained
/// from [`ListState::values`] never changes under the caller and
/// `Rc::ptr_eq` is enough to detect updates.
pub struct ListState<T> {
    values: Observable<Rc<Vec<T>>>,
}

impl<T: Identified + Clone + 'static> ListState<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            values: Observable::new(Rc::new(initial)),
        }
    }

    pub fn values(&self) -> Rc<Vec<T>> {
        self.values.get()
    }

    pub fn subscribe(
        &self,
        f: impl Fn(&Rc<Vec<T>>) + 'static,
    ) -> Subscription {
        self.values.subscribe(f)
    }

    pub fn set_values(&self, values: Vec<T>) {
        self.values.set(Rc::new(values));
    }

    /// Append to the end. Duplicate ids are not rejected.
    pub fn add(&self, item: T) {
        self.values.update(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(item);
            Rc::new(next)
        });
    }

    /// Remove the first element with a matching id; no-op if none matches.
    pub fn remove_by_id(&self, id: &T::Id) {
        let current = self.values.get();
        let Some(position) = current.iter().position(|v| v.id() == id) else {
            return;
        };
        self.replace_without(&current, position);
    }

    /// Remove the element at `index`; no-op when out of range.
    pub fn remove_by_index(&self, index: usize) {
        let current = self.values.get();
        if index >= current.len() {
            return;
        }
        self.replace_without(&current, index);
    }

    pub fn clear(&self) {
        self.values.set(Rc::new(Vec::new()));
    }

    fn replace_without(&self, current: &[T], index: usize) {
        let next: Vec<T> = current
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, v)| v.clone())
            .collect();
        self.values.set(Rc::new(next));
    }
}
