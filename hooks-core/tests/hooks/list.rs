use std::cell::Cell;
use std::rc::Rc;

use hooks_core::{Identified, ListState};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Todo {
    id: Uuid,
    text: &'static str,
}

impl Identified for Todo {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

fn todo(text: &'static str) -> Todo {
    Todo {
        id: Uuid::new_v4(),
        text,
    }
}

#[test]
fn add_appends_in_order() {
    let list = ListState::new(vec![todo("coding")]);
    list.add(todo("sleeping"));
    list.add(todo("shopping"));

    let texts: Vec<_> = list.values().iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["coding", "sleeping", "shopping"]);
}

#[test]
fn add_then_remove_by_id_restores_contents() {
    let list = ListState::new(vec![todo("coding"), todo("sleeping")]);
    let before = list.values();

    let extra = todo("shopping");
    list.add(extra.clone());
    list.remove_by_id(&extra.id);

    assert_eq!(*list.values(), *before);
}

#[test]
fn remove_by_id_removes_only_first_match() {
    let duplicate = todo("twice");
    let list = ListState::new(vec![duplicate.clone(), todo("x"), duplicate.clone()]);

    list.remove_by_id(&duplicate.id);

    let values = list.values();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].text, "x");
    assert_eq!(values[1], duplicate);
}

#[test]
fn remove_by_missing_id_is_a_no_op() {
    let list = ListState::new(vec![todo("a")]);
    let before = list.values();
    list.remove_by_id(&Uuid::new_v4());
    assert!(Rc::ptr_eq(&before, &list.values()));
}

#[test]
fn remove_by_index() {
    let list = ListState::new(vec![todo("a"), todo("b"), todo("c")]);
    list.remove_by_index(1);
    let texts: Vec<_> = list.values().iter().map(|t| t.text).collect();
    assert_eq!(texts, vec!["a", "c"]);
}

#[test]
fn out_of_range_index_leaves_list_unchanged() {
    let list = ListState::new(vec![todo("a"), todo("b")]);
    let before = list.values();
    let notified = Rc::new(Cell::new(false));
    let _subscription = list.subscribe({
        let notified = notified.clone();
        move |_| notified.set(true)
    });

    list.remove_by_index(2);
    list.remove_by_index(usize::MAX);

    assert!(Rc::ptr_eq(&before, &list.values()));
    assert!(!notified.get());
}

#[test]
fn clear_empties_the_list() {
    let list = ListState::new(vec![todo("a"), todo("b")]);
    list.clear();
    assert!(list.values().is_empty());
}

#[test]
fn previous_views_are_never_mutated() {
    let list = ListState::new(vec![todo("a"), todo("b")]);
    let first_view = list.values();

    list.add(todo("c"));
    list.remove_by_index(0);
    list.clear();

    assert_eq!(first_view.len(), 2);
    assert_eq!(first_view[0].text, "a");
}

#[test]
fn every_change_installs_a_new_view() {
    let list = ListState::new(Vec::new());
    let mut previous = list.values();

    let a = todo("a");
    list.add(a.clone());
    assert!(!Rc::ptr_eq(&previous, &list.values()));
    previous = list.values();

    list.remove_by_id(&a.id);
    assert!(!Rc::ptr_eq(&previous, &list.values()));
    previous = list.values();

    list.set_values(vec![todo("b")]);
    assert!(!Rc::ptr_eq(&previous, &list.values()));
}
