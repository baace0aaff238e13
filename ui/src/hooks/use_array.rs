use std::rc::Rc;

use hooks_core::{Identified, ListState};
use yew::prelude::*;

/// Array hook return type
pub struct UseArrayHandle<T: Identified> {
    pub values: Rc<Vec<T>>,
    pub add: Callback<T>,
    pub clear: Callback<()>,
    pub remove_by_id: Callback<T::Id>,
    pub remove_by_index: Callback<usize>,
    pub set_values: Callback<Vec<T>>,
}

/// A list of identified items with add/remove/clear helpers.
///
/// Every change produces a new `Rc`, so `values` can be passed as a prop and
/// compared cheaply.
#[hook]
pub fn use_array<T>(initial: Vec<T>) -> UseArrayHandle<T>
where
    T: Identified + Clone + 'static,
    T::Id: 'static,
{
    let list = use_memo((), move |_| ListState::new(initial));
    let values = use_state(|| list.values());

    {
        let list = list.clone();
        let values = values.clone();

        use_effect_with((), move |_| {
            let subscription =
                list.subscribe(move |next| values.set(next.clone()));
            move || drop(subscription)
        });
    }

    let add = {
        let list = list.clone();
        use_callback((), move |item: T, _| list.add(item))
    };
    let clear = {
        let list = list.clone();
        use_callback((), move |_: (), _| list.clear())
    };
    let remove_by_id = {
        let list = list.clone();
        use_callback((), move |id: T::Id, _| list.remove_by_id(&id))
    };
    let remove_by_index = {
        let list = list.clone();
        use_callback((), move |index: usize, _| list.remove_by_index(index))
    };
    let set_values =
        use_callback((), move |next: Vec<T>, _| list.set_values(next));

    UseArrayHandle {
        values: (*values).clone(),
        add,
        clear,
        remove_by_id,
        remove_by_index,
        set_values,
    }
}
