use crate::actions::Action;
use crate::observable::{Observable, Subscribers};
use crate::state::State;
use crate::value::Value;
use crate::view_models::ControlViewModel;
use std::cell::RefCell;

/// Headless control panel
///
/// Turns user gestures into actions (it is an `Observable<Action>`) and keeps
/// the view model for the latest state it was asked to render.
#[derive(Default)]
pub struct ControlView {
    subscribers: Subscribers<Action>,
    model: RefCell<ControlViewModel>,
}

impl ControlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dropdown selection changed
    pub fn on_change(&self, key: &str, value: impl Into<Value>) {
        self.notify(&Action::set_value(key, value));
    }

    /// The "Next" button beside `item_key` was clicked
    pub fn on_next(&self, item_key: &str, items_key: &str) {
        self.notify(&Action::next_value(item_key, items_key));
    }

    /// The "Previous" button beside `item_key` was clicked
    pub fn on_previous(&self, item_key: &str, items_key: &str) {
        self.notify(&Action::previous_value(item_key, items_key));
    }

    pub fn render(&self, state: &State) {
        self.model.replace(ControlViewModel::from_state(state));
    }

    pub fn model(&self) -> ControlViewModel {
        self.model.borrow().clone()
    }
}

impl Observable<Action> for ControlView {
    fn subscribers(&self) -> &Subscribers<Action> {
        &self.subscribers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn listen(view: &ControlView) -> Rc<RefCell<Vec<Action>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        view.subscribe(move |action: &Action| sink.borrow_mut().push(action.clone()));
        seen
    }

    #[test]
    fn test_on_change_emits_set_value() {
        let view = ControlView::new();
        let seen = listen(&view);

        view.on_change("pressure", "850.0");

        assert_eq!(*seen.borrow(), vec![Action::set_value("pressure", "850.0")]);
    }

    #[test]
    fn test_buttons_emit_navigation() {
        let view = ControlView::new();
        let seen = listen(&view);

        view.on_next("pressure", "pressures");
        view.on_previous("valid_time", "valid_times");

        assert_eq!(
            *seen.borrow(),
            vec![
                Action::next_value("pressure", "pressures"),
                Action::previous_value("valid_time", "valid_times"),
            ]
        );
    }

    #[test]
    fn test_same_keys_are_emitted_not_rejected() {
        let view = ControlView::new();
        let seen = listen(&view);

        view.on_next("x", "x");

        assert_eq!(*seen.borrow(), vec![Action::next_value("x", "x")]);
    }

    #[test]
    fn test_render_updates_model() {
        let view = ControlView::new();
        view.render(&State::new().with("variables", vec!["mslp"]));
        assert!(!view.model().selector("variable").unwrap().disabled);
    }
}
