/// A list of listeners notified in registration order.
pub struct Event<T> {
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Event<T> {
    pub fn new() -> Self {
        Event {
            listeners: Vec::new(),
        }
    }
    pub fn add_listener<F>(&mut self, f: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.listeners.push(Box::new(f));
    }
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
    pub fn emit(&mut self, param: &T) {
        for listener in self.listeners.iter_mut() {
            listener(param);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn listeners_run_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut event = Event::new();
        let first = seen.clone();
        event.add_listener(move |value: &i32| first.borrow_mut().push(("first", *value)));
        let second = seen.clone();
        event.add_listener(move |value: &i32| second.borrow_mut().push(("second", *value)));

        event.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
        assert_eq!(event.len(), 2);

        event.clear();
        event.emit(&8);
        assert!(event.is_empty());
        assert_eq!(seen.borrow().len(), 2);
    }
}
