use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// A frame in the lexical scope chain: named bindings plus an optional
/// outer frame. The handle is cheap to clone and shared: a closure and
/// the frame it was defined in observe each other's writes.
///
/// `set` always writes the innermost frame; only `get` walks outward.
/// Block statements do not allocate a frame, so a `let` inside a block
/// overwrites the enclosing binding.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    inner: Rc<RefCell<Frame>>,
}

#[derive(Debug, Default)]
struct Frame {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// A fresh frame enclosed by `outer`, as allocated for every function
    /// call.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment {
            inner: Rc::new(RefCell::new(Frame {
                store: HashMap::new(),
                outer: Some(outer.clone()),
            })),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.inner.borrow();
        if let Some(value) = frame.store.get(name) {
            return Some(value.clone());
        }
        frame.outer.as_ref().and_then(|outer| outer.get(name))
    }

    pub fn set(&self, name: &str, value: Value) {
        self.inner.borrow_mut().store.insert(name.to_string(), value);
    }
}
