use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::NodeRef;

use crate::syllabus::accordion::Toggle;

/// Stable per-item [`NodeRef`]s for accordion bodies, shared between the view,
/// click handlers and timer callbacks of one accordion instance.
#[derive(Clone, Default)]
pub struct BodyRefs {
    refs: Rc<RefCell<HashMap<usize, NodeRef>>>,
}

impl BodyRefs {
    pub fn node_ref(&self, item: usize) -> NodeRef {
        self.refs.borrow_mut().entry(item).or_default().clone()
    }

    /// Pins the body to its current content height so the max-height
    /// transition has a concrete target. The element has to sit in a visible
    /// layout tree; while hidden `scroll_height` reads 0, which is why the
    /// modal re-runs this once it is actually shown.
    pub fn expand(&self, item: usize) {
        if let Some(el) = self.node_ref(item).cast::<HtmlElement>() {
            let height = el.scroll_height();
            let _ = el.style().set_property("max-height", &format!("{height}px"));
        }
    }

    /// Drops the inline constraint; the stylesheet's `max-height: 0` takes
    /// over and animates the body shut.
    pub fn collapse(&self, item: usize) {
        if let Some(el) = self.node_ref(item).cast::<HtmlElement>() {
            let _ = el.style().remove_property("max-height");
        }
    }

    /// Clears every inline height, used when the modal re-renders a different
    /// course into the same DOM positions.
    pub fn collapse_all(&self) {
        for node_ref in self.refs.borrow().values() {
            if let Some(el) = node_ref.cast::<HtmlElement>() {
                let _ = el.style().remove_property("max-height");
            }
        }
    }

    /// Applies a toggle outcome in order: the previously open body collapses
    /// before the target expands.
    pub fn apply(&self, toggle: &Toggle) {
        match *toggle {
            Toggle::Collapsed { item } => self.collapse(item),
            Toggle::Expanded { item, collapsed } => {
                if let Some(previous) = collapsed {
                    self.collapse(previous);
                }
                self.expand(item);
            }
        }
    }
}
