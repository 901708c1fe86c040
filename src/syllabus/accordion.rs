/// Expansion state for one collapsible list. At most one item is ever
/// expanded; the syllabus modal and the page FAQ each own their own instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    expanded: Option<usize>,
}

/// Outcome of a toggle, describing the DOM work in the order it must happen:
/// when switching items the previous body collapses before the target
/// expands, so two bodies are never open at once, not even transiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Collapsed { item: usize },
    Expanded { item: usize, collapsed: Option<usize> },
}

impl AccordionState {
    /// Fresh list with everything collapsed (the FAQ starts this way).
    pub fn collapsed() -> Self {
        Self { expanded: None }
    }

    /// Fresh list with the first item open, as the syllabus modal renders it.
    /// The caller still has to re-measure that body once the surrounding
    /// modal is actually visible.
    pub fn first_expanded() -> Self {
        Self { expanded: Some(0) }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, item: usize) -> bool {
        self.expanded == Some(item)
    }

    pub fn toggle(&mut self, item: usize) -> Toggle {
        if self.expanded == Some(item) {
            self.expanded = None;
            Toggle::Collapsed { item }
        } else {
            let collapsed = self.expanded.take();
            self.expanded = Some(item);
            Toggle::Expanded { item, collapsed }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_reports_the_previously_open_item() {
        let mut state = AccordionState::first_expanded();
        assert_eq!(
            state.toggle(2),
            Toggle::Expanded { item: 2, collapsed: Some(0) }
        );
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn at_most_one_item_expanded_after_any_sequence() {
        let mut state = AccordionState::collapsed();
        for &item in &[0, 3, 3, 1, 2, 2, 0, 1] {
            state.toggle(item);
            let open: Vec<_> = (0..5).filter(|&i| state.is_expanded(i)).collect();
            assert!(open.len() <= 1, "items {open:?} open at once");
        }
    }

    #[test]
    fn double_toggle_returns_to_collapsed() {
        let mut state = AccordionState::collapsed();
        state.toggle(1);
        assert_eq!(state.toggle(1), Toggle::Collapsed { item: 1 });
        assert_eq!(state, AccordionState::collapsed());
    }

    #[test]
    fn toggling_the_open_first_item_closes_it() {
        let mut state = AccordionState::first_expanded();
        assert_eq!(state.toggle(0), Toggle::Collapsed { item: 0 });
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut modal = AccordionState::first_expanded();
        let mut faq = AccordionState::collapsed();
        modal.toggle(1);
        assert_eq!(faq.expanded(), None);
        faq.toggle(3);
        assert!(modal.is_expanded(1));
        assert!(faq.is_expanded(3));
    }
}
