use tui::widgets::ListState;

use super::Stateful;

pub struct StatefulList<T> {
    pub state: ListState,
    pub items: Vec<T>,
}

impl<T: Clone> StatefulList<T> {
    /// The first item starts selected, if there is one
    pub fn with_items(items: Vec<T>) -> StatefulList<T> {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        StatefulList { state, items }
    }

    pub fn get_selected_item(&self) -> Option<T> {
        match self.state.selected() {
            Some(i) => self.items.get(i).cloned(),
            None => None,
        }
    }
}

impl<T> Stateful<T> for StatefulList<T> {
    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_item() {
        let list = StatefulList::with_items(vec!['a', 'b']);
        assert_eq!(list.get_selected_item(), Some('a'));
    }

    #[test]
    fn next_wraps_around() {
        let mut list = StatefulList::with_items(vec!['a', 'b', 'c']);
        list.next();
        list.next();
        assert_eq!(list.get_selected_item(), Some('c'));
        list.next();
        assert_eq!(list.get_selected_item(), Some('a'));
    }

    #[test]
    fn previous_wraps_around() {
        let mut list = StatefulList::with_items(vec!['a', 'b', 'c']);
        list.previous();
        assert_eq!(list.get_selected_item(), Some('c'));
    }

    #[test]
    fn empty_list_never_selects() {
        let mut list: StatefulList<char> = StatefulList::with_items(vec![]);
        list.next();
        list.previous();
        assert!(list.get_selected_item().is_none());
    }
}
