//! Tagged mutation commands
//!
//! Every change to a [`TodoList`] goes through [`apply`], a pure
//! function from (list, command) to an updated list. Id generation and
//! timestamping happen before dispatch, so `Add` carries a fully built
//! item and `apply` stays deterministic.

use crate::item::TodoItem;
use crate::list::TodoList;

#[derive(Debug, Clone)]
pub enum TodoAction {
    Add { item: TodoItem },
    UpdateText { id: String, text: String },
    Remove { id: String },
    Toggle { id: String },
}

/// Apply one command to the list. Returns whether the list changed;
/// a miss on an unknown id is a normal outcome, not an error.
pub fn apply(list: &mut TodoList, action: TodoAction) -> bool {
    match action {
        TodoAction::Add { item } => {
            list.push(item);
            true
        }
        TodoAction::UpdateText { id, text } => match list.find_mut(&id) {
            Some(item) => {
                item.set_text(text);
                true
            }
            None => false,
        },
        TodoAction::Remove { id } => list.remove(&id),
        TodoAction::Toggle { id } => match list.find_mut(&id) {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends() {
        let mut list = TodoList::new();
        let item = TodoItem::new("buy milk").unwrap();
        let id = item.id.clone();

        assert!(apply(&mut list, TodoAction::Add { item }));
        assert_eq!(list.len(), 1);
        assert_eq!(list.find(&id).unwrap().text, "buy milk");
    }

    #[test]
    fn test_unknown_id_is_a_miss() {
        let mut list = TodoList::new();

        assert!(!apply(
            &mut list,
            TodoAction::UpdateText {
                id: "missing".to_string(),
                text: "x".to_string(),
            }
        ));
        assert!(!apply(
            &mut list,
            TodoAction::Remove {
                id: "missing".to_string(),
            }
        ));
        assert!(!apply(
            &mut list,
            TodoAction::Toggle {
                id: "missing".to_string(),
            }
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn test_full_scenario() {
        let mut list = TodoList::new();
        let item = TodoItem::new("learn react").unwrap();
        let id = item.id.clone();

        apply(&mut list, TodoAction::Add { item });
        assert_eq!(list.find(&id).unwrap().text, "learn react");
        assert!(!list.find(&id).unwrap().completed);

        apply(&mut list, TodoAction::Toggle { id: id.clone() });
        assert!(list.find(&id).unwrap().completed);

        apply(
            &mut list,
            TodoAction::UpdateText {
                id: id.clone(),
                text: "learn react deeply".to_string(),
            },
        );
        let item = list.find(&id).unwrap();
        assert_eq!(item.text, "learn react deeply");
        assert!(item.completed, "update must not touch the completion flag");

        apply(&mut list, TodoAction::Remove { id: id.clone() });
        assert!(list.is_empty());

        // The id is gone for good
        assert!(!apply(&mut list, TodoAction::Toggle { id }));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut list = TodoList::new();
        let item = TodoItem::new("stretch").unwrap();
        let id = item.id.clone();
        apply(&mut list, TodoAction::Add { item });

        apply(&mut list, TodoAction::Toggle { id: id.clone() });
        apply(&mut list, TodoAction::Toggle { id: id.clone() });
        assert!(!list.find(&id).unwrap().completed);
    }
}
