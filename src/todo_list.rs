use crate::models::{CATEGORIES, Category, CategoryId, KeyEvent, TodoSection};
use crate::store::TodoStore;
use chrono::NaiveDate;

/// Text confirmed in a category's input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub category_id: CategoryId,
    pub text: String,
}

/// Which category's input box is open. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryInput {
    open: Option<CategoryId>,
}

impl CategoryInput {
    pub fn open_category(&self) -> Option<CategoryId> {
        self.open
    }

    pub fn is_open(&self, category_id: CategoryId) -> bool {
        self.open == Some(category_id)
    }

    /// Opens `category_id` and closes any other input; toggling the open one closes it.
    pub fn toggle(&mut self, category_id: CategoryId) {
        if Category::find(category_id).is_none() {
            return;
        }
        self.open = if self.is_open(category_id) {
            None
        } else {
            Some(category_id)
        };
    }

    /// Click outside the widget.
    pub fn dismiss(&mut self) {
        self.open = None;
    }

    /// Enter confirms the open input, except while an IME composition is in progress.
    pub fn handle_key(&self, event: &KeyEvent) -> Option<Submission> {
        if event.key != "Enter" || event.is_composing {
            return None;
        }
        let category_id = self.open?;
        let text = event.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Submission {
            category_id,
            text: text.to_string(),
        })
    }
}

pub fn sections(
    store: &TodoStore,
    input: &CategoryInput,
    selected_date: NaiveDate,
) -> Vec<TodoSection> {
    CATEGORIES
        .iter()
        .map(|category| TodoSection {
            category: *category,
            input_open: input.is_open(category.id),
            items: store
                .items_for_category_and_date(category.id, selected_date)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(text: &str, is_composing: bool) -> KeyEvent {
        KeyEvent {
            key: "Enter".to_string(),
            text: text.to_string(),
            is_composing,
        }
    }

    #[test]
    fn only_one_input_open_at_a_time() {
        let mut input = CategoryInput::default();
        input.toggle(1);
        assert!(input.is_open(1));

        input.toggle(3);
        assert!(!input.is_open(1));
        assert_eq!(input.open_category(), Some(3));

        input.toggle(3);
        assert_eq!(input.open_category(), None);

        input.toggle(2);
        input.dismiss();
        assert_eq!(input.open_category(), None);
    }

    #[test]
    fn unknown_category_does_not_open() {
        let mut input = CategoryInput::default();
        input.toggle(2);
        input.toggle(77);
        assert_eq!(input.open_category(), Some(2));
    }

    #[test]
    fn composing_enter_is_ignored() {
        let mut input = CategoryInput::default();
        input.toggle(1);

        assert_eq!(input.handle_key(&enter("공부", true)), None);
        assert_eq!(
            input.handle_key(&enter(" 공부 ", false)),
            Some(Submission {
                category_id: 1,
                text: "공부".to_string(),
            })
        );
    }

    #[test]
    fn non_enter_blank_or_closed_input_submit_nothing() {
        let mut input = CategoryInput::default();
        assert_eq!(input.handle_key(&enter("read", false)), None);

        input.toggle(4);
        assert_eq!(input.handle_key(&enter("   ", false)), None);
        let tab = KeyEvent {
            key: "Tab".to_string(),
            text: "read".to_string(),
            is_composing: false,
        };
        assert_eq!(input.handle_key(&tab), None);
    }

    #[test]
    fn sections_cover_every_category_for_selected_date() {
        let mut store = TodoStore::default();
        let day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        store.add_todo(1, "today", day);
        store.add_todo(1, "tomorrow", day.succ_opt().unwrap());
        store.add_todo(3, "dentist", day);

        let mut input = CategoryInput::default();
        input.toggle(3);

        let sections = sections(&store, &input, day);
        assert_eq!(sections.len(), CATEGORIES.len());
        assert_eq!(sections[0].items.len(), 1);
        assert_eq!(sections[0].items[0].text, "today");
        assert!(sections[1].items.is_empty());
        assert!(sections[2].input_open);
        assert!(!sections[0].input_open);
    }
}
