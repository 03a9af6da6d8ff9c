use crate::calendar::YearMonth;
use crate::models::{Category, CategoryId, TodoId, TodoItem};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory to-do collection plus the item currently shown in the detail sheet.
///
/// Aggregates are computed from the collection on every call; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    detail: Option<TodoId>,
}

impl TodoStore {
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            detail: None,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends a new open item. Blank text, an unknown category or an exhausted id
    /// space creates nothing.
    pub fn add_todo(
        &mut self,
        category_id: CategoryId,
        text: &str,
        date: NaiveDate,
    ) -> Option<TodoItem> {
        let text = text.trim();
        if text.is_empty() || Category::find(category_id).is_none() {
            return None;
        }

        let item = TodoItem {
            id: self.next_id()?,
            text: text.to_string(),
            completed: false,
            category_id,
            date,
        };
        self.items.push(item.clone());
        Some(item)
    }

    pub fn toggle_completed(&mut self, id: TodoId) -> Option<&TodoItem> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item)
    }

    pub fn delete_todo(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.detail == Some(id) {
            self.detail = None;
        }
        Some(self.items.remove(index))
    }

    /// Items of one category on one date, open items first.
    pub fn items_for_category_and_date(
        &self,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> Vec<&TodoItem> {
        let mut items: Vec<&TodoItem> = self
            .items
            .iter()
            .filter(|item| item.category_id == category_id && item.date == date)
            .collect();
        // sort_by_key is stable
        items.sort_by_key(|item| item.completed);
        items
    }

    pub fn achieved_count_for_month(&self, month: YearMonth) -> usize {
        self.items
            .iter()
            .filter(|item| item.completed && month.contains(item.date))
            .count()
    }

    pub fn unachieved_count_by_date(&self) -> BTreeMap<NaiveDate, usize> {
        let mut counts = BTreeMap::new();
        for item in self.items.iter().filter(|item| !item.completed) {
            *counts.entry(item.date).or_insert(0) += 1;
        }
        counts
    }

    /// Open items dated `today`, or `None` when there are none.
    pub fn today_unachieved_count(&self, today: NaiveDate) -> Option<usize> {
        let total = self.items.iter().filter(|item| item.date == today).count();
        let completed = self
            .items
            .iter()
            .filter(|item| item.date == today && item.completed)
            .count();

        match total - completed {
            0 => None,
            remaining => Some(remaining),
        }
    }

    pub fn is_all_completed_for_date(&self, date: NaiveDate) -> bool {
        let mut on_date = self.items.iter().filter(|item| item.date == date).peekable();
        on_date.peek().is_some() && on_date.all(|item| item.completed)
    }

    /// Distinct categories with at least one completed item on `date`, in first-seen order.
    pub fn completed_categories_for_date(&self, date: NaiveDate) -> Vec<CategoryId> {
        let mut categories = Vec::new();
        for item in &self.items {
            if item.date == date && item.completed && !categories.contains(&item.category_id) {
                categories.push(item.category_id);
            }
        }
        categories
    }

    pub fn select_for_detail(&mut self, id: TodoId) -> Option<&TodoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.detail = Some(id);
        self.items.get(index)
    }

    pub fn selected_for_detail(&self) -> Option<&TodoItem> {
        self.detail.and_then(|id| self.get(id))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    fn next_id(&self) -> Option<TodoId> {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_toggle_delete_scenario() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);

        let item = store.add_todo(1, "buy milk", day).expect("item created");
        assert_eq!(
            item,
            TodoItem {
                id: 1,
                text: "buy milk".to_string(),
                completed: false,
                category_id: 1,
                date: day,
            }
        );

        assert!(store.add_todo(1, "  ", day).is_none());
        assert_eq!(store.len(), 1);

        assert!(store.toggle_completed(1).unwrap().completed);
        assert_eq!(store.achieved_count_for_month("2025-06".parse().unwrap()), 1);

        store.delete_todo(1);
        assert!(store.is_empty());
        assert!(store.unachieved_count_by_date().is_empty());
    }

    #[test]
    fn ids_increase_from_max_existing() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);
        let ids: Vec<TodoId> = ["a", "b", "c"]
            .iter()
            .map(|text| store.add_todo(2, text, day).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        store.delete_todo(2);
        assert_eq!(store.add_todo(2, "d", day).unwrap().id, 4);

        store.delete_todo(4);
        store.delete_todo(3);
        assert_eq!(store.add_todo(2, "e", day).unwrap().id, 2);
    }

    #[test]
    fn add_refuses_when_ids_are_exhausted() {
        let day = date(2025, 6, 10);
        let mut store = TodoStore::from_items(vec![TodoItem {
            id: TodoId::MAX,
            text: "last".to_string(),
            completed: false,
            category_id: 1,
            date: day,
        }]);

        assert!(store.add_todo(1, "next", day).is_none());
        assert!(store.add_todo(2, "again", day).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].id, TodoId::MAX);
    }

    #[test]
    fn text_is_trimmed_and_unknown_category_rejected() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);
        assert_eq!(store.add_todo(3, "  call mom \n", day).unwrap().text, "call mom");
        assert!(store.add_todo(9, "nope", day).is_none());
        assert!(store.add_todo(1, "\t\n", day).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_and_unknown_is_noop() {
        let mut store = TodoStore::default();
        store.add_todo(1, "run", date(2025, 6, 1));
        store.toggle_completed(1);
        store.toggle_completed(1);
        assert!(!store.get(1).unwrap().completed);

        assert!(store.toggle_completed(42).is_none());
        assert!(store.delete_todo(42).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn items_for_category_and_date_orders_open_first() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);
        store.add_todo(1, "first", day);
        store.add_todo(1, "second", day);
        store.add_todo(1, "third", day);
        store.add_todo(2, "other category", day);
        store.add_todo(1, "other day", date(2025, 6, 11));
        store.toggle_completed(1);

        let texts: Vec<&str> = store
            .items_for_category_and_date(1, day)
            .iter()
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(texts, vec!["second", "third", "first"]);
    }

    #[test]
    fn achieved_count_only_counts_completed_in_month() {
        let mut store = TodoStore::default();
        store.add_todo(1, "june", date(2025, 6, 30));
        store.add_todo(1, "july", date(2025, 7, 1));
        store.add_todo(1, "june open", date(2025, 6, 2));
        store.toggle_completed(1);
        store.toggle_completed(2);

        assert_eq!(store.achieved_count_for_month("2025-06".parse().unwrap()), 1);
        assert_eq!(store.achieved_count_for_month("2025-07".parse().unwrap()), 1);
        assert_eq!(store.achieved_count_for_month("2024-06".parse().unwrap()), 0);
    }

    #[test]
    fn unachieved_by_date_has_no_zero_entries() {
        let mut store = TodoStore::default();
        let a = date(2025, 6, 10);
        let b = date(2025, 6, 11);
        store.add_todo(1, "a1", a);
        store.add_todo(2, "a2", a);
        store.add_todo(1, "b1", b);
        store.toggle_completed(3);

        let counts = store.unachieved_count_by_date();
        assert_eq!(counts.get(&a), Some(&2));
        assert!(!counts.contains_key(&b));
        let open = store.items().iter().filter(|item| !item.completed).count();
        assert_eq!(counts.values().sum::<usize>(), open);
    }

    #[test]
    fn today_unachieved_is_none_when_nothing_open() {
        let mut store = TodoStore::default();
        let today = date(2025, 6, 10);
        assert_eq!(store.today_unachieved_count(today), None);

        store.add_todo(1, "a", today);
        store.add_todo(1, "b", today);
        store.add_todo(1, "elsewhere", date(2025, 6, 9));
        assert_eq!(store.today_unachieved_count(today), Some(2));

        store.toggle_completed(1);
        store.toggle_completed(2);
        assert_eq!(store.today_unachieved_count(today), None);
    }

    #[test]
    fn all_completed_requires_at_least_one_item() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);
        assert!(!store.is_all_completed_for_date(day));

        store.add_todo(1, "a", day);
        store.add_todo(2, "b", day);
        store.toggle_completed(1);
        assert!(!store.is_all_completed_for_date(day));

        store.toggle_completed(2);
        assert!(store.is_all_completed_for_date(day));
    }

    #[test]
    fn completed_categories_are_distinct_in_first_seen_order() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);
        store.add_todo(3, "a", day);
        store.add_todo(1, "b", day);
        store.add_todo(3, "c", day);
        store.add_todo(2, "open", day);
        for id in 1..=3 {
            store.toggle_completed(id);
        }
        assert_eq!(store.completed_categories_for_date(day), vec![3, 1]);
    }

    #[test]
    fn deleting_detail_item_clears_sheet() {
        let mut store = TodoStore::default();
        let day = date(2025, 6, 10);
        store.add_todo(1, "a", day);
        store.add_todo(1, "b", day);

        assert!(store.select_for_detail(99).is_none());
        assert!(store.selected_for_detail().is_none());

        store.select_for_detail(2);
        store.delete_todo(1);
        assert_eq!(store.selected_for_detail().map(|item| item.id), Some(2));

        store.delete_todo(2);
        assert!(store.selected_for_detail().is_none());
    }
}
