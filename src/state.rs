use crate::calendar::{MonthView, YearMonth};
use crate::models::{
    CalendarDay, CalendarWeekView, Category, CategoryId, KeyEvent, MonthNavigation, TodoItem,
    WidgetSnapshot,
};
use crate::storage::LocalStorage;
use crate::store::TodoStore;
use crate::todo_list::{self, CategoryInput};
use chrono::{Datelike, NaiveDate};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one mounted widget owns. Only `todos` outlives the session.
#[derive(Debug, Clone)]
pub struct Widget {
    pub todos: TodoStore,
    pub selected_date: NaiveDate,
    pub month: MonthView,
    pub input: CategoryInput,
}

impl Widget {
    pub fn new(todos: TodoStore, today: NaiveDate) -> Self {
        Self {
            todos,
            selected_date: today,
            month: MonthView::new(today),
            input: CategoryInput::default(),
        }
    }

    /// Changes the selected date only; the viewed month stays where it is.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn navigate(&mut self, direction: MonthNavigation, today: NaiveDate) {
        self.month.navigate(direction, today);
    }

    pub fn add_todo(
        &mut self,
        category_id: CategoryId,
        text: &str,
        date: Option<NaiveDate>,
    ) -> Option<TodoItem> {
        let date = date.unwrap_or(self.selected_date);
        self.todos.add_todo(category_id, text, date)
    }

    pub fn submit_key(&mut self, event: &KeyEvent) -> Option<TodoItem> {
        let submission = self.input.handle_key(event)?;
        self.todos
            .add_todo(submission.category_id, &submission.text, self.selected_date)
    }

    pub fn snapshot(&self, today: NaiveDate) -> WidgetSnapshot {
        let unachieved = self.todos.unachieved_count_by_date();
        let weeks = self
            .month
            .weeks(self.selected_date, today)
            .into_iter()
            .map(|week| CalendarWeekView {
                week: week.week,
                days: week
                    .cells
                    .into_iter()
                    .map(|cell| CalendarDay {
                        day: cell.date.day(),
                        unachieved: unachieved.get(&cell.date).copied(),
                        all_completed: self.todos.is_all_completed_for_date(cell.date),
                        colors: self
                            .todos
                            .completed_categories_for_date(cell.date)
                            .into_iter()
                            .filter_map(Category::find)
                            .map(|category| category.color_token)
                            .collect(),
                        date: cell.date,
                        is_other_month: cell.is_other_month,
                        is_today: cell.is_today,
                        is_selected: cell.is_selected,
                    })
                    .collect(),
            })
            .collect();

        WidgetSnapshot {
            today,
            selected_date: self.selected_date,
            month: self.month.label(),
            achieved_this_month: self
                .todos
                .achieved_count_for_month(YearMonth::of(self.selected_date)),
            today_unachieved: self.todos.today_unachieved_count(today),
            weeks,
            sections: todo_list::sections(&self.todos, &self.input, self.selected_date),
            open_category: self.input.open_category(),
            detail: self.todos.selected_for_detail().cloned(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub storage: LocalStorage,
    pub widget: Arc<Mutex<Widget>>,
}

impl AppState {
    pub fn new(storage: LocalStorage, widget: Widget) -> Self {
        Self {
            storage,
            widget: Arc::new(Mutex::new(widget)),
        }
    }
}
