use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type TodoId = u64;
pub type CategoryId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub category_id: CategoryId,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub display_name: &'static str,
    pub color_token: &'static str,
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        id: 1,
        display_name: "Study",
        color_token: "var(--category-1-color)",
    },
    Category {
        id: 2,
        display_name: "Hobby",
        color_token: "var(--category-2-color)",
    },
    Category {
        id: 3,
        display_name: "Appointment",
        color_token: "var(--category-3-color)",
    },
    Category {
        id: 4,
        display_name: "Other",
        color_token: "var(--category-4-color)",
    },
];

impl Category {
    pub fn find(id: CategoryId) -> Option<&'static Category> {
        CATEGORIES.iter().find(|category| category.id == id)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    pub category_id: CategoryId,
    pub text: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct TodoQuery {
    pub category_id: CategoryId,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub month: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNavigation {
    Add,
    Subtract,
    Today,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: MonthNavigation,
}

#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ToggleInputRequest {
    pub category_id: CategoryId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_composing: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub month: String,
    pub achieved_count: usize,
    pub today_unachieved: Option<usize>,
    pub unachieved_by_date: BTreeMap<NaiveDate, usize>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub is_other_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub unachieved: Option<usize>,
    pub all_completed: bool,
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CalendarWeekView {
    pub week: i64,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Serialize)]
pub struct TodoSection {
    pub category: Category,
    pub input_open: bool,
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Serialize)]
pub struct WidgetSnapshot {
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
    pub month: String,
    pub achieved_this_month: usize,
    pub today_unachieved: Option<usize>,
    pub weeks: Vec<CalendarWeekView>,
    pub sections: Vec<TodoSection>,
    pub open_category: Option<CategoryId>,
    pub detail: Option<TodoItem>,
}
