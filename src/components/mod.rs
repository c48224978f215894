//! UI Components
//!
//! Leptos views and their building blocks.

mod counter_view;
mod nav_bar;
mod quote_list;
mod quotes_view;
mod search_form;

pub use counter_view::CounterView;
pub use nav_bar::NavBar;
pub use quote_list::QuoteList;
pub use quotes_view::QuotesView;
pub use search_form::SearchForm;
