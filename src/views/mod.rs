pub mod category_view;
pub mod year_view;
