//! Building blocks of the dashboard: the coin list, the detail panel and
//! the pieces they are made of.
pub mod coin_list;
pub mod detail_panel;
pub mod empty_state;
pub mod line_chart;
pub mod pico;
pub mod timeframe_selector;
