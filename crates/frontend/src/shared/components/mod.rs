pub mod error_box;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod sortable_header_cell;
pub mod stat_card;
pub mod table_support;
