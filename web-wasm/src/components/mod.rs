//! UI components

pub mod header;
pub mod record_cards;
pub mod record_grid;
pub mod search_box;
pub mod status_banner;
