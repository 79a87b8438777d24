pub mod filter_panel;
pub mod loading_overlay;
pub mod pagination_controls;
pub mod stat_card;
