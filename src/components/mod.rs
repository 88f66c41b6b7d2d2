pub mod genre_picks;
pub mod movie_card;
pub mod movie_modal;
pub mod navbar;
pub mod search_box;
pub mod share_menu;
pub mod theme_toggle;
pub mod toast_stack;
pub mod view_controls;
