pub mod category_tabs;
pub mod course_card;
pub mod empty_state;
pub mod footer;
pub mod gallery_grid;
pub mod load_more;
pub mod mentor_card;
pub mod navbar;
pub mod promo_popup;
pub mod rating_dialog;
pub mod review_board;
pub mod search_input;
pub mod video_embed;
