//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod error_banner;
mod upload_form;
mod wardrobe_view;
mod item_card;
mod category_select;
mod recommend_form;
mod outfits_view;
mod history_view;
mod delete_confirm_button;

pub use nav_bar::NavBar;
pub use error_banner::ErrorBanner;
pub use upload_form::UploadForm;
pub use wardrobe_view::WardrobeView;
pub use item_card::ItemCard;
pub use category_select::CategorySelect;
pub use recommend_form::RecommendForm;
pub use outfits_view::OutfitsView;
pub use history_view::HistoryView;
pub use delete_confirm_button::DeleteConfirmButton;
