//! Item Endpoints
//!
//! Wardrobe item calls: listing, upload, and the per-item mutations.

use serde::Serialize;
use web_sys::{File, FormData};

use crate::models::Item;
use crate::vocab;

#[derive(Serialize)]
struct ItemIdBody {
    item_id: u32,
}

#[derive(Serialize)]
struct UpdateCategoryBody<'a> {
    item_id: u32,
    category: &'a str,
}

#[derive(Serialize)]
struct FavoriteBody {
    item_id: u32,
    favorite: bool,
}

pub async fn list_items() -> Result<Vec<Item>, String> {
    super::get("items").await
}

/// Upload a photo as multipart field `image`
pub async fn upload_image(file: &File) -> Result<(), String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("image", file)
        .map_err(|e| format!("{e:?}"))?;
    super::post_form("upload", &form).await
}

/// Reassign an item's category; only vocabulary members are sent
pub async fn update_category(item_id: u32, category: &str) -> Result<(), String> {
    if !vocab::is_garment_type(category) {
        return Err(format!("not a garment type: {category}"));
    }
    super::post("update_category", &UpdateCategoryBody { item_id, category }).await
}

pub async fn mark_worn(item_id: u32) -> Result<(), String> {
    super::post("mark_worn", &ItemIdBody { item_id }).await
}

/// Set the favorited flag to an explicit desired state
pub async fn set_favorite(item_id: u32, favorite: bool) -> Result<(), String> {
    super::post("favorite", &FavoriteBody { item_id, favorite }).await
}

pub async fn delete_item(item_id: u32) -> Result<(), String> {
    super::post("delete_item", &ItemIdBody { item_id }).await
}

/// Static image path for an item, served outside the `/api` prefix
pub fn image_url(item_id: u32) -> String {
    format!("/image/{item_id}")
}
