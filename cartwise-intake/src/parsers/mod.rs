pub mod cart_csv;
pub mod cart_json;
pub mod profile_json;
