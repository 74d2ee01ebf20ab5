use contracts::domain::category::Category;

/// Categories are static catalog data; there is no mutable store behind
/// them.
pub fn list_all() -> Vec<Category> {
    storefront::fixtures::categories::all()
}

pub fn get_by_id(id: &str) -> Option<Category> {
    storefront::fixtures::categories::by_id(id)
}
