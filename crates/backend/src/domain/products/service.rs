use contracts::domain::product::ProductWithAvailability;

use super::repository;

/// Catalog read with availability computed per product.
pub fn list_all() -> anyhow::Result<Vec<ProductWithAvailability>> {
    Ok(repository::list_all()?.into_iter().map(Into::into).collect())
}

/// Case-insensitive category filter; `"All"` or empty selects everything.
pub fn list_by_category(category: &str) -> anyhow::Result<Vec<ProductWithAvailability>> {
    let products = repository::list_all()?;
    if category.is_empty() || category.eq_ignore_ascii_case("All") {
        return Ok(products.into_iter().map(Into::into).collect());
    }
    Ok(products
        .into_iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .map(Into::into)
        .collect())
}

pub fn list_featured() -> anyhow::Result<Vec<ProductWithAvailability>> {
    Ok(repository::list_all()?
        .into_iter()
        .filter(|p| p.is_featured)
        .map(Into::into)
        .collect())
}

pub fn list_low_stock() -> anyhow::Result<Vec<ProductWithAvailability>> {
    Ok(repository::list_all()?
        .into_iter()
        .filter(|p| p.is_low_stock())
        .map(Into::into)
        .collect())
}

pub fn list_out_of_stock() -> anyhow::Result<Vec<ProductWithAvailability>> {
    Ok(repository::list_all()?
        .into_iter()
        .filter(|p| p.is_out_of_stock())
        .map(Into::into)
        .collect())
}

pub fn get_by_id(id: &str) -> anyhow::Result<Option<ProductWithAvailability>> {
    Ok(repository::get_by_id(id)?.map(Into::into))
}

/// Case-insensitive substring search on name or description.
pub fn search(query: &str) -> anyhow::Result<Vec<ProductWithAvailability>> {
    let query = query.to_lowercase();
    Ok(repository::list_all()?
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
        })
        .map(Into::into)
        .collect())
}

/// Admin stock adjustment.
pub fn set_stock(id: &str, stock: u32) -> anyhow::Result<Option<ProductWithAvailability>> {
    Ok(repository::set_stock(id, stock)?.map(Into::into))
}
