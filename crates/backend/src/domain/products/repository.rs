use std::sync::RwLock;

use contracts::domain::product::Product;
use once_cell::sync::Lazy;

/// Live catalog. Seeded from the bundled fixture set at first touch; admin
/// mutations (sales, stock edits) update this store and survive for the
/// lifetime of the process, which is the whole persistence story here.
static STORE: Lazy<RwLock<Vec<Product>>> =
    Lazy::new(|| RwLock::new(storefront::fixtures::products::PRODUCTS.clone()));

fn read_store() -> anyhow::Result<std::sync::RwLockReadGuard<'static, Vec<Product>>> {
    STORE
        .read()
        .map_err(|_| anyhow::anyhow!("products store poisoned"))
}

fn write_store() -> anyhow::Result<std::sync::RwLockWriteGuard<'static, Vec<Product>>> {
    STORE
        .write()
        .map_err(|_| anyhow::anyhow!("products store poisoned"))
}

pub fn list_all() -> anyhow::Result<Vec<Product>> {
    Ok(read_store()?.clone())
}

pub fn get_by_id(id: &str) -> anyhow::Result<Option<Product>> {
    Ok(read_store()?.iter().find(|p| p.id == id).cloned())
}

/// Set the absolute stock level. Returns the updated product, or `None` when
/// the id is unknown.
pub fn set_stock(id: &str, stock: u32) -> anyhow::Result<Option<Product>> {
    let mut store = write_store()?;
    match store.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.stock = stock;
            Ok(Some(product.clone()))
        }
        None => Ok(None),
    }
}

/// Decrement stock by a sold quantity. Fails when the quantity exceeds what
/// is on hand, so stock can never go negative.
pub fn decrement_stock(id: &str, quantity: u32) -> anyhow::Result<Option<Product>> {
    let mut store = write_store()?;
    match store.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            if quantity > product.stock {
                anyhow::bail!(
                    "Cannot sell {} units of {}: only {} in stock",
                    quantity,
                    product.id,
                    product.stock
                );
            }
            product.stock -= quantity;
            Ok(Some(product.clone()))
        }
        None => Ok(None),
    }
}

pub fn count_low_stock() -> anyhow::Result<u32> {
    Ok(read_store()?.iter().filter(|p| p.is_low_stock()).count() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_refuses_to_oversell() {
        let before = get_by_id("prod-013").unwrap().unwrap().stock;
        assert!(decrement_stock("prod-013", before + 1).is_err());
        // Failed decrement must not change the stored value.
        let after = get_by_id("prod-013").unwrap().unwrap().stock;
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_product_decrements_to_none() {
        assert!(decrement_stock("prod-999", 1).unwrap().is_none());
    }
}
