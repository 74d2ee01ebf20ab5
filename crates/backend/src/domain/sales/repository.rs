use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use contracts::domain::sale::Sale;
use once_cell::sync::Lazy;

static STORE: Lazy<RwLock<Vec<Sale>>> =
    Lazy::new(|| RwLock::new(storefront::fixtures::sales::last_30_days()));

fn read_store() -> anyhow::Result<std::sync::RwLockReadGuard<'static, Vec<Sale>>> {
    STORE
        .read()
        .map_err(|_| anyhow::anyhow!("sales store poisoned"))
}

fn write_store() -> anyhow::Result<std::sync::RwLockWriteGuard<'static, Vec<Sale>>> {
    STORE
        .write()
        .map_err(|_| anyhow::anyhow!("sales store poisoned"))
}

pub fn insert(sale: Sale) -> anyhow::Result<Sale> {
    write_store()?.push(sale.clone());
    Ok(sale)
}

/// Newest first.
pub fn list_recent(limit: usize) -> anyhow::Result<Vec<Sale>> {
    let mut sales = read_store()?.clone();
    sales.sort_by(|a, b| b.sold_at.cmp(&a.sold_at));
    sales.truncate(limit);
    Ok(sales)
}

pub fn list_since(cutoff: DateTime<Utc>) -> anyhow::Result<Vec<Sale>> {
    Ok(read_store()?
        .iter()
        .filter(|s| s.sold_at >= cutoff)
        .cloned()
        .collect())
}

/// The window the product-health view aggregates over.
pub fn list_last_30_days() -> anyhow::Result<Vec<Sale>> {
    list_since(Utc::now() - Duration::days(30))
}
