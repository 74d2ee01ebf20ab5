use std::sync::RwLock;

use contracts::domain::review::Review;
use once_cell::sync::Lazy;

static STORE: Lazy<RwLock<Vec<Review>>> =
    Lazy::new(|| RwLock::new(storefront::fixtures::reviews::all()));

fn read_store() -> anyhow::Result<std::sync::RwLockReadGuard<'static, Vec<Review>>> {
    STORE
        .read()
        .map_err(|_| anyhow::anyhow!("reviews store poisoned"))
}

fn write_store() -> anyhow::Result<std::sync::RwLockWriteGuard<'static, Vec<Review>>> {
    STORE
        .write()
        .map_err(|_| anyhow::anyhow!("reviews store poisoned"))
}

/// Newest first by review date.
pub fn list_all() -> anyhow::Result<Vec<Review>> {
    let mut reviews = read_store()?.clone();
    reviews.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(reviews)
}

pub fn insert(review: Review) -> anyhow::Result<Review> {
    write_store()?.push(review.clone());
    Ok(review)
}

/// Increment the helpful counter. Returns the updated review, or `None`
/// when the id is unknown.
pub fn mark_helpful(id: &str) -> anyhow::Result<Option<Review>> {
    let mut store = write_store()?;
    match store.iter_mut().find(|r| r.id == id) {
        Some(review) => {
            review.helpful_count += 1;
            Ok(Some(review.clone()))
        }
        None => Ok(None),
    }
}
