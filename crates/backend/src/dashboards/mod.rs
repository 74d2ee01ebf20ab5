pub mod product_health;
