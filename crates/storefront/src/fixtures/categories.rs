use contracts::domain::category::Category;
use once_cell::sync::Lazy;

fn category(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    product_count: u32,
    color: &str,
) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        product_count,
        color: color.to_string(),
    }
}

pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        category(
            "cat-001",
            "Woven & Folding",
            "grid",
            "Folding beds with woven surfaces - Orange, Single, Polished, and Blue Niwar variants",
            11,
            "#2D473E",
        ),
        category(
            "cat-002",
            "Steel Furniture",
            "chair",
            "S-type chairs, rolling office chairs, and mild steel movable walkers",
            5,
            "#4A90D9",
        ),
        category(
            "cat-003",
            "Wooden Furniture",
            "table",
            "Antique teak wood chairs, S type steel chairs, and rectangular teak wood tables",
            3,
            "#8B4513",
        ),
        category(
            "cat-004",
            "Dining Sets",
            "dining",
            "Premium teak wood dining table sets - 2 Seater, Polished, and Maharaja styles",
            4,
            "#C17767",
        ),
    ]
});

pub fn all() -> Vec<Category> {
    CATEGORIES.clone()
}

pub fn by_id(id: &str) -> Option<Category> {
    CATEGORIES.iter().find(|c| c.id == id).cloned()
}

pub fn by_name(name: &str) -> Option<Category> {
    CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .cloned()
}
