use contracts::domain::product::{Product, ProductWithAvailability};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    category_id: &str,
    description: &str,
    price: i64,
    unit: &str,
    stock: u32,
    low_stock_threshold: u32,
    is_featured: bool,
    image: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        category_id: category_id.to_string(),
        description: description.to_string(),
        price,
        unit: unit.to_string(),
        stock,
        low_stock_threshold,
        is_featured,
        image: image.to_string(),
    }
}

/// Shop catalog. Stock figures are the seed values; the backend's repository
/// owns the live numbers.
pub static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        // Folding beds
        product(
            "prod-001",
            "Orange Niwar Folding Bed",
            "Woven & Folding",
            "cat-001",
            "Durable folding bed with orange woven surface. Portable and comfortable.",
            2800,
            "piece",
            45,
            10,
            true,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456197215/VZ/MO/BM/113411322/wrwerwrwerwerwer-500x500.jpeg",
        ),
        product(
            "prod-002",
            "Single Niwar Folding Bed",
            "Woven & Folding",
            "cat-001",
            "Single size folding bed with high-strength woven surface.",
            2500,
            "piece",
            38,
            10,
            false,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456196991/TS/WN/JK/113411322/rewrwrwerwer-500x500.jpeg",
        ),
        product(
            "prod-003",
            "Polished Niwar Folding Bed",
            "Woven & Folding",
            "cat-001",
            "Premium polished frame folding bed with woven surface.",
            3200,
            "piece",
            28,
            8,
            true,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456196829/CZ/CK/ZH/113411322/ewrwerewrwerwerw-500x500.jpeg",
        ),
        product(
            "prod-004",
            "Blue Niwar Folding Bed",
            "Woven & Folding",
            "cat-001",
            "Blue colored woven folding bed with sturdy frame and easy storage.",
            2600,
            "piece",
            35,
            8,
            false,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456196666/LJ/GO/XI/113411322/wwerwerwrw-500x500.jpeg",
        ),
        product(
            "prod-017",
            "Green Niwar Folding Bed",
            "Woven & Folding",
            "cat-001",
            "Green colored woven folding bed with comfortable sleeping surface.",
            2700,
            "piece",
            32,
            8,
            false,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456196489/UE/PD/TP/113411322/432343223423-500x500.jpeg",
        ),
        product(
            "prod-018",
            "Floral Printed Folding Bed",
            "Woven & Folding",
            "cat-001",
            "Decorative folding bed with attractive floral print design.",
            2900,
            "piece",
            25,
            8,
            false,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456196337/JL/YY/MC/113411322/werwerwerwerw-500x500.jpeg",
        ),
        product(
            "prod-019",
            "Folding Bed Niwar",
            "Woven & Folding",
            "cat-001",
            "Standard niwar folding bed with reliable construction.",
            2400,
            "piece",
            40,
            10,
            false,
            "https://5.imimg.com/data5/IOS/Default/2024/11/466982590/FZ/IY/FT/113411322/product-jpeg-500x500.png",
        ),
        product(
            "prod-020",
            "Folding Cot Bed",
            "Woven & Folding",
            "cat-001",
            "Classic folding cot bed design with durable frame.",
            2300,
            "piece",
            42,
            10,
            false,
            "https://5.imimg.com/data5/ANDROID/Default/2020/9/CC/RC/CR/113411322/product-jpeg-500x500.jpg",
        ),
        product(
            "prod-021",
            "Single Folding Steel Cot",
            "Woven & Folding",
            "cat-001",
            "Single size steel cot with folding mechanism for easy storage.",
            2600,
            "piece",
            30,
            8,
            false,
            "https://5.imimg.com/data5/NSDMERP/Default/2022/12/IR/QT/QC/113411322/nylon-standing-cot-1670494972060-500x500.jpg",
        ),
        product(
            "prod-022",
            "Foldable Single Cot",
            "Woven & Folding",
            "cat-001",
            "Compact foldable single cot perfect for small spaces.",
            2200,
            "piece",
            38,
            10,
            false,
            "https://5.imimg.com/data5/ANDROID/Default/2025/3/493894656/JX/BI/TQ/113411322/product-jpeg-1000x1000.jpeg",
        ),
        product(
            "prod-023",
            "Foldable Double Cot",
            "Woven & Folding",
            "cat-001",
            "Spacious double size foldable cot for comfortable sleeping.",
            3500,
            "piece",
            20,
            6,
            true,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456196212/BX/OF/BR/113411322/werrwerwe-1000x1000.jpeg",
        ),
        // S-type chairs
        product(
            "prod-005",
            "Wire Netted S Type Chair",
            "Steel Furniture",
            "cat-002",
            "Ergonomic S-shaped chair with wire netted back for office and visitor seating.",
            1850,
            "piece",
            55,
            12,
            true,
            "https://5.imimg.com/data5/SELLER/Default/2024/10/456197410/XC/WN/II/113411322/wwerwerwerwer-500x500.jpeg",
        ),
        product(
            "prod-006",
            "Low Back S Type Chair",
            "Steel Furniture",
            "cat-002",
            "Compact S type chair with low back support, ideal for waiting areas.",
            1650,
            "piece",
            48,
            10,
            false,
            "/images/products/low-back-chair.jpg",
        ),
        product(
            "prod-007",
            "S Type Chair",
            "Steel Furniture",
            "cat-002",
            "Standard S type visitor chair with durable steel frame and comfortable seating.",
            1750,
            "piece",
            52,
            10,
            true,
            "/images/products/s-type-standard.jpg",
        ),
        product(
            "prod-008",
            "Rolling Chair For Office",
            "Steel Furniture",
            "cat-002",
            "Office rolling chair with smooth wheels and adjustable height.",
            3200,
            "piece",
            35,
            8,
            true,
            "/images/products/rolling-office-chair.jpg",
        ),
        // Walkers and dining sets
        product(
            "prod-009",
            "Mild Steel Movable Walker",
            "Steel Furniture",
            "cat-002",
            "Medical grade movable walker made of mild steel for mobility support.",
            2800,
            "piece",
            25,
            6,
            false,
            "/images/products/walker.jpg",
        ),
        product(
            "prod-010",
            "S Type Visitor Chair",
            "Dining Sets",
            "cat-004",
            "S type visitor chair perfect for dining rooms and waiting areas.",
            1800,
            "piece",
            40,
            10,
            false,
            "/images/products/s-visitor-chair.jpg",
        ),
        product(
            "prod-011",
            "2 Seater Teak Wood Dining Table Set",
            "Dining Sets",
            "cat-004",
            "Compact 2-seater dining table set made from premium teak wood.",
            12500,
            "set",
            18,
            5,
            true,
            "/images/products/2-seater-teak.jpg",
        ),
        product(
            "prod-012",
            "Polished Teak Wood Dining Table Set",
            "Dining Sets",
            "cat-004",
            "Beautifully polished teak wood dining set with elegant finish.",
            18500,
            "set",
            12,
            4,
            true,
            "/images/products/polished-teak-dining.jpg",
        ),
        product(
            "prod-013",
            "Maharaja Teak Wood Dining Table Set",
            "Dining Sets",
            "cat-004",
            "Premium maharaja style teak wood dining set with intricate design.",
            28500,
            "set",
            8,
            3,
            true,
            "/images/products/maharaja-dining.jpg",
        ),
        // Wooden chairs and tables
        product(
            "prod-014",
            "Antique Teak Wood Chair",
            "Wooden Furniture",
            "cat-003",
            "Classic antique teak wood chair with traditional craftsmanship.",
            4500,
            "piece",
            22,
            6,
            false,
            "/images/products/antique-teak-chair.jpg",
        ),
        product(
            "prod-015",
            "S Type Steel Chair",
            "Wooden Furniture",
            "cat-003",
            "Durable S type chair with steel frame and wooden accents.",
            1900,
            "piece",
            45,
            10,
            false,
            "/images/products/s-type-steel.jpg",
        ),
        product(
            "prod-016",
            "Rectangular Teak Wood Table",
            "Wooden Furniture",
            "cat-003",
            "Large rectangular teak wood table perfect for dining or conference rooms.",
            9800,
            "piece",
            12,
            4,
            true,
            "/images/products/rect-teak-table.jpg",
        ),
    ]
});

/// All products with availability computed on read.
pub fn all() -> Vec<ProductWithAvailability> {
    PRODUCTS.iter().cloned().map(Into::into).collect()
}

/// Case-insensitive category filter; `"All"` or an empty string selects
/// everything.
pub fn by_category(category: &str) -> Vec<ProductWithAvailability> {
    if category.is_empty() || category.eq_ignore_ascii_case("All") {
        return all();
    }
    PRODUCTS
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(category))
        .cloned()
        .map(Into::into)
        .collect()
}

pub fn featured() -> Vec<ProductWithAvailability> {
    PRODUCTS
        .iter()
        .filter(|p| p.is_featured)
        .cloned()
        .map(Into::into)
        .collect()
}

pub fn low_stock() -> Vec<ProductWithAvailability> {
    PRODUCTS
        .iter()
        .filter(|p| p.is_low_stock())
        .cloned()
        .map(Into::into)
        .collect()
}

pub fn out_of_stock() -> Vec<ProductWithAvailability> {
    PRODUCTS
        .iter()
        .filter(|p| p.is_out_of_stock())
        .cloned()
        .map(Into::into)
        .collect()
}

/// Linear scan by id.
pub fn by_id(id: &str) -> Option<ProductWithAvailability> {
    PRODUCTS.iter().find(|p| p.id == id).cloned().map(Into::into)
}

/// Case-insensitive substring match on name or description.
pub fn search(query: &str) -> Vec<ProductWithAvailability> {
    let query = query.to_lowercase();
    PRODUCTS
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
        })
        .cloned()
        .map(Into::into)
        .collect()
}
