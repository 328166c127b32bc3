//! Built-in demo catalog.

use crate::catalog::Product;
use crate::money::Money;

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{}/{}?w=300&h=200&fit=crop", IMAGE_BASE, photo)
}

/// The twelve demo products the storefront ships with.
pub(crate) fn demo_products() -> Vec<Product> {
    vec![
        Product::new("1", "Wireless Headphones", Money::usd(199.99))
            .with_description("High-quality wireless headphones with noise cancellation")
            .with_image(image("photo-1505740420928-5e560c06d30e"))
            .with_category("Electronics")
            .with_rating(4.8),
        Product::new("2", "Smart Watch", Money::usd(299.99))
            .with_description("Feature-rich smartwatch with health monitoring")
            .with_image(image("photo-1523275335684-37898b6baf30"))
            .with_category("Electronics")
            .with_rating(3.2),
        Product::new("3", "Running Shoes", Money::usd(129.99))
            .with_description("Comfortable running shoes for all terrains")
            .with_image(image("photo-1542291026-7eec264c27ff"))
            .with_category("Sports")
            .with_rating(4.9),
        Product::new("4", "Coffee Maker", Money::usd(89.99))
            .with_description("Automatic coffee maker with programmable settings")
            .with_image(image("photo-1559056199-641a0ac8b55e"))
            .with_category("Home")
            .with_rating(2.8)
            .out_of_stock(),
        Product::new("5", "Laptop Stand", Money::usd(49.99))
            .with_description("Adjustable laptop stand for better ergonomics")
            .with_image(image("photo-1527864550417-7fd91fc51a46"))
            .with_category("Office")
            .with_rating(4.6),
        Product::new("6", "Yoga Mat", Money::usd(39.99))
            .with_description("Non-slip yoga mat for home workouts")
            .with_image(image("photo-1544367567-0f2fcb009e0b"))
            .with_category("Sports")
            .with_rating(3.7),
        Product::new("7", "Bluetooth Speaker", Money::usd(79.99))
            .with_description("Portable wireless speaker with deep bass")
            .with_image(image("photo-1608043152269-423dbba4e7e1"))
            .with_category("Electronics")
            .with_rating(4.1),
        Product::new("8", "Gaming Mouse", Money::usd(59.99))
            .with_description("High-precision gaming mouse with RGB lighting")
            .with_image(image("photo-1527864550417-7fd91fc51a46"))
            .with_category("Electronics")
            .with_rating(2.3),
        Product::new("9", "Desk Lamp", Money::usd(34.99))
            .with_description("LED desk lamp with adjustable brightness")
            .with_image(image("photo-1507003211169-0a1dd7228f2d"))
            .with_category("Office")
            .with_rating(4.4),
        Product::new("10", "Water Bottle", Money::usd(24.99))
            .with_description("Insulated stainless steel water bottle")
            .with_image(image("photo-1602143407151-7111542de6e8"))
            .with_category("Sports")
            .with_rating(1.9)
            .out_of_stock(),
        Product::new("11", "Mechanical Keyboard", Money::usd(149.99))
            .with_description("RGB mechanical keyboard with tactile switches")
            .with_image(image("photo-1541140532154-b024d705b90a"))
            .with_category("Electronics")
            .with_rating(4.7),
        Product::new("12", "Throw Pillow", Money::usd(19.99))
            .with_description("Decorative throw pillow for home decor")
            .with_image(image("photo-1586023492125-27b2c045efd7"))
            .with_category("Home")
            .with_rating(3.1),
    ]
}
