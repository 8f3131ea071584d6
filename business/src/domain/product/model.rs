/// Catalog entry as listed on the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub price: i64,
    pub brand: Option<String>,
}

impl ProductSummary {
    /// Case-insensitive match of the keyword against name and brand.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .brand
                .as_deref()
                .is_some_and(|brand| brand.to_lowercase().contains(&needle))
    }
}

/// A purchasable variant of a product (color, size or storage combination).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAttribute {
    pub id: i64,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: i64,
    pub stock: Option<u32>,
    pub image: Option<String>,
}

impl ProductAttribute {
    pub fn in_stock(&self) -> bool {
        self.stock.is_none_or(|stock| stock > 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub images: Vec<String>,
    pub attributes: Vec<ProductAttribute>,
}

impl ProductDetail {
    /// Lowest attribute price, if the product has any attribute.
    pub fn starting_price(&self) -> Option<i64> {
        self.attributes.iter().map(|att| att.price).min()
    }

    pub fn attribute(&self, id: i64) -> Option<&ProductAttribute> {
        self.attributes.iter().find(|att| att.id == id)
    }
}
