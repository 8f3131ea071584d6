use serde::Deserialize;

use business::domain::product::model::{ProductAttribute, ProductDetail, ProductSummary};

use crate::serde_helpers::amount;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeDto {
    #[serde(default)]
    pub products: Vec<ProductSummaryDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "thumbnail")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub price: i64,
    pub brand: Option<String>,
}

impl ProductSummaryDto {
    pub fn into_domain(self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name,
            image: self.image,
            price: self.price,
            brand: self.brand,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributeDto {
    pub id: i64,
    pub color: Option<String>,
    pub size: Option<String>,
    #[serde(default, deserialize_with = "amount")]
    pub price: i64,
    pub stock: Option<i64>,
    pub image: Option<String>,
}

impl ProductAttributeDto {
    pub fn into_domain(self) -> ProductAttribute {
        ProductAttribute {
            id: self.id,
            color: self.color,
            size: self.size,
            price: self.price,
            stock: self.stock.map(|stock| u32::try_from(stock).unwrap_or(0)),
            image: self.image,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, alias = "productAtts")]
    pub attributes: Vec<ProductAttributeDto>,
}

impl ProductDetailDto {
    pub fn into_domain(self) -> ProductDetail {
        ProductDetail {
            id: self.id,
            name: self.name,
            description: self.description,
            brand: self.brand,
            images: self.images,
            attributes: self
                .attributes
                .into_iter()
                .map(ProductAttributeDto::into_domain)
                .collect(),
        }
    }
}
