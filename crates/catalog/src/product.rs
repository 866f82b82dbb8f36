use serde::{Deserialize, Deserializer, Serialize};

/// Reference to a product image (a URL or site-relative path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Catalog product as served by `/api/products`.
///
/// Products carry no identifier of their own; the article number is display
/// data. Field names follow the backend's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Article Number", default)]
    pub article_number: Option<u64>,
    #[serde(rename = "Niche Score", default)]
    pub niche_score: Option<i64>,
    #[serde(rename = "Market Volume (₽)", default)]
    pub market_volume: Option<i64>,
    #[serde(rename = "Price Segment (₽)", default)]
    pub price_segment: Option<String>,
    #[serde(rename = "Average Check (₽)", default)]
    pub average_check: Option<i64>,
    #[serde(rename = "Items with Sales (%)", default)]
    pub items_with_sales_pct: Option<f64>,
    #[serde(rename = "Growth (%)", default)]
    pub growth_pct: Option<f64>,
    #[serde(rename = "Units Sold", default)]
    pub units_sold: Option<f64>,
    #[serde(rename = "Top Product ACP (₽)", default)]
    pub top_product_acp: Option<f64>,
    #[serde(rename = "Top Product Units Sold", default)]
    pub top_product_units_sold: Option<f64>,
    #[serde(rename = "Top Product Price (₽)", default)]
    pub top_product_price: Option<f64>,
    #[serde(rename = "Remarks", default)]
    pub remarks: Option<String>,
    /// Ordered gallery; the backend sends one path, richer sources a list.
    #[serde(rename = "Image", deserialize_with = "one_or_many", default)]
    pub images: Vec<ImageRef>,
    #[serde(rename = "is_leader", deserialize_with = "flag", default)]
    pub is_leader: bool,
}

impl Product {
    /// Minimal product, mostly useful for tests and fixtures.
    pub fn new(category: impl Into<String>, image: impl Into<ImageRef>) -> Self {
        Self {
            category: category.into(),
            article_number: None,
            niche_score: None,
            market_volume: None,
            price_segment: None,
            average_check: None,
            items_with_sales_pct: None,
            growth_pct: None,
            units_sold: None,
            top_product_acp: None,
            top_product_units_sold: None,
            top_product_price: None,
            remarks: None,
            images: vec![image.into()],
            is_leader: false,
        }
    }

    /// Display name (the catalog uses the category as the product title).
    pub fn name(&self) -> &str {
        &self.category
    }

    /// Primary image: the first one of the gallery.
    pub fn image(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    /// Price shown on product cards.
    pub fn display_price(&self) -> Option<f64> {
        self.top_product_acp
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(ImageRef),
    Many(Vec<ImageRef>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(image)) => vec![image],
        Some(OneOrMany::Many(images)) => images,
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

// SQLite booleans arrive as 0/1 unless the backend converts them.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        None => false,
    })
}
