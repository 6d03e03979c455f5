use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image shown for products created without one.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x400/CCCCCC/000000?text=No+Image";

/// A catalog product, as stored locally and as a row in the remote table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub features: Vec<String>,
    /// Assigned by the remote table; never sent on writes.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Fills in the primary image and image list so that every product has
    /// at least one image.
    pub fn normalized(mut self) -> Self {
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE.to_string();
        }
        if self.images.is_empty() {
            self.images = vec![self.image.clone()];
        }
        self
    }

    /// Returns the editable fields of this product.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            images: Some(self.images.clone()),
            features: self.features.clone(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.chars().count()))?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Category: {}", self.category)?;

        if !self.description.is_empty() {
            writeln!(f, "\n{}", self.description)?;
        }

        if !self.features.is_empty() {
            writeln!(f, "\nFeatures:")?;
            for feature in &self.features {
                writeln!(f, "  - {}", feature)?;
            }
        }

        writeln!(f, "\nImages:")?;
        for image in &self.images {
            writeln!(f, "  - {}", image)?;
        }

        if let Some(created_at) = self.created_at {
            writeln!(f, "\nCreated: {}", created_at.format("%Y-%m-%d %H:%M"))?;
        }

        Ok(())
    }
}

/// A product without an identifier: the input to add and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Builds the normalized product stored under `id`.
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            category: self.category,
            description: self.description,
            image: self.image,
            images: self.images.unwrap_or_default(),
            features: self.features,
            created_at: None,
        }
        .normalized()
    }
}

// Remote rows may carry `null` for list columns.
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_without_images_uses_primary_image() {
        let product = ProductDraft::new("X", "Razors")
            .with_image("a.png")
            .into_product("1");

        assert_eq!(product.images, vec!["a.png".to_string()]);
        assert_eq!(product.id, "1");
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_draft_with_empty_images_uses_primary_image() {
        let product = ProductDraft::new("X", "Razors")
            .with_image("a.png")
            .with_images(Vec::new())
            .into_product("1");

        assert_eq!(product.images, vec!["a.png".to_string()]);
    }

    #[test]
    fn test_draft_keeps_explicit_images() {
        let images = vec!["b.png".to_string(), "c.png".to_string()];
        let product = ProductDraft::new("X", "Razors")
            .with_image("a.png")
            .with_images(images.clone())
            .into_product("1");

        assert_eq!(product.images, images);
        assert_eq!(product.image, "a.png");
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let product = ProductDraft::new("X", "Stationery").into_product("1");

        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn test_deserialize_remote_row_with_nulls() {
        let json = r#"{
            "id": "7",
            "name": "Mahfil Milan",
            "category": "Agarbatti (Incense Sticks)",
            "description": "Incense",
            "image": "/m.jpg",
            "images": null,
            "features": null,
            "created_at": "2025-03-01T10:00:00+00:00"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.images.is_empty());
        assert!(product.features.is_empty());
        assert!(product.created_at.is_some());

        let product = product.normalized();
        assert_eq!(product.images, vec!["/m.jpg".to_string()]);
    }

    #[test]
    fn test_serialize_skips_created_at() {
        let mut product = ProductDraft::new("X", "Razors")
            .with_image("a.png")
            .into_product("1");
        product.created_at = Some(Utc::now());

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("created_at").is_none());
        assert_eq!(value["images"][0], "a.png");
    }

    #[test]
    fn test_to_draft_round_trips_fields() {
        let product = ProductDraft::new("X", "Razors")
            .with_description("Sharp")
            .with_image("a.png")
            .with_features(vec!["Durable".to_string()])
            .into_product("9");

        let again = product.to_draft().into_product("9");
        assert_eq!(again, product);
    }

    #[test]
    fn test_display_lists_features() {
        let product = ProductDraft::new("Turk Razor", "Razors")
            .with_image("/turk.png")
            .with_features(vec!["Comfortable grip".to_string()])
            .into_product("52");

        let output = product.to_string();
        assert!(output.contains("Turk Razor"));
        assert!(output.contains("Category: Razors"));
        assert!(output.contains("  - Comfortable grip"));
    }
}
