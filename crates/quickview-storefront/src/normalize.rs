//! Normalization from storefront wire types to [`quickview_core::Product`].

use quickview_core::{Money, Product, ProductOption, Variant, VariantId};

use crate::error::StorefrontError;
use crate::types::{StorefrontOption, StorefrontProduct, StorefrontVariant};

/// Normalizes a raw [`StorefrontProduct`] into a [`Product`].
///
/// Options are ordered by their reported `position` (stable for ties and
/// missing positions), so slot `n` of the result lines up with `option{n+1}`
/// on every variant.
///
/// # Errors
///
/// Returns [`StorefrontError::Normalization`] if the product has no variants.
pub fn normalize_product(product: StorefrontProduct) -> Result<Product, StorefrontError> {
    if product.variants.is_empty() {
        return Err(StorefrontError::Normalization {
            handle: product.handle,
            reason: "product has no variants".into(),
        });
    }

    let mut options = product.options;
    options.sort_by_key(|o| o.position.unwrap_or(u8::MAX));

    Ok(Product {
        id: product.id,
        handle: product.handle,
        title: product.title,
        description: product.description.filter(|d| !d.trim().is_empty()),
        price: Money::from_minor(product.price),
        featured_image: product.featured_image.as_deref().and_then(absolute_image_url),
        options: options.into_iter().map(normalize_option).collect(),
        variants: product.variants.into_iter().map(normalize_variant).collect(),
    })
}

fn normalize_option(option: StorefrontOption) -> ProductOption {
    ProductOption {
        name: option.name,
        values: option.values,
    }
}

fn normalize_variant(variant: StorefrontVariant) -> Variant {
    Variant {
        id: VariantId(variant.id),
        title: variant.title,
        options: [variant.option1, variant.option2, variant.option3],
        price: variant.price.map(Money::from_minor),
        available: variant.available,
    }
}

/// Adds an `https:` scheme to protocol-relative CDN URLs; empty strings
/// become `None`.
fn absolute_image_url(src: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        None
    } else if src.starts_with("//") {
        Some(format!("https:{src}"))
    } else {
        Some(src.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_variant(id: u64, option1: &str, option2: Option<&str>) -> StorefrontVariant {
        StorefrontVariant {
            id,
            title: match option2 {
                Some(o2) => format!("{option1} / {o2}"),
                None => option1.to_owned(),
            },
            option1: Some(option1.to_owned()),
            option2: option2.map(str::to_owned),
            option3: None,
            price: Some(2500),
            available: true,
        }
    }

    fn make_product(variants: Vec<StorefrontVariant>) -> StorefrontProduct {
        StorefrontProduct {
            id: 9_001,
            title: "Classic Tee".to_owned(),
            handle: "classic-tee".to_owned(),
            description: Some("<p>Soft cotton.</p>".to_owned()),
            price: 2500,
            featured_image: Some("//cdn.example.com/tee.jpg".to_owned()),
            options: vec![
                StorefrontOption {
                    name: "Size".to_owned(),
                    position: Some(2),
                    values: vec!["Small".to_owned(), "Medium".to_owned()],
                },
                StorefrontOption {
                    name: "Color".to_owned(),
                    position: Some(1),
                    values: vec!["Black".to_owned()],
                },
            ],
            variants,
        }
    }

    #[test]
    fn normalize_product_rejects_empty_variants() {
        let result = normalize_product(make_product(Vec::new()));
        assert!(
            matches!(result, Err(StorefrontError::Normalization { ref handle, .. }) if handle == "classic-tee"),
            "expected Normalization error, got: {result:?}"
        );
    }

    #[test]
    fn normalize_product_orders_options_by_position() {
        let product = make_product(vec![make_variant(1, "Black", Some("Small"))]);
        let normalized = normalize_product(product).unwrap();
        let names: Vec<&str> = normalized.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Color", "Size"]);
    }

    #[test]
    fn normalize_product_keeps_variant_slots_positional() {
        let product = make_product(vec![make_variant(1, "Black", Some("Small"))]);
        let normalized = normalize_product(product).unwrap();
        let v = &normalized.variants[0];
        assert_eq!(v.id, VariantId(1));
        assert_eq!(v.option(0), Some("Black"));
        assert_eq!(v.option(1), Some("Small"));
        assert_eq!(v.option(2), None);
        assert_eq!(v.price, Some(Money::from_minor(2500)));
    }

    #[test]
    fn normalize_product_makes_image_url_absolute() {
        let product = make_product(vec![make_variant(1, "Black", None)]);
        let normalized = normalize_product(product).unwrap();
        assert_eq!(
            normalized.featured_image.as_deref(),
            Some("https://cdn.example.com/tee.jpg")
        );
    }

    #[test]
    fn normalize_product_keeps_absolute_image_url() {
        let mut product = make_product(vec![make_variant(1, "Black", None)]);
        product.featured_image = Some("https://img.example.com/a.png".to_owned());
        let normalized = normalize_product(product).unwrap();
        assert_eq!(
            normalized.featured_image.as_deref(),
            Some("https://img.example.com/a.png")
        );
    }

    #[test]
    fn normalize_product_drops_blank_description() {
        let mut product = make_product(vec![make_variant(1, "Black", None)]);
        product.description = Some("   ".to_owned());
        let normalized = normalize_product(product).unwrap();
        assert!(normalized.description.is_none());
    }

    #[test]
    fn storefront_product_deserializes_from_js_shape() {
        let body = serde_json::json!({
            "id": 1,
            "title": "Gift Card",
            "handle": "gift-card",
            "description": "",
            "price": 1000,
            "featured_image": null,
            "options": [{"name": "Title", "position": 1, "values": ["Default Title"]}],
            "variants": [{
                "id": 55,
                "title": "Default Title",
                "option1": "Default Title",
                "option2": null,
                "option3": null,
                "price": 1000,
                "available": true
            }]
        });
        let product: StorefrontProduct = serde_json::from_value(body).unwrap();
        let normalized = normalize_product(product).unwrap();
        assert!(normalized.sole_default_variant().is_some());
        assert!(normalized.featured_image.is_none());
    }
}
