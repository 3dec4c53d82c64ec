//! Admin add-product form.

use super::errors::CatalogError;
use shared_types::{Money, Product, ProductId};

/// Image used when the admin leaves the image URL blank.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Raw, unvalidated input from the add-product form.
///
/// Fields are strings because that is what a form submits; `validate`
/// turns them into a `Product`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub image_url: String,
}

impl NewProductForm {
    /// Validates the form and builds a product with the given id.
    ///
    /// # Errors
    /// - `MissingField` if name, price, stock or category is blank
    /// - `InvalidPrice` if price is not a decimal amount
    /// - `InvalidStock` if stock is not a non-negative integer
    pub fn validate(&self, id: ProductId) -> Result<Product, CatalogError> {
        let name = required(&self.name, "name")?;
        let price = required(&self.price, "price")?;
        let stock = required(&self.stock, "stock")?;
        let category = required(&self.category, "category")?;

        let price = Money::parse(price)?;
        let stock: u32 = stock
            .parse()
            .map_err(|_| CatalogError::InvalidStock(stock.to_string()))?;

        let image_url = match self.image_url.trim() {
            "" => PLACEHOLDER_IMAGE.to_string(),
            url => url.to_string(),
        };

        Ok(Product {
            id,
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url,
            stock,
            category: category.to_string(),
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, CatalogError> {
    match value.trim() {
        "" => Err(CatalogError::MissingField(field)),
        trimmed => Ok(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MoneyParseError;

    fn valid_form() -> NewProductForm {
        NewProductForm {
            name: "Desk Lamp".into(),
            description: "LED lamp".into(),
            price: "1499.50".into(),
            stock: "12".into(),
            category: "Home & Garden".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_valid_form_builds_product() {
        let product = valid_form().validate(ProductId::new("x")).unwrap();
        assert_eq!(product.price, Money::from_minor(149_950));
        assert_eq!(product.stock, 12);
        assert_eq!(product.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(product.category, "Home & Garden");
    }

    #[test]
    fn test_missing_required_fields() {
        for (field, form) in [
            ("name", NewProductForm { name: "  ".into(), ..valid_form() }),
            ("price", NewProductForm { price: String::new(), ..valid_form() }),
            ("stock", NewProductForm { stock: String::new(), ..valid_form() }),
            ("category", NewProductForm { category: String::new(), ..valid_form() }),
        ] {
            assert_eq!(
                form.validate(ProductId::new("x")),
                Err(CatalogError::MissingField(field))
            );
        }
    }

    #[test]
    fn test_description_is_optional() {
        let form = NewProductForm {
            description: String::new(),
            ..valid_form()
        };
        assert!(form.validate(ProductId::new("x")).is_ok());
    }

    #[test]
    fn test_invalid_price_and_stock() {
        let bad_price = NewProductForm {
            price: "abc".into(),
            ..valid_form()
        };
        assert_eq!(
            bad_price.validate(ProductId::new("x")),
            Err(CatalogError::InvalidPrice(MoneyParseError::InvalidDigit(
                "abc".into()
            )))
        );

        let bad_stock = NewProductForm {
            stock: "-3".into(),
            ..valid_form()
        };
        assert_eq!(
            bad_stock.validate(ProductId::new("x")),
            Err(CatalogError::InvalidStock("-3".into()))
        );
    }

    #[test]
    fn test_explicit_image_kept() {
        let form = NewProductForm {
            image_url: "https://img.example/lamp.png".into(),
            ..valid_form()
        };
        let product = form.validate(ProductId::new("x")).unwrap();
        assert_eq!(product.image_url, "https://img.example/lamp.png");
    }
}
