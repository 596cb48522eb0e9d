//! # Validation Module
//!
//! Authoring-path validation for product drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript admin form)                              │
//! │  ├── Required-field checks, numeric input widgets                       │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (runs inside Product::new / Product::revised)     │
//! │  ├── The draft cannot become a catalog record without passing here      │
//! │  └── Closed enums already make bad categories/sizes unrepresentable     │
//! │                                                                         │
//! │  Defense in depth: the engine never trusts the form                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::ProductDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name",
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - May be empty
/// - Must be at most 2000 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.len() > 2000 {
        return Err(ValidationError::TooLong {
            field: "description",
            max: 2000,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for promotional items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

/// Validates a carbon footprint in kg CO2 equivalent.
///
/// ## Rules
/// - Must be a finite number (no NaN or infinity)
/// - Must be non-negative
///
/// Non-negativity matters beyond plausibility: the empty-catalog rule
/// (average defined as 0) relies on no footprint sitting below zero.
pub fn validate_carbon_footprint(kg: f64) -> ValidationResult<()> {
    if !kg.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "carbonFootprint",
        });
    }

    if kg < 0.0 {
        return Err(ValidationError::Negative {
            field: "carbonFootprint",
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validation
// =============================================================================

impl ProductDraft {
    /// Validates the whole draft. Called by the `Product` construction path;
    /// exposed so the admin surface can pre-check a form before submitting.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        validate_price_cents(self.price_cents)?;
        validate_carbon_footprint(self.carbon_footprint_kg)?;

        if self.sizes.is_empty() {
            return Err(ValidationError::Empty { field: "sizes" });
        }

        if self.colors.is_empty() {
            return Err(ValidationError::Empty { field: "colors" });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Color, Size};

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Tailored Blazer".to_string(),
            description: "Structured evening blazer".to_string(),
            price_cents: 12999,
            category: Category::Men,
            sizes: vec![Size::M, Size::L],
            colors: vec![Color::Black],
            images: vec![],
            in_stock: true,
            featured: false,
            carbon_footprint_kg: 11.5,
            carbon_certificate: None,
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Tailored Blazer").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(12999).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_carbon_footprint() {
        assert!(validate_carbon_footprint(0.0).is_ok());
        assert!(validate_carbon_footprint(11.5).is_ok());
        assert!(validate_carbon_footprint(-0.1).is_err());
        assert!(validate_carbon_footprint(f64::NAN).is_err());
        assert!(validate_carbon_footprint(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_draft_ok() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_validate_draft_rejects_empty_variant_lists() {
        let mut d = draft();
        d.sizes.clear();
        assert!(matches!(
            d.validate(),
            Err(ValidationError::Empty { field: "sizes" })
        ));

        let mut d = draft();
        d.colors.clear();
        assert!(matches!(
            d.validate(),
            Err(ValidationError::Empty { field: "colors" })
        ));
    }
}
