// web_app/admin/forms.rs - Add/edit/delete form contents
//
// Forms hold raw text exactly as typed; `validate` is the only way to get
// a `ProductPayload` out of one.

use super::error::AdminError;
use crate::web_app::model::{normalize_sku, ProductId, ProductPayload};
use crate::web_app::view::ProductRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Sku,
    Name,
    DisplayCase,
    Column,
    Row,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Sku => "SKU",
            FormField::Name => "Name",
            FormField::DisplayCase => "Display case",
            FormField::Column => "Column",
            FormField::Row => "Row",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Product fields as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub sku: String,
    pub name: String,
    pub display_case: String,
    pub column: String,
    pub row: String,
}

impl ProductForm {
    fn fields(&self) -> [(FormField, &str); 5] {
        [
            (FormField::Sku, self.sku.as_str()),
            (FormField::Name, self.name.as_str()),
            (FormField::DisplayCase, self.display_case.as_str()),
            (FormField::Column, self.column.as_str()),
            (FormField::Row, self.row.as_str()),
        ]
    }

    /// Fields that are blank after trimming
    pub fn missing_fields(&self) -> Vec<FormField> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Check every field and build the request body
    pub fn validate(&self) -> Result<ProductPayload, AdminError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AdminError::MissingFields(missing));
        }

        Ok(ProductPayload {
            sku: normalize_sku(&self.sku),
            name: self.name.trim().to_string(),
            display_case: self.display_case.trim().to_string(),
            column: parse_whole(FormField::Column, &self.column)?,
            row: parse_whole(FormField::Row, &self.row)?,
        })
    }
}

fn parse_whole(field: FormField, value: &str) -> Result<u32, AdminError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| AdminError::InvalidNumber(field))
}

/// Edit modal contents; `original_sku` comes from the row that opened it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditForm {
    pub id: ProductId,
    pub original_sku: String,
    pub form: ProductForm,
}

impl EditForm {
    pub fn sku_changed(&self) -> bool {
        normalize_sku(&self.form.sku) != normalize_sku(&self.original_sku)
    }
}

impl From<&ProductRow> for EditForm {
    fn from(row: &ProductRow) -> Self {
        Self {
            id: row.id,
            original_sku: row.sku.clone(),
            form: ProductForm {
                sku: row.sku.clone(),
                name: row.name.clone(),
                display_case: row.display_case.clone(),
                column: row.column.to_string(),
                row: row.row.to_string(),
            },
        }
    }
}

/// Product named in the delete confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: ProductId,
    pub sku: String,
}

impl From<&ProductRow> for DeleteTarget {
    fn from(row: &ProductRow) -> Self {
        Self {
            id: row.id,
            sku: row.sku.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            sku: " ab-12 ".to_string(),
            name: "Silver ring".to_string(),
            display_case: "IV".to_string(),
            column: "2".to_string(),
            row: " 6".to_string(),
        }
    }

    #[test]
    fn test_validate_normalizes() {
        let payload = filled_form().validate().unwrap();
        assert_eq!(payload.sku, "AB-12");
        assert_eq!(payload.column, 2);
        assert_eq!(payload.row, 6);
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let form = ProductForm {
            name: "   ".to_string(),
            row: String::new(),
            ..filled_form()
        };
        assert_eq!(
            form.validate(),
            Err(AdminError::MissingFields(vec![FormField::Name, FormField::Row]))
        );
    }

    #[test]
    fn test_non_numeric_column() {
        let form = ProductForm {
            column: "left".to_string(),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(AdminError::InvalidNumber(FormField::Column)));
        assert_eq!(
            AdminError::InvalidNumber(FormField::Column).to_string(),
            "Column must be a whole number."
        );
    }

    #[test]
    fn test_sku_changed_ignores_case() {
        let edit = EditForm {
            id: 1,
            original_sku: "AB-12".to_string(),
            form: ProductForm {
                sku: "ab-12".to_string(),
                ..filled_form()
            },
        };
        assert!(!edit.sku_changed());

        let renamed = EditForm {
            form: ProductForm {
                sku: "AB-13".to_string(),
                ..filled_form()
            },
            ..edit
        };
        assert!(renamed.sku_changed());
    }
}
