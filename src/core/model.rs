//! Supplier resource model
//!
//! Field names on the wire are PascalCase (`ID`, `CompanyName`, `Address`).
//! Missing fields fall back to their zero value, so a body such as
//! `{"CompanyName": "Acme"}` still decodes into a `Supplier`.

use serde::{Deserialize, Serialize};

/// Postal address embedded in a supplier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "ID")]
    pub id: i64,

    #[serde(rename = "Address")]
    pub address: String,
}

impl Address {
    pub fn new(id: i64, address: impl Into<String>) -> Self {
        Self {
            id,
            address: address.into(),
        }
    }
}

/// A supplier record as stored and served
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    /// Caller-supplied identifier, unique within a store
    #[serde(rename = "ID")]
    pub id: i64,

    #[serde(rename = "CompanyName")]
    pub company_name: String,

    #[serde(rename = "Address")]
    pub address: Address,
}

impl Supplier {
    pub fn new(id: i64, company_name: impl Into<String>, address: Address) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            address,
        }
    }

    /// Overwrite the mutable fields present in `update`
    ///
    /// The identifier is never touched, even if the update body carried one.
    pub fn apply(&mut self, update: SupplierUpdate) {
        if let Some(company_name) = update.company_name {
            self.company_name = company_name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
    }
}

/// Partial update payload for `PUT /suppliers/{id}`
///
/// Only fields present in the body are applied. An `ID` key in the body is
/// accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierUpdate {
    #[serde(
        rename = "CompanyName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub company_name: Option<String>,

    #[serde(rename = "Address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_supplier_serializes_with_pascal_case_keys() {
        let supplier = Supplier::new(1, "Company 1", Address::new(1, "Address 1"));
        let value = serde_json::to_value(&supplier).unwrap();

        assert_eq!(
            value,
            json!({
                "ID": 1,
                "CompanyName": "Company 1",
                "Address": { "ID": 1, "Address": "Address 1" }
            })
        );
    }

    #[test]
    fn test_supplier_missing_fields_default() {
        let supplier: Supplier = serde_json::from_value(json!({ "CompanyName": "Acme" })).unwrap();
        assert_eq!(supplier.id, 0);
        assert_eq!(supplier.company_name, "Acme");
        assert_eq!(supplier.address, Address::default());
    }

    #[test]
    fn test_apply_keeps_id_and_overwrites_given_fields() {
        let mut supplier = Supplier::new(3, "Company 3", Address::new(3, "Address 3"));
        let update: SupplierUpdate = serde_json::from_value(json!({
            "ID": 99,
            "CompanyName": "Renamed"
        }))
        .unwrap();

        supplier.apply(update);

        assert_eq!(supplier.id, 3);
        assert_eq!(supplier.company_name, "Renamed");
        assert_eq!(supplier.address, Address::new(3, "Address 3"));
    }

    #[test]
    fn test_apply_replaces_address() {
        let mut supplier = Supplier::new(2, "Company 2", Address::new(2, "Address 2"));
        supplier.apply(SupplierUpdate {
            company_name: None,
            address: Some(Address::new(20, "Elsewhere")),
        });

        assert_eq!(supplier.company_name, "Company 2");
        assert_eq!(supplier.address, Address::new(20, "Elsewhere"));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let original = Supplier::new(4, "Company 4", Address::new(4, "Address 4"));
        let mut supplier = original.clone();
        supplier.apply(SupplierUpdate::default());
        assert_eq!(supplier, original);
    }
}
