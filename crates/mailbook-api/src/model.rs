//! Wire models for the backend's payload shapes.
//!
//! Field names on the wire are the backend's Spanish column names; they are
//! mapped to descriptive names at deserialization time. The nested owner
//! object inside an email payload is flattened into a plain `customer_key`
//! field rather than kept as an object graph.

use serde::{Deserialize, Deserializer, Serialize};

/// A customer, identified by a natural-key string (a national ID).
///
/// Customers are created and edited through their own endpoints; from the
/// listing view's perspective they are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Natural key (wire name `dni`).
    #[serde(rename = "dni")]
    pub key: String,
    /// First name (wire name `nombre`).
    #[serde(rename = "nombre")]
    pub first_name: String,
    /// Last name (wire name `apellido`).
    #[serde(rename = "apellido")]
    pub last_name: String,
}

impl Customer {
    /// Returns "First Last" for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercase initials of first and last name, for avatar badges.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut out = String::new();
        for part in [&self.first_name, &self.last_name] {
            if let Some(c) = part.chars().next() {
                out.extend(c.to_uppercase());
            }
        }
        out
    }
}

/// An email address owned by exactly one [`Customer`].
///
/// On the wire the owner arrives as a nested object
/// (`"cliente06": {"dni": ...}`); here it is a flat `customer_key`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Email {
    /// Generated numeric id (wire name `idCorreo`).
    #[serde(rename = "idCorreo")]
    pub id: u32,
    /// The address itself (wire name `correo`).
    #[serde(rename = "correo")]
    pub address: String,
    /// Natural key of the owning customer, pulled out of the nested
    /// owner object.
    #[serde(rename = "cliente06", deserialize_with = "owner_key")]
    pub customer_key: String,
}

/// Nested owner reference as the backend serializes it. Only the key is
/// kept; the owner's name fields are redundant with the customer list.
#[derive(Deserialize)]
struct OwnerRef {
    dni: String,
}

fn owner_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    OwnerRef::deserialize(deserializer).map(|owner| owner.dni)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn customer_from_wire_shape() {
        let json = r#"{"dni":"1","nombre":"Ana","apellido":"Li"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.key, "1");
        assert_eq!(customer.first_name, "Ana");
        assert_eq!(customer.last_name, "Li");
        assert_eq!(customer.full_name(), "Ana Li");
        assert_eq!(customer.initials(), "AL");
    }

    #[test]
    fn email_flattens_nested_owner() {
        let json = r#"{"idCorreo":5,"correo":"a@b.com","cliente06":{"dni":"1"}}"#;
        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.id, 5);
        assert_eq!(email.address, "a@b.com");
        assert_eq!(email.customer_key, "1");
    }

    #[test]
    fn email_owner_extra_fields_ignored() {
        // The backend serializes the full owner entity; only dni matters.
        let json = r#"{"idCorreo":7,"correo":"x@y.org",
            "cliente06":{"dni":"42","nombre":"Juan","apellido":"Pérez"}}"#;
        let email: Email = serde_json::from_str(json).unwrap();
        assert_eq!(email.customer_key, "42");
    }

    #[test]
    fn initials_handle_empty_names() {
        let customer = Customer {
            key: "9".into(),
            first_name: String::new(),
            last_name: "Li".into(),
        };
        assert_eq!(customer.initials(), "L");
    }
}
