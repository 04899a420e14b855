//! Customer type for the Bank Resume Engine

use serde::{Deserialize, Serialize};

/// Customer identifier
pub type CustomerId = i64;

/// A bank customer
///
/// Email uniqueness is the customer directory's concern; nothing in this
/// crate relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "customerId")]
    pub id: CustomerId,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone: String,
    #[serde(rename = "emailAddress")]
    pub email: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Customer {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
