use crate::non_empty;
use serde::{Deserialize, Serialize};

/// The supplier, customer, or middleman a document is addressed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(self.address.as_deref())
    }
}

/// Contact details of the issuing company, printed in page headers.
///
/// Any field left empty falls back to the default text the template carries
/// for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CompanyInfo {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn address(&self) -> Option<&str> {
        non_empty(self.address.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }
}
