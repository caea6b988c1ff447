// Inquiries are written by visitors and only read or deleted by admins.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::{Collection, Record};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactInquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub via_whatsapp: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload sent by the public contact form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub via_whatsapp: bool,
}

impl Record for ContactInquiry {
    const COLLECTION: Collection = Collection::ContactInquiries;

    fn id(&self) -> &str {
        &self.id
    }
}
