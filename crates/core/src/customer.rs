//! Customer record draft edited in the prediction form.
//!
//! The draft is initialized once to a fixed default and then mutated one
//! field at a time through the setter methods below.  There is no dynamic
//! field patch: every field has its own typed setter, and the numeric
//! setters take the raw edit text so that an unparseable edit is rejected
//! with the prior value retained.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Contract duration offered to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

/// Internet service tier on the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    FiberOptic,
    No,
}

/// Customer gender as recorded by the billing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

// ---------------------------------------------------------------------------
// CustomerRecord
// ---------------------------------------------------------------------------

/// One customer to be scored.  Field names match the backend wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub age: u32,
    /// Months the customer has been on the books.
    pub tenure: u32,
    pub monthly_charges: f64,
    pub total_charges: f64,
    pub contract_type: ContractType,
    pub payment_method: String,
    pub paperless_billing: bool,
    pub gender: Gender,
    pub partner: bool,
    pub dependents: bool,
    pub phone_service: bool,
    pub multiple_lines: bool,
    pub internet_service: InternetService,
    pub online_security: bool,
    pub online_backup: bool,
    pub device_protection: bool,
    pub tech_support: bool,
    pub streaming_tv: bool,
    pub streaming_movies: bool,
}

impl Default for CustomerRecord {
    /// The record shown when the dashboard first mounts.
    fn default() -> Self {
        Self {
            customer_id: "CUST_00001".to_string(),
            age: 45,
            tenure: 12,
            monthly_charges: 70.5,
            total_charges: 846.0,
            contract_type: ContractType::MonthToMonth,
            payment_method: "Electronic check".to_string(),
            paperless_billing: true,
            gender: Gender::Male,
            partner: false,
            dependents: false,
            phone_service: true,
            multiple_lines: false,
            internet_service: InternetService::FiberOptic,
            online_security: false,
            online_backup: false,
            device_protection: false,
            tech_support: false,
            streaming_tv: true,
            streaming_movies: true,
        }
    }
}

impl CustomerRecord {
    // -- free-form text fields ---------------------------------------------

    pub fn set_customer_id(&mut self, value: String) {
        self.customer_id = value;
    }

    pub fn set_payment_method(&mut self, value: String) {
        self.payment_method = value;
    }

    // -- numeric fields (raw edit text, parse-guarded) ---------------------

    /// Apply an age edit.  Returns `false` and leaves the field unchanged
    /// when the text does not parse as an integer.
    pub fn set_age(&mut self, input: &str) -> bool {
        match input.trim().parse() {
            Ok(v) => {
                self.age = v;
                true
            }
            Err(_) => false,
        }
    }

    /// Apply a tenure edit (months).
    pub fn set_tenure(&mut self, input: &str) -> bool {
        match input.trim().parse() {
            Ok(v) => {
                self.tenure = v;
                true
            }
            Err(_) => false,
        }
    }

    /// Apply a monthly-charges edit.
    pub fn set_monthly_charges(&mut self, input: &str) -> bool {
        match input.trim().parse() {
            Ok(v) => {
                self.monthly_charges = v;
                true
            }
            Err(_) => false,
        }
    }

    /// Apply a total-charges edit.
    pub fn set_total_charges(&mut self, input: &str) -> bool {
        match input.trim().parse() {
            Ok(v) => {
                self.total_charges = v;
                true
            }
            Err(_) => false,
        }
    }

    // -- closed-choice fields ----------------------------------------------

    pub fn set_contract_type(&mut self, value: ContractType) {
        self.contract_type = value;
    }

    pub fn set_internet_service(&mut self, value: InternetService) {
        self.internet_service = value;
    }

    pub fn set_gender(&mut self, value: Gender) {
        self.gender = value;
    }

    // -- service flags -----------------------------------------------------

    pub fn set_paperless_billing(&mut self, value: bool) {
        self.paperless_billing = value;
    }

    pub fn set_partner(&mut self, value: bool) {
        self.partner = value;
    }

    pub fn set_dependents(&mut self, value: bool) {
        self.dependents = value;
    }

    pub fn set_phone_service(&mut self, value: bool) {
        self.phone_service = value;
    }

    pub fn set_multiple_lines(&mut self, value: bool) {
        self.multiple_lines = value;
    }

    pub fn set_online_security(&mut self, value: bool) {
        self.online_security = value;
    }

    pub fn set_online_backup(&mut self, value: bool) {
        self.online_backup = value;
    }

    pub fn set_device_protection(&mut self, value: bool) {
        self.device_protection = value;
    }

    pub fn set_tech_support(&mut self, value: bool) {
        self.tech_support = value;
    }

    pub fn set_streaming_tv(&mut self, value: bool) {
        self.streaming_tv = value;
    }

    pub fn set_streaming_movies(&mut self, value: bool) {
        self.streaming_movies = value;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
