//! Built-in templates for common datasets.

use crate::field::{FieldDefinition, FieldType};
use crate::template::Template;

/// Named built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Account-style user records
    UserData,
    /// Transaction-style financial records
    FinancialData,
}

impl Preset {
    /// All available presets.
    pub const ALL: [Preset; 2] = [Preset::UserData, Preset::FinancialData];

    /// Kebab-case name used on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::UserData => "user-data",
            Preset::FinancialData => "financial-data",
        }
    }

    /// Build the preset's template.
    pub fn template(&self) -> Template {
        match self {
            Preset::UserData => user_data(),
            Preset::FinancialData => financial_data(),
        }
    }
}

/// User dataset: id, username, email, names, join date, active flag.
pub fn user_data() -> Template {
    Template::new(vec![
        FieldDefinition::new("id", FieldType::Integer)
            .with_range(1000.0, 9999.0)
            .unique(),
        FieldDefinition::new("username", FieldType::String).with_pattern("[a-z0-9_]{5,15}"),
        FieldDefinition::new("email", FieldType::Email),
        FieldDefinition::new("first_name", FieldType::Name),
        FieldDefinition::new("last_name", FieldType::Name),
        FieldDefinition::new("date_joined", FieldType::Date),
        FieldDefinition::new("is_active", FieldType::Boolean),
    ])
    .expect("user data preset is a valid template")
}

/// Financial dataset: transaction id, amount, currency, date, status, account.
pub fn financial_data() -> Template {
    Template::new(vec![
        FieldDefinition::new("transaction_id", FieldType::String).with_pattern("TRX[0-9]{10}"),
        FieldDefinition::new("amount", FieldType::Float).with_range(0.01, 10000.00),
        FieldDefinition::new("currency", FieldType::String)
            .with_choices(["USD", "EUR", "GBP", "JPY"]),
        FieldDefinition::new("transaction_date", FieldType::Date),
        FieldDefinition::new("status", FieldType::String)
            .with_choices(["completed", "pending", "failed"]),
        FieldDefinition::new("account_number", FieldType::String).with_pattern("[A-Z]{2}[0-9]{20}"),
    ])
    .expect("financial data preset is a valid template")
}
