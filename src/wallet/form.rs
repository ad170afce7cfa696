//! Form data for setting up a wallet and submitting transactions, and the checks applied
//! before anything is sent to the wallet API.

use serde::Deserialize;

pub const SETUP_FIELDS_REQUIRED_MSG: &str = "Name and Initial Balance are required";
pub const BALANCE_NOT_A_NUMBER_MSG: &str = "Initial Balance must be a number";
pub const AMOUNT_NOT_A_NUMBER_MSG: &str = "Amount must be a number";
pub const AMOUNT_NEGATIVE_MSG: &str = "Amount must not be negative, pick Debit instead";
pub const DESCRIPTION_REQUIRED_MSG: &str = "Description is required";

/// The form data for setting up a wallet.
///
/// Fields are kept as the raw text the user typed so the form can be re-rendered as it was
/// submitted when validation fails.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct SetupForm {
    #[serde(default)]
    pub name: String,
    /// The starting balance, e.g. "100" or "12.50".
    #[serde(default)]
    pub balance: String,
}

/// A setup request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSetup<'a> {
    pub name: &'a str,
    pub balance: f64,
}

impl SetupForm {
    /// Check that the name and balance are present and that the balance is a number.
    ///
    /// # Errors
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<ValidSetup<'_>, &'static str> {
        let name = self.name.trim();
        let balance = self.balance.trim();

        if name.is_empty() || balance.is_empty() {
            return Err(SETUP_FIELDS_REQUIRED_MSG);
        }

        let balance = parse_number(balance).ok_or(BALANCE_NOT_A_NUMBER_MSG)?;

        Ok(ValidSetup { name, balance })
    }
}

/// Whether a transaction adds to or takes from the wallet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Credit,
    Debit,
}

impl Direction {
    /// Give `amount` the sign the wallet API expects for this direction.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            Direction::Credit => amount,
            Direction::Debit => -amount,
        }
    }

    pub fn as_form_value(self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
        }
    }
}

/// The form data for submitting a transaction.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub direction: Direction,
}

/// A transaction that passed validation, with the direction applied to the amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction<'a> {
    pub amount: f64,
    pub description: &'a str,
}

impl TransactionForm {
    /// Check that the amount is a non-negative number and the description is not blank.
    ///
    /// The sign comes from the direction alone.
    ///
    /// # Errors
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<ValidTransaction<'_>, &'static str> {
        let amount = parse_number(self.amount.trim()).ok_or(AMOUNT_NOT_A_NUMBER_MSG)?;
        if amount < 0.0 {
            return Err(AMOUNT_NEGATIVE_MSG);
        }
        let description = self.description.trim();

        if description.is_empty() {
            return Err(DESCRIPTION_REQUIRED_MSG);
        }

        Ok(ValidTransaction {
            amount: self.direction.signed(amount),
            description,
        })
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}
