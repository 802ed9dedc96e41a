use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Upi, PaymentMethod::Cod];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Cod => "Cash on Delivery",
        }
    }

    /// Input shown for this method, if any
    pub fn input_field(&self) -> Option<InputField> {
        match self {
            PaymentMethod::Card => Some(InputField::CardNumber),
            PaymentMethod::Upi => Some(InputField::UpiId),
            PaymentMethod::Cod => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "cod" => Ok(PaymentMethod::Cod),
            other => Err(Error::InvalidPayment(format!(
                "unknown payment method '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    CardNumber,
    UpiId,
}

impl InputField {
    pub fn placeholder(&self) -> &'static str {
        match self {
            InputField::CardNumber => "Enter card number",
            InputField::UpiId => "Enter UPI ID",
        }
    }
}

/// Shown after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub reference: Uuid,
    pub method: PaymentMethod,
    pub title: &'static str,
    pub description: &'static str,
}

/// Payment form state. Only the input of the selected method is validated.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    method: PaymentMethod,
    card_number: String,
    upi_id: String,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn set_card_number(&mut self, value: impl Into<String>) {
        self.card_number = value.into();
    }

    pub fn set_upi_id(&mut self, value: impl Into<String>) {
        self.upi_id = value.into();
    }

    pub fn input_field(&self) -> Option<InputField> {
        self.method.input_field()
    }

    pub fn submit(&self) -> Result<PaymentConfirmation> {
        match self.method {
            PaymentMethod::Card => validate_card_number(&self.card_number)?,
            PaymentMethod::Upi => validate_upi_id(&self.upi_id)?,
            PaymentMethod::Cod => {}
        }

        let confirmation = PaymentConfirmation {
            reference: Uuid::new_v4(),
            method: self.method,
            title: "Payment Successful!",
            description: "Thank you for your payment.",
        };
        tracing::info!(method = ?self.method, reference = %confirmation.reference, "Payment submitted");
        Ok(confirmation)
    }
}

fn validate_card_number(raw: &str) -> Result<()> {
    let mut digits = 0usize;
    for ch in raw.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' => {}
            _ => {
                return Err(Error::InvalidPayment(
                    "card number may only contain digits".to_string(),
                ))
            }
        }
    }
    if !(12..=19).contains(&digits) {
        return Err(Error::InvalidPayment(format!(
            "card number must have 12-19 digits, got {}",
            digits
        )));
    }
    Ok(())
}

fn validate_upi_id(raw: &str) -> Result<()> {
    let valid = raw
        .trim()
        .split_once('@')
        .is_some_and(|(handle, provider)| {
            !handle.is_empty() && !provider.is_empty() && !provider.contains('@')
        });
    if !valid {
        return Err(Error::InvalidPayment(format!(
            "'{}' is not a UPI id (expected handle@provider)",
            raw
        )));
    }
    Ok(())
}
