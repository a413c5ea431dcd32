//! Request field validation. The service trusts its input, so every check on
//! shape happens here.

use models::customer::{validate_email, validate_mobile_number, validate_name};
use models::errors::ModelError;
use service::account::{CustomerDetailsDto, CustomerDto};

/// Collected `field=message` pairs, rendered as `{a=..., b=...}`.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn check(&mut self, field: &'static str, res: Result<(), ModelError>) -> &mut Self {
        if let Err(e) = res {
            let msg = match e {
                ModelError::Validation(m) => m,
                other => other.to_string(),
            };
            self.0.push((field, msg));
        }
        self
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            return Ok(());
        }
        let joined = self
            .0
            .iter()
            .map(|(field, msg)| format!("{field}={msg}"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!("{{{joined}}}"))
    }
}

pub fn customer(dto: &CustomerDto) -> Result<(), String> {
    let mut errs = FieldErrors::default();
    errs.check("mobileNumber", validate_mobile_number(&dto.mobile_number))
        .check("name", validate_name(&dto.name))
        .check("email", validate_email(&dto.email));
    errs.into_result()
}

/// Only the customer block carries user-entered fields worth checking.
pub fn details(view: &CustomerDetailsDto) -> Result<(), String> {
    match &view.customer {
        Some(c) => customer(c),
        None => Ok(()),
    }
}

pub fn mobile_param(param: &'static str, value: &str) -> Result<(), String> {
    let mut errs = FieldErrors::default();
    errs.check(param, validate_mobile_number(value));
    errs.into_result()
}
