use serde::{Deserialize, Serialize};

/// Customer fields as they cross the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Account fields as they cross the API boundary.
///
/// Missing fields deserialize to their defaults so that `"account": {}` is
/// accepted and treated as an empty block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountsDto {
    pub account_number: i64,
    pub account_type: String,
    pub branch_address: String,
}

impl AccountsDto {
    /// No account number means there is no account to update.
    pub fn is_empty(&self) -> bool {
        self.account_number == 0
    }
}

/// Combined customer/account view used by fetch and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerDetailsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountsDto>,
}
