use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

/// Body shared by deposit and withdraw. The amount is accepted unchecked.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: String,
}
