//! HTTP DTOs for client endpoints.
//!
//! Request bodies deserialize straight into `NewClient` and `ClientUpdate`;
//! only responses get their own shape.

use serde::{Deserialize, Serialize};

use crate::domain::client::{ActivityLevel, Client, Sex};

/// Returned from `POST /clients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedClientResponse {
    pub client_id: String,
}

/// A stored client as the API shows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub client_id: String,
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goals: String,
    pub bmr: i32,
    pub tdee: i32,
    pub calorie_maintenance: i32,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            client_id: client.id.into_inner(),
            name: client.name,
            age: client.age,
            sex: client.sex,
            height_cm: client.height_cm,
            weight_kg: client.weight_kg,
            activity_level: client.activity_level,
            goals: client.goals,
            bmr: client.bmr,
            tdee: client.tdee,
            calorie_maintenance: client.calorie_maintenance,
            notes: client.notes,
            created_at: client.created_at.as_datetime().to_rfc3339(),
            updated_at: client.updated_at.as_datetime().to_rfc3339(),
        }
    }
}
