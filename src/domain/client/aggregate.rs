//! Client profile entity.
//!
//! A client is a tenant-scoped profile owned by the coach. Nutrition figures
//! (`bmr`, `tdee`, `calorie_maintenance`) are computed by the caller and
//! stored verbatim; nothing here derives them.

use serde::{Deserialize, Serialize};

use super::{ActivityLevel, Sex};
use crate::domain::foundation::{
    ClientId, OwnedByTenant, TenantId, Timestamp, ValidationError,
};

/// Maximum length for a client's name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Accepted age range in years.
pub const AGE_RANGE: (u32, u32) = (1, 120);

/// Upper bound for any of the caller-computed calorie figures.
pub const MAX_CALORIES: i32 = 20_000;

/// Stored client profile.
///
/// # Invariants
///
/// - `id` is globally unique and never changes
/// - `tenant` is fixed at creation
/// - `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub tenant: TenantId,
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    /// Builds a stored record from a creation payload.
    ///
    /// The payload is borrowed and left untouched.
    pub fn from_new(id: ClientId, tenant: TenantId, new: &NewClient, now: Timestamp) -> Self {
        Self {
            id,
            tenant,
            name: new.name.clone(),
            age: new.age,
            sex: new.sex,
            height_cm: new.height_cm,
            weight_kg: new.weight_kg,
            activity_level: new.activity_level,
            goals: new.goals.clone(),
            bmr: new.bmr,
            tdee: new.tdee,
            calorie_maintenance: new.calorie_maintenance,
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied fields of `update` and stamps `updated_at`.
    ///
    /// Absent fields keep their current value. An empty update still
    /// advances `updated_at`.
    pub fn apply(&mut self, update: &ClientUpdate, now: Timestamp) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(sex) = update.sex {
            self.sex = sex;
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = height_cm;
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(level) = update.activity_level {
            self.activity_level = level;
        }
        if let Some(goals) = &update.goals {
            self.goals = goals.clone();
        }
        if let Some(bmr) = update.bmr {
            self.bmr = bmr;
        }
        if let Some(tdee) = update.tdee {
            self.tdee = tdee;
        }
        if let Some(maintenance) = update.calorie_maintenance {
            self.calorie_maintenance = maintenance;
        }
        if let Some(notes) = &update.notes {
            self.notes = notes.clone();
        }
        self.updated_at = now;
    }
}

impl OwnedByTenant for Client {
    fn tenant(&self) -> &TenantId {
        &self.tenant
    }
}

/// Payload for creating a client. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
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
}

impl NewClient {
    /// Checks field ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_age(self.age)?;
        validate_measurement("height_cm", self.height_cm)?;
        validate_measurement("weight_kg", self.weight_kg)?;
        validate_calories("bmr", self.bmr)?;
        validate_calories("tdee", self.tdee)?;
        validate_calories("calorie_maintenance", self.calorie_maintenance)?;
        Ok(())
    }
}

/// Partial update for a client. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub bmr: Option<i32>,
    #[serde(default)]
    pub tdee: Option<i32>,
    #[serde(default)]
    pub calorie_maintenance: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ClientUpdate {
    /// Checks the ranges of the supplied fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        if let Some(height_cm) = self.height_cm {
            validate_measurement("height_cm", height_cm)?;
        }
        if let Some(weight_kg) = self.weight_kg {
            validate_measurement("weight_kg", weight_kg)?;
        }
        for (field, value) in [
            ("bmr", self.bmr),
            ("tdee", self.tdee),
            ("calorie_maintenance", self.calorie_maintenance),
        ] {
            if let Some(value) = value {
                validate_calories(field, value)?;
            }
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::out_of_range(
            "name",
            1,
            MAX_NAME_LENGTH as i64,
            trimmed.len() as i64,
        ));
    }
    Ok(())
}

fn validate_age(age: u32) -> Result<(), ValidationError> {
    let (min, max) = AGE_RANGE;
    if age < min || age > max {
        return Err(ValidationError::out_of_range(
            "age",
            min as i64,
            max as i64,
            age as i64,
        ));
    }
    Ok(())
}

fn validate_measurement(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::invalid_format(
            field,
            "must be a positive number",
        ));
    }
    Ok(())
}

fn validate_calories(field: &str, value: i32) -> Result<(), ValidationError> {
    if !(0..=MAX_CALORIES).contains(&value) {
        return Err(ValidationError::out_of_range(
            field,
            0,
            MAX_CALORIES as i64,
            value as i64,
        ));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_new_client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            age: 31,
            sex: Sex::Female,
            height_cm: 168.0,
            weight_kg: 62.5,
            activity_level: ActivityLevel::Moderate,
            goals: "Run a half marathon".to_string(),
            bmr: 1400,
            tdee: 2170,
            calorie_maintenance: 2150,
            notes: "Prefers morning sessions".to_string(),
        }
    }

    fn stored(new: &NewClient) -> Client {
        Client::from_new(
            ClientId::new("c1").unwrap(),
            TenantId::new("admin").unwrap(),
            new,
            Timestamp::now(),
        )
    }

    #[test]
    fn from_new_copies_payload_and_stamps_both_timestamps() {
        let new = sample_new_client("Ana");
        let client = stored(&new);

        assert_eq!(client.name, "Ana");
        assert_eq!(client.bmr, 1400);
        assert_eq!(client.created_at, client.updated_at);
        assert_eq!(new, sample_new_client("Ana"));
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut client = stored(&sample_new_client("Ana"));
        let later = client.updated_at.plus_secs(60);
        let update = ClientUpdate {
            weight_kg: Some(60.0),
            notes: Some("Knee niggle".to_string()),
            ..Default::default()
        };

        client.apply(&update, later);

        assert_eq!(client.weight_kg, 60.0);
        assert_eq!(client.notes, "Knee niggle");
        assert_eq!(client.name, "Ana");
        assert_eq!(client.age, 31);
        assert_eq!(client.updated_at, later);
    }

    #[test]
    fn empty_update_only_moves_updated_at() {
        let mut client = stored(&sample_new_client("Ana"));
        let before = client.clone();
        let later = client.updated_at.plus_secs(5);

        client.apply(&ClientUpdate::default(), later);

        assert_eq!(client.updated_at, later);
        client.updated_at = before.updated_at;
        assert_eq!(client, before);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let new = sample_new_client("  ");
        assert!(matches!(
            new.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn validate_rejects_age_out_of_range() {
        let mut new = sample_new_client("Ana");
        new.age = 0;
        assert_eq!(new.validate().unwrap_err().field(), "age");
    }

    #[test]
    fn validate_rejects_non_positive_height() {
        let mut new = sample_new_client("Ana");
        new.height_cm = 0.0;
        assert_eq!(new.validate().unwrap_err().field(), "height_cm");
    }

    #[test]
    fn update_validate_checks_only_supplied_fields() {
        assert!(ClientUpdate::default().validate().is_ok());
        let update = ClientUpdate {
            tdee: Some(-5),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap_err().field(), "tdee");
    }

    #[test]
    fn update_deserializes_missing_fields_as_none() {
        let update: ClientUpdate = serde_json::from_str(r#"{"goals":"Cut"}"#).unwrap();
        assert_eq!(update.goals.as_deref(), Some("Cut"));
        assert!(update.name.is_none());
    }
}
