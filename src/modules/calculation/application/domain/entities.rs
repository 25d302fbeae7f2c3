use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::calculation_factory::{CalculationError, CalculationFactory};
use crate::auth::application::domain::entities::UserId;

/// Supported arithmetic operations. The variant names are the wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CalculationType {
    Add,
    Sub,
    Multiply,
    Divide,
}

impl CalculationType {
    pub const ALL: [CalculationType; 4] = [
        CalculationType::Add,
        CalculationType::Sub,
        CalculationType::Multiply,
        CalculationType::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationType::Add => "Add",
            CalculationType::Sub => "Sub",
            CalculationType::Multiply => "Multiply",
            CalculationType::Divide => "Divide",
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationType {
    type Err = CalculationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| CalculationError::UnsupportedType(tag.to_string()))
    }
}

/// Stored calculation record.
///
/// The tag is kept as the raw stored string so that a row written with an
/// unknown tag still loads; [`Calculation::compute`] reports it instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub id: i32,
    pub owner: Option<UserId>,
    pub a: f64,
    pub b: f64,
    pub calculation_type: String,
    pub result: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Calculation {
    pub fn kind(&self) -> Result<CalculationType, CalculationError> {
        self.calculation_type.parse()
    }

    /// Evaluate the stored operands on demand
    pub fn compute(&self) -> Result<f64, CalculationError> {
        CalculationFactory::execute(&self.calculation_type, self.a, self.b)
    }

    pub fn is_owned_by(&self, owner: UserId) -> bool {
        self.owner == Some(owner)
    }
}
