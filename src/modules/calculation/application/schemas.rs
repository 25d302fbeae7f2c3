use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::domain::{Calculation, CalculationError, CalculationType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationValidationError {
    #[error("b cannot be zero for Divide operations")]
    ZeroDivisor,

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

fn check_operands(
    kind: CalculationType,
    a: f64,
    b: f64,
) -> Result<(), CalculationValidationError> {
    if !a.is_finite() {
        return Err(CalculationValidationError::NonFinite("a"));
    }
    if !b.is_finite() {
        return Err(CalculationValidationError::NonFinite("b"));
    }
    if kind == CalculationType::Divide && b == 0.0 {
        return Err(CalculationValidationError::ZeroDivisor);
    }
    Ok(())
}

// ========================= Create =========================
/// Validated creation input. Deserializing runs the same checks as [`CalculationCreate::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationCreate {
    a: f64,
    b: f64,
    calculation_type: CalculationType,
}

impl CalculationCreate {
    pub fn new(
        a: f64,
        b: f64,
        calculation_type: CalculationType,
    ) -> Result<Self, CalculationValidationError> {
        check_operands(calculation_type, a, b)?;
        Ok(Self {
            a,
            b,
            calculation_type,
        })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn calculation_type(&self) -> CalculationType {
        self.calculation_type
    }
}

impl<'de> Deserialize<'de> for CalculationCreate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CalculationCreateHelper {
            a: f64,
            b: f64,
            #[serde(rename = "type")]
            calculation_type: CalculationType,
        }

        let helper = CalculationCreateHelper::deserialize(deserializer)?;
        CalculationCreate::new(helper.a, helper.b, helper.calculation_type)
            .map_err(serde::de::Error::custom)
    }
}

/// Documentation shape for [`CalculationCreate`]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculationCreateSchema {
    #[schema(example = 10.0)]
    pub a: f64,
    #[schema(example = 5.0)]
    pub b: f64,
    #[serde(rename = "type")]
    pub calculation_type: CalculationType,
}

// ========================= Update =========================
/// Partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationUpdate {
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default, rename = "type")]
    pub calculation_type: Option<CalculationType>,
    /// Accepted for compatibility; the stored result is always recomputed
    #[serde(default)]
    pub result: Option<f64>,
}

impl CalculationUpdate {
    pub fn is_empty(&self) -> bool {
        self.a.is_none()
            && self.b.is_none()
            && self.calculation_type.is_none()
            && self.result.is_none()
    }

    /// Apply the supplied fields over `current` and validate the merged record
    pub fn merge(&self, current: &Calculation) -> Result<MergedCalculation, MergeError> {
        let calculation_type = match self.calculation_type {
            Some(kind) => kind,
            None => current.kind().map_err(MergeError::Stored)?,
        };
        let a = self.a.unwrap_or(current.a);
        let b = self.b.unwrap_or(current.b);

        check_operands(calculation_type, a, b).map_err(MergeError::Invalid)?;

        Ok(MergedCalculation {
            a,
            b,
            calculation_type,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedCalculation {
    pub a: f64,
    pub b: f64,
    pub calculation_type: CalculationType,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MergeError {
    #[error(transparent)]
    Invalid(CalculationValidationError),

    #[error(transparent)]
    Stored(CalculationError),
}

// ========================= Read =========================
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CalculationRead {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 10.0)]
    pub a: f64,
    #[schema(example = 5.0)]
    pub b: f64,
    #[serde(rename = "type")]
    pub calculation_type: CalculationType,
    #[schema(example = 2.0)]
    pub result: Option<f64>,
}

impl TryFrom<Calculation> for CalculationRead {
    type Error = CalculationError;

    fn try_from(calc: Calculation) -> Result<Self, Self::Error> {
        Ok(Self {
            calculation_type: calc.kind()?,
            id: calc.id,
            a: calc.a,
            b: calc.b,
            result: calc.result,
        })
    }
}
