use super::entities::CalculationType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Unsupported calculation type: {0}")]
    UnsupportedType(String),

    #[error("Result is out of range")]
    Overflow,
}

/// Dispatches an operation tag to its arithmetic
pub struct CalculationFactory;

impl CalculationFactory {
    pub fn execute(tag: &str, a: f64, b: f64) -> Result<f64, CalculationError> {
        let kind: CalculationType = tag.parse()?;
        Self::apply(kind, a, b)
    }

    pub fn apply(kind: CalculationType, a: f64, b: f64) -> Result<f64, CalculationError> {
        let result = match kind {
            CalculationType::Add => a + b,
            CalculationType::Sub => a - b,
            CalculationType::Multiply => a * b,
            CalculationType::Divide => {
                // checked before the division, -0.0 included
                if b == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                a / b
            }
        };

        // finite operands can still overflow to infinity
        if !result.is_finite() {
            return Err(CalculationError::Overflow);
        }
        Ok(result)
    }
}
