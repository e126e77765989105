// Field Validators - pattern and amount checks for form inputs
use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Something, an `@`, something, a dot, something; no whitespace anywhere
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Optional leading `+`, then at least ten ASCII digits, spaces or dashes
static PHONE_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[+]?[0-9\s-]{10,}$").expect("PHONE_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

/// Phone number validator
#[derive(Debug, Clone, Default)]
pub struct PhoneValidator;

impl PhoneValidator {
    /// Create a new phone validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for PhoneValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !PHONE_REGEX.is_match(value) {
            return Err("Invalid phone number format".to_string());
        }

        Ok(())
    }
}

/// Money and capacity figures: finite, and either strictly positive or
/// allowed to be zero.
#[derive(Debug, Clone, Copy)]
pub struct AmountValidator {
    allow_zero: bool,
}

impl Default for AmountValidator {
    fn default() -> Self {
        Self::positive()
    }
}

impl AmountValidator {
    /// Amounts greater than zero (bills, targets, new catalog prices)
    pub fn positive() -> Self {
        Self { allow_zero: false }
    }

    /// Amounts of zero or more (edited catalog prices)
    pub fn non_negative() -> Self {
        Self { allow_zero: true }
    }

    /// Whether an already-numeric amount passes
    pub fn accepts(&self, amount: f64) -> bool {
        amount.is_finite() && (amount > 0.0 || (self.allow_zero && amount == 0.0))
    }

    /// Parse a typed amount, returning it only when valid
    pub fn parse(&self, value: &str) -> Option<f64> {
        value.trim().parse::<f64>().ok().filter(|amount| self.accepts(*amount))
    }

    fn message(&self) -> String {
        if self.allow_zero {
            "Amount must be zero or more".to_string()
        } else {
            "Amount must be a positive number".to_string()
        }
    }
}

impl FieldValidator<str> for AmountValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        self.parse(value).map(|_| ()).ok_or_else(|| self.message())
    }
}

impl FieldValidator<f64> for AmountValidator {
    fn validate(&self, value: &f64) -> Result<(), String> {
        if self.accepts(*value) {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_accepts_spaced_and_prefixed_numbers() {
        let validator = PhoneValidator::new();
        assert!(validator.validate("+91 98765 43210").is_ok());
        assert!(validator.validate("9876543210").is_ok());
        assert!(validator.validate("98765-43210").is_ok());
        assert!(validator.validate("12345").is_err());
        assert!(validator.validate("98765abc43210").is_err());
    }

    #[test]
    fn phone_pattern_takes_ascii_digits_only() {
        let validator = PhoneValidator::new();
        assert!(validator.validate("९८७६५४३२१०").is_err());
        assert!(validator.validate("٩٨٧٦٥٤٣٢١٠").is_err());
    }

    #[test]
    fn email_pattern_requires_at_and_dot() {
        let validator = EmailValidator::new();
        assert!(validator.validate("priya@example.in").is_ok());
        assert!(validator.validate("priya@example").is_err());
        assert!(validator.validate("priya example@x.in").is_err());
    }

    #[test]
    fn positive_amount_rejects_zero_and_garbage() {
        let validator = AmountValidator::positive();
        assert_eq!(validator.parse(" 3500 "), Some(3500.0));
        assert_eq!(validator.parse("0"), None);
        assert_eq!(validator.parse("-10"), None);
        assert_eq!(validator.parse("abc"), None);
        assert_eq!(validator.parse("inf"), None);
    }

    #[test]
    fn non_negative_amount_allows_zero() {
        let validator = AmountValidator::non_negative();
        assert!(validator.validate(&0.0).is_ok());
        assert!(validator.validate(&12_500.0).is_ok());
        assert_eq!(validator.validate(&-1.0), Err("Amount must be zero or more".to_string()));
        assert!(validator.validate(&f64::NAN).is_err());
        assert!(validator.validate(&f64::INFINITY).is_err());
    }
}
