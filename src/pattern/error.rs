use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("path template '{template}' must start with '/'")]
    MissingLeadingSlash { template: String },
    #[error("segment '{segment}' has unbalanced braces")]
    UnbalancedBraces { segment: String },
    #[error("constraint in segment '{segment}' is missing its closing '>'")]
    UnterminatedConstraint { segment: String },
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterMissingName { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("parameter '{name}' is declared more than once in template '{template}'")]
    DuplicateParameterName { template: String, name: String },
    #[error("constraint for parameter '{name}' is not a valid regex: {error}")]
    ConstraintInvalid { name: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
