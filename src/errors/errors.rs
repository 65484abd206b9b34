use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Lex errors abort tokenizing; every other error comes out of the parser
    /// or a later stage.
    pub fn is_lex_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedCharacter { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::BuildFailed { .. } => "BuildFailed",
            ErrorImpl::NotImplementedError { .. } => "NotImplementedError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "Unexpected character `{}`, it is not part of the language",
                character
            )),
            ErrorImpl::UnexpectedToken { message, found } => {
                ErrorTip::Suggestion(format!("{}, found `{}`", message, found))
            }
            ErrorImpl::ExpectedExpression { found } => ErrorTip::Suggestion(format!(
                "Expected an expression, found `{}`",
                found
            )),
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "Only a variable can be assigned to",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Constructs may nest at most {} levels deep, split this one up",
                limit
            )),
            ErrorImpl::BuildFailed { .. } => ErrorTip::None,
            ErrorImpl::NotImplementedError { feature } => ErrorTip::Suggestion(format!(
                "{} is expected to be handled, but has not yet been implemented",
                feature
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter { character: char },

    // Parsing
    #[error("{message} (found '{found}')")]
    UnexpectedToken { message: String, found: String },
    #[error("expected expression (found '{found}')")]
    ExpectedExpression { found: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("failed to build AST due to {count} parse error(s)")]
    BuildFailed { count: usize },

    // Later stages
    #[error("{feature} is not implemented")]
    NotImplementedError { feature: String },
}
