//! Entity rows, create inputs, and request-body parsing.

pub mod character;
pub mod galaxy;
pub mod planet;
pub mod user;

pub use character::{Character, NewCharacter};
pub use galaxy::{Galaxy, NewGalaxy};
pub use planet::{NewPlanet, Planet};
pub use user::{NewUser, User};

use crate::error::AppError;
use serde_json::{Map, Value};

/// Auto-assigned row identifier.
pub type DbId = i64;

/// JSON object body as received by create handlers.
pub type Body = Map<String, Value>;

/// Build a create input from a JSON object, checking every required field.
pub trait FromBody: Sized {
    fn from_body(body: &Body) -> Result<Self, AppError>;
}

fn present<'a>(body: &'a Body, key: &'static str) -> Result<&'a Value, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Err(AppError::MissingField(key)),
        Some(v) => Ok(v),
    }
}

pub(crate) fn required_str(body: &Body, key: &'static str) -> Result<String, AppError> {
    present(body, key)?
        .as_str()
        .map(str::to_string)
        .ok_or(AppError::InvalidField(key))
}

pub(crate) fn required_id(body: &Body, key: &'static str) -> Result<DbId, AppError> {
    present(body, key)?.as_i64().ok_or(AppError::InvalidField(key))
}
