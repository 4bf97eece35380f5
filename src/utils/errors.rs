use std::fmt;
use std::error::Error;

use crate::simulation::BodyId;

/// Represents errors that can occur during rocket physics calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates an invalid radius (zero, negative or not finite).
    InvalidRadius,
    /// Indicates simulation bounds that cannot hold a body (non-positive or smaller than its diameter).
    InvalidBounds,
    /// Indicates an invalid time value (e.g., negative or non-finite time step).
    InvalidTime,
    /// Indicates a bounce restitution outside of (0, 1].
    InvalidRestitution,
    /// Indicates a non-finite position.
    InvalidPosition,
    /// Indicates a non-finite velocity.
    InvalidVelocity,
    /// Indicates a coordinate list that does not describe a 2D vector.
    InvalidDimensions(usize),
    /// Indicates a division by a zero-length vector.
    DivisionByZero,
    /// Indicates that two bodies are at the same position (gravity and collisions are undefined).
    ObjectsAtSamePosition,
    /// Indicates a body handle that the simulation does not know about.
    UnknownBody(BodyId),
    /// A general error for calculations that produce invalid results.
    CalculationError(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidRadius => write!(f, "Invalid radius value"),
            PhysicsError::InvalidBounds => write!(f, "Invalid simulation bounds"),
            PhysicsError::InvalidTime => write!(f, "Invalid time value"),
            PhysicsError::InvalidRestitution => write!(f, "Restitution must be within (0, 1]"),
            PhysicsError::InvalidPosition => write!(f, "Invalid position value"),
            PhysicsError::InvalidVelocity => write!(f, "Invalid velocity value"),
            PhysicsError::InvalidDimensions(len) => write!(f, "Unsupported coordinate count of {} for a 2D vector", len),
            PhysicsError::DivisionByZero => write!(f, "Division by zero"),
            PhysicsError::ObjectsAtSamePosition => write!(f, "Objects are at the same position"),
            PhysicsError::UnknownBody(id) => write!(f, "Unknown body {}", id),
            PhysicsError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl Error for PhysicsError {}
