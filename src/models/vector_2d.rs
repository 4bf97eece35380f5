use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::utils::PhysicsError;

pub trait FromCoordinates <T> {
    /// Creates a new instance of the struct from the given coordinates.
    /// # Arguments
    /// * `position` - The coordinates to create the struct from.
    /// # Returns
    /// A new instance of the struct.
    /// # Example
    /// ```
    /// use rs_rocket_physics::models::{FromCoordinates, Vector2D};
    ///
    /// let vector = Vector2D::from_coord((1.0, 2.0));
    /// assert_eq!(vector.x, 1.0);
    /// assert_eq!(vector.y, 2.0);
    /// ```
    fn from_coord(position: T) -> Self;
}

pub trait ToCoordinates <T> {
    /// Converts the struct to a tuple of coordinates.
    /// # Returns
    /// A tuple of coordinates.
    /// # Example
    /// ```
    /// use rs_rocket_physics::models::{ToCoordinates, Vector2D};
    ///
    /// let vector = Vector2D::new(1.0, 2.0);
    /// let coordinates = vector.to_coord();
    ///
    /// assert_eq!(coordinates.0, 1.0);
    /// assert_eq!(coordinates.1, 2.0);
    /// ```
    fn to_coord(&self) -> T;
}

/// A 2D vector with value semantics.
///
/// Every arithmetic operation returns a new vector; the only in-place change is
/// [`Vector2D::replace`]. Division by zero is not trapped and yields `inf`/`NaN`
/// components, so callers that divide by a length must guard it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    #[inline]
    pub fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn subtract(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    #[inline]
    pub fn componentwise_multiply(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x * other.x, self.y * other.y)
    }

    /// Divides component by component. A zero component in `other` yields `inf` or `NaN`.
    #[inline]
    pub fn componentwise_divide(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x / other.x, self.y / other.y)
    }

    #[inline]
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean distance between two points, `|self - other|`.
    ///
    /// # Example
    /// ```
    /// use rs_rocket_physics::models::Vector2D;
    ///
    /// let a = Vector2D::new(1.0, 1.0);
    /// let b = Vector2D::new(4.0, 5.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Vector2D) -> f64 {
        self.subtract(other).magnitude()
    }

    #[inline]
    pub fn distance_squared(self, other: Vector2D) -> f64 {
        self.subtract(other).magnitude_squared()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    /// Returns `PhysicsError::DivisionByZero` for a zero-length vector.
    pub fn normalized(self) -> Result<Vector2D, PhysicsError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(PhysicsError::DivisionByZero);
        }
        Ok(self.scale(1.0 / magnitude))
    }

    /// Overwrites both components in place and returns `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use rs_rocket_physics::models::Vector2D;
    ///
    /// let mut v = Vector2D::new(1.0, 2.0);
    /// let doubled = v.replace(3.0, 4.0).scale(2.0);
    /// assert_eq!(v, Vector2D::new(3.0, 4.0));
    /// assert_eq!(doubled, Vector2D::new(6.0, 8.0));
    /// ```
    pub fn replace(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtract(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        self.scale(scalar)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        *self = *self - rhs;
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from(coordinates: (f64, f64)) -> Self {
        Vector2D::new(coordinates.0, coordinates.1)
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = PhysicsError;

    /// Builds a vector from a coordinate list, which must hold exactly two values.
    fn try_from(coordinates: &[f64]) -> Result<Self, Self::Error> {
        match coordinates {
            [x, y] => Ok(Vector2D::new(*x, *y)),
            _ => Err(PhysicsError::InvalidDimensions(coordinates.len())),
        }
    }
}

impl FromCoordinates<(f64, f64)> for Vector2D {
    fn from_coord(position: (f64, f64)) -> Self {
        Vector2D::from(position)
    }
}

impl ToCoordinates<(f64, f64)> for Vector2D {
    fn to_coord(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
