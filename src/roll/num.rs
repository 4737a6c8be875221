use crate::common::*;
use crate::error::{EvalError, Result};
use std::fmt;

/// A plain numeric result.
///
/// Dice and arithmetic stay integral; combinatorics too large for [Int],
/// and integer overflow, fall back to floats.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(Int),
    Float(Float),
}

impl Number {
    pub(crate) const ZERO: Self = Self::Int(0);

    /// Rounds towards negative infinity; floats saturate at the bounds of [Int].
    pub fn as_int(self) -> Int {
        match self {
            Self::Int(x) => x,
            Self::Float(x) => x.floor() as Int,
        }
    }

    pub fn as_float(self) -> Float {
        match self {
            Self::Int(x) => x as Float,
            Self::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(x) => x == 0,
            Self::Float(x) => x == 0.0,
        }
    }

    /// Division rounded towards negative infinity.
    pub fn floor_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(EvalError::Syntax);
        }
        Ok(match (self, rhs) {
            (Self::Int(x), Self::Int(y)) => match x.checked_div(y) {
                Some(q) if x % y != 0 && (x < 0) != (y < 0) => Self::Int(q - 1),
                Some(q) => Self::Int(q),
                None => Self::Float((x as Float / y as Float).floor()),
            },
            (x, y) => Self::Float((x.as_float() / y.as_float()).floor()),
        })
    }
}

macro_rules! num_impl_bin_op {
    ($Name:ident, $fn_name:ident, $checked:ident) => {
        impl std::ops::$Name for Number {
            type Output = Self;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                use std::ops::$Name;
                match (self, rhs) {
                    (Self::Int(x), Self::Int(y)) => x
                        .$checked(y)
                        .map_or_else(|| Self::Float((x as Float).$fn_name(y as Float)), Self::Int),
                    (x, y) => Self::Float(x.as_float().$fn_name(y.as_float())),
                }
            }
        }
    };
}

num_impl_bin_op!(Add, add, checked_add);
num_impl_bin_op!(Sub, sub, checked_sub);
num_impl_bin_op!(Mul, mul, checked_mul);

impl std::iter::Sum for Number {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x == y,
            (x, y) => x.as_float().eq(&y.as_float()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x.partial_cmp(y),
            (x, y) => x.as_float().partial_cmp(&y.as_float()),
        }
    }
}

impl From<Int> for Number {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<Float> for Number {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Float(x) => fmt::Display::fmt(x, f),
        }
    }
}
