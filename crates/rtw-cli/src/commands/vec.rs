//! Vector command.
//!
//! Evaluates one vector operation and prints the result: vectors as
//! `[x y z]`, scalars as plain numbers.

use std::fmt;

use anyhow::{Context, Result};
use clap::ValueEnum;
use rtw_math::Vec3;
use tracing::{debug, trace};

use super::parse_vec3;
use crate::VecArgs;

/// Operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VecOp {
    /// -a
    Neg,
    /// a + b
    Add,
    /// a - b
    Sub,
    /// Component-wise a * b
    Mul,
    /// a + s
    #[value(alias = "add-s")]
    AddScalar,
    /// a - s
    #[value(alias = "sub-s")]
    SubScalar,
    /// a * s
    #[value(alias = "mul-s")]
    MulScalar,
    /// a / s (non-finite on zero)
    #[value(alias = "div-s")]
    DivScalar,
    /// a / s, rejecting zero
    CheckedDiv,
    /// |a|
    #[value(alias = "len")]
    Length,
    /// |a|^2
    #[value(alias = "len-sq")]
    LengthSquared,
    /// a . b
    Dot,
    /// a x b
    Cross,
    /// a / |a| (non-finite on zero)
    Unit,
    /// a / |a|, rejecting zero length
    TryUnit,
}

/// Result of a vector operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Vector result.
    Vector(Vec3),
    /// Scalar result.
    Scalar(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Vector(v) => write!(f, "{}", v),
            Value::Scalar(s) => write!(f, "{}", s),
        }
    }
}

fn operand<'a>(op: VecOp, b: Option<&'a str>) -> Result<&'a str> {
    b.with_context(|| format!("{:?} needs a second operand", op))
}

fn vector(op: VecOp, b: Option<&str>) -> Result<Vec3> {
    parse_vec3(operand(op, b)?)
}

fn scalar(op: VecOp, b: Option<&str>) -> Result<f64> {
    let s = operand(op, b)?;
    s.trim()
        .parse()
        .with_context(|| format!("invalid scalar {:?}", s))
}

/// Applies `op` to `a` and the optional second operand.
pub fn evaluate(op: VecOp, a: Vec3, b: Option<&str>) -> Result<Value> {
    use Value::{Scalar, Vector};

    Ok(match op {
        VecOp::Neg => Vector(-a),
        VecOp::Add => Vector(a + vector(op, b)?),
        VecOp::Sub => Vector(a - vector(op, b)?),
        VecOp::Mul => Vector(a * vector(op, b)?),
        VecOp::AddScalar => Vector(a + scalar(op, b)?),
        VecOp::SubScalar => Vector(a - scalar(op, b)?),
        VecOp::MulScalar => Vector(a * scalar(op, b)?),
        VecOp::DivScalar => Vector(a / scalar(op, b)?),
        VecOp::CheckedDiv => Vector(a.checked_div(scalar(op, b)?)?),
        VecOp::Length => Scalar(a.length()),
        VecOp::LengthSquared => Scalar(a.length_squared()),
        VecOp::Dot => Scalar(a.dot(vector(op, b)?)),
        VecOp::Cross => Vector(a.cross(vector(op, b)?)),
        VecOp::Unit => Vector(a.unit()),
        VecOp::TryUnit => Vector(a.try_unit()?),
    })
}

/// Runs the vec command.
pub fn run(args: VecArgs, verbose: u8) -> Result<()> {
    trace!(op = ?args.op, a = %args.a, b = ?args.b, "vec::run");

    let a = parse_vec3(&args.a)?;
    let value = evaluate(args.op, a, args.b.as_deref())?;
    debug!(result = %value, "Evaluated");

    if verbose > 0 {
        println!("{:?}({}{}) =", args.op, a, args.b.map(|b| format!(", {}", b)).unwrap_or_default());
    }
    println!("{}", value);

    Ok(())
}
