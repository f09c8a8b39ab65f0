//! Built-in `--isocmask` evaluator.
//!
//! Accepts a single comparison over the scaled samples, written as
//! `a <op> <value>` with `a` standing for the sample, e.g. `a > 0.5` or
//! `a != 0`. Anything richer belongs to an external evaluator.

use std::error::Error;

use isomesh_mask::MaskEvaluator;
use isomesh_volume::ScalarVolume;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CmpOp {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
}

impl CmpOp {
    fn from_token(tok: &str) -> Option<CmpOp> {
        Some(match tok {
            ">" => CmpOp::Gt,
            ">=" => CmpOp::Ge,
            "<" => CmpOp::Lt,
            "<=" => CmpOp::Le,
            "==" => CmpOp::Eq,
            "!=" => CmpOp::Ne,
            _ => return None,
        })
    }

    #[inline]
    fn apply(self, s: f64, v: f64) -> bool {
        match self {
            CmpOp::Gt => s > v,
            CmpOp::Ge => s >= v,
            CmpOp::Lt => s < v,
            CmpOp::Le => s <= v,
            CmpOp::Eq => s == v,
            CmpOp::Ne => s != v,
        }
    }
}

#[derive(Debug)]
pub struct CmaskParseError(String);

impl std::fmt::Display for CmaskParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bad cmask expression {:?} (expected: a <op> <value>, op one of > >= < <= == !=)",
            self.0
        )
    }
}

impl std::error::Error for CmaskParseError {}

pub struct CmpEvaluator;

impl CmpEvaluator {
    fn parse(expr: &str) -> Result<(CmpOp, f64), CmaskParseError> {
        let bad = || CmaskParseError(expr.to_string());
        let mut toks = expr.split_whitespace();
        let (Some(lhs), Some(op), Some(val), None) =
            (toks.next(), toks.next(), toks.next(), toks.next())
        else {
            return Err(bad());
        };
        if lhs != "a" {
            return Err(bad());
        }
        let op = CmpOp::from_token(op).ok_or_else(bad)?;
        let val: f64 = val.parse().map_err(|_| bad())?;
        Ok((op, val))
    }
}

impl MaskEvaluator for CmpEvaluator {
    fn evaluate(
        &self,
        expr: &str,
        vol: &ScalarVolume,
    ) -> Result<(Vec<u8>, usize), Box<dyn Error>> {
        let (op, val) = Self::parse(expr)?;
        let scaled = vol
            .coerce_f64()
            .ok_or_else(|| CmaskParseError(format!("{} (samples not thresholdable)", expr)))?;
        let bytes: Vec<u8> = scaled
            .iter()
            .map(|s| u8::from(op.apply(*s, val)))
            .collect();
        let count = bytes.iter().filter(|b| **b != 0).count();
        Ok((bytes, count))
    }
}
