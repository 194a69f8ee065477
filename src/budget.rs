//! The output-count budget and its distribution across sibling candidates.
//!
//! A `Budget` is a high-precision rational remaining-leaf-count: ordinary
//! 64-bit floating point drifts after enough levels of division to miss
//! the target count on deep trees, so this uses arbitrary-precision
//! rationals throughout.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

/// The remaining leaf count a subtree is permitted to emit.
#[derive(Clone, Debug, PartialEq)]
pub enum Budget {
    /// Emit every achievable leaf (the `-1`/"create all" sentinel).
    Unlimited,
    /// Emit exactly this many leaves (rounded down at the leaves), never
    /// negative.
    Exact(BigRational),
}

/// The adjustment added before each floor in the divide-and-floor walk, to
/// defeat boundary-case truncation. `~0.008`.
fn epsilon() -> BigRational {
    BigRational::new(BigInt::from(1), BigInt::from(125))
}

impl Budget {
    pub fn unlimited() -> Self {
        Budget::Unlimited
    }

    pub fn from_u64(n: u64) -> Self {
        Budget::Exact(BigRational::from_integer(BigInt::from(n)))
    }

    pub fn zero() -> Self {
        Budget::Exact(BigRational::zero())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Budget::Exact(r) if r.is_zero())
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Budget::Unlimited)
    }

    /// The number of candidates this budget can ever justify drawing from
    /// the enumerator: `ceil(B)`, or `None` when unlimited.
    pub fn candidate_cap(&self) -> Option<usize> {
        match self {
            Budget::Unlimited => None,
            Budget::Exact(r) => {
                let ceil = r.ceil();
                Some(ceil.to_integer().to_usize().unwrap_or(usize::MAX))
            }
        }
    }

    /// Distributes this budget across `child_count` surviving candidates
    /// so that the children's budgets sum to exactly this one (when it is
    /// an integer):
    ///
    /// 1. Unlimited budget: every child is unlimited.
    /// 2. `B >= C`: each child `i` gets `floor(step*(i+1)) - floor(step*i)`
    ///    where `step = (B + eps) / C`.
    /// 3. `B < C`: the first `floor(B)` children get 1, the rest get 0.
    pub fn distribute(&self, child_count: usize) -> Vec<Budget> {
        assert!(child_count > 0, "cannot distribute budget across zero children");

        match self {
            Budget::Unlimited => vec![Budget::Unlimited; child_count],
            Budget::Exact(b) => {
                let c = BigRational::from_integer(BigInt::from(child_count as u64));
                if b >= &c {
                    let step = (b + epsilon()) / &c;
                    let mut out = Vec::with_capacity(child_count);
                    let mut prev_floor = BigInt::zero();
                    for i in 1..=child_count {
                        let scaled = &step * BigRational::from_integer(BigInt::from(i as u64));
                        let this_floor = scaled.floor().to_integer();
                        let share = &this_floor - &prev_floor;
                        out.push(Budget::Exact(BigRational::from_integer(share)));
                        prev_floor = this_floor;
                    }
                    out
                } else {
                    let whole = b.floor().to_integer();
                    let whole_usize = whole.to_usize().unwrap_or(0);
                    let mut out = Vec::with_capacity(child_count);
                    for i in 0..child_count {
                        if i < whole_usize {
                            out.push(Budget::Exact(BigRational::one()));
                        } else {
                            out.push(Budget::zero());
                        }
                    }
                    out
                }
            }
        }
    }

    /// The integer value of this budget, for reporting/testing. Panics on
    /// `Unlimited`; callers should check [`Budget::is_unlimited`] first.
    pub fn as_u64(&self) -> u64 {
        match self {
            Budget::Unlimited => panic!("unlimited budget has no fixed count"),
            Budget::Exact(r) => r.to_integer().to_u64().unwrap_or(u64::MAX),
        }
    }
}
