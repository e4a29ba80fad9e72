use soroban_sdk::{ log, Env };

use crate::error::{ ErrorCode, MaxosResult };
use crate::math::ceil_div::CheckedCeilDiv;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> MaxosResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> MaxosResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> MaxosResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> MaxosResult<Self>;
    fn safe_div_ceil(self, rhs: Self, env: &Env) -> MaxosResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> MaxosResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathOverflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> MaxosResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathOverflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> MaxosResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathOverflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> MaxosResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathOverflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div_ceil(self, v: $t, env: &Env) -> MaxosResult<$t> {
                match self.checked_ceil_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathOverflow)
                    }
                }
            }
        }
    };
}

checked_impl!(u32);
checked_impl!(u64);
checked_impl!(i128);

/// `value * numerator / denominator`, rounded down.
pub fn mul_div_floor(env: &Env, value: i128, numerator: i128, denominator: i128) -> MaxosResult<i128> {
    value.safe_mul(numerator, env)?.safe_div(denominator, env)
}

/// `value * numerator / denominator`, rounded up. Only meaningful for non-negative inputs.
pub fn mul_div_ceil(env: &Env, value: i128, numerator: i128, denominator: i128) -> MaxosResult<i128> {
    value.safe_mul(numerator, env)?.safe_div_ceil(denominator, env)
}

/// Share of `total` assigned by `bps` basis points, rounded down.
pub fn bps_of(env: &Env, total: i128, bps: u32) -> MaxosResult<i128> {
    mul_div_floor(env, total, bps as i128, crate::constants::BPS_DENOMINATOR as i128)
}
