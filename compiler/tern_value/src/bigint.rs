//! Arbitrary-precision signed decimal integer.
//!
//! Digits are stored base 10, least significant first. Every constructor and
//! operation returns the canonical form:
//!
//! - no trailing zero digit in storage (no leading zero in the written number)
//! - zero is the empty digit vector with `negative == false`
//!
//! `BigInt` implements `Add`, `Sub`, `Mul` and `Neg` (which cannot fail) but
//! not `Div` or `Rem`: division goes through [`BigInt::checked_div_floor`] and
//! [`BigInt::checked_mod_floor`], which return `None` for a zero divisor.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Arbitrary-precision signed integer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
}

/// Error returned when text is not a decimal integer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal integer: '{0}'")]
pub struct ParseBigIntError(String);

impl BigInt {
    /// The zero value.
    #[inline]
    pub fn zero() -> Self {
        BigInt::default()
    }

    /// The value one.
    #[inline]
    pub fn one() -> Self {
        BigInt {
            negative: false,
            digits: vec![1],
        }
    }

    /// Build from a sign and little-endian digits, normalizing to canonical form.
    fn from_parts(negative: bool, mut digits: Vec<u8>) -> Self {
        trim(&mut digits);
        let negative = negative && !digits.is_empty();
        BigInt { negative, digits }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Parse the leading integer of `text`.
    ///
    /// Surrounding whitespace is ignored, an optional sign is accepted, and
    /// parsing stops at the first non-digit. Returns `None` when no digit
    /// follows the sign.
    pub fn parse_leading(text: &str) -> Option<BigInt> {
        let text = text.trim();
        let (negative, rest) = split_sign(text);
        let run = rest.bytes().take_while(u8::is_ascii_digit).count();
        if run == 0 {
            return None;
        }
        Some(Self::from_digit_str(negative, &rest[..run]))
    }

    /// Build from a sign and a non-empty string of ASCII digits (most significant first).
    fn from_digit_str(negative: bool, digits: &str) -> Self {
        let digits = digits.bytes().rev().map(|b| b - b'0').collect();
        Self::from_parts(negative, digits)
    }

    /// Floor division. Returns `None` if `rhs` is zero.
    ///
    /// The quotient is rounded toward negative infinity, so `-7 // 2 == -4`.
    pub fn checked_div_floor(&self, rhs: &BigInt) -> Option<BigInt> {
        self.checked_div_mod_floor(rhs).map(|(q, _)| q)
    }

    /// Floor modulo: `self - rhs * (self // rhs)`. Returns `None` if `rhs` is zero.
    ///
    /// A non-zero result has the sign of `rhs`, so `-7 % 2 == 1`.
    pub fn checked_mod_floor(&self, rhs: &BigInt) -> Option<BigInt> {
        self.checked_div_mod_floor(rhs).map(|(_, r)| r)
    }

    /// Floor quotient and remainder together. Returns `None` if `rhs` is zero.
    pub fn checked_div_mod_floor(&self, rhs: &BigInt) -> Option<(BigInt, BigInt)> {
        if rhs.is_zero() {
            return None;
        }
        let (quot, rem) = div_rem_magnitude(&self.digits, &rhs.digits);
        let signs_differ = self.negative != rhs.negative;
        let mut quotient = BigInt::from_parts(signs_differ, quot);
        if signs_differ && !rem.is_empty() {
            quotient.decrement();
        }
        let remainder = self - &(rhs * &quotient);
        Some((quotient, remainder))
    }

    /// Add one in place.
    pub fn increment(&mut self) {
        *self = &*self + &BigInt::one();
    }

    /// Subtract one in place.
    pub fn decrement(&mut self) {
        *self = &*self - &BigInt::one();
    }

    /// Nearest `f64`; magnitudes beyond `f64::MAX` become infinite.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or_else(|_| {
            let magnitude = self
                .digits
                .iter()
                .rev()
                .fold(0.0, |acc, &d| acc * 10.0 + f64::from(d));
            if self.negative {
                -magnitude
            } else {
                magnitude
            }
        })
    }

    /// Truncate a float toward zero. Returns `None` for NaN or infinities.
    pub fn from_f64(value: f64) -> Option<BigInt> {
        if !value.is_finite() {
            return None;
        }
        // `{:.0}` of an integral float prints its exact decimal expansion.
        format!("{:.0}", value.trunc()).parse().ok()
    }

    /// Convert to `usize`. Returns `None` for negative values or on overflow.
    pub fn to_usize(&self) -> Option<usize> {
        if self.negative {
            return None;
        }
        self.digits.iter().rev().try_fold(0usize, |acc, &d| {
            acc.checked_mul(10)?.checked_add(usize::from(d))
        })
    }

    /// Convert to `i64`. Returns `None` if the value does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.digits.iter().rev().try_fold(0i128, |acc, &d| {
            acc.checked_mul(10)?.checked_add(i128::from(d))
        })?;
        let signed = if self.negative { -magnitude } else { magnitude };
        i64::try_from(signed).ok()
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::new();
        while magnitude > 0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "remainder of division by 10 fits in u8"
            )]
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        BigInt::from_parts(value < 0, digits)
    }
}

impl From<bool> for BigInt {
    fn from(value: bool) -> Self {
        if value {
            BigInt::one()
        } else {
            BigInt::zero()
        }
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Strict parse: optional sign followed by one or more ASCII digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = split_sign(s);
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError(s.to_string()));
        }
        Ok(Self::from_digit_str(negative, rest))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        let mut out = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            out.push('-');
        }
        out.extend(self.digits.iter().rev().map(|&d| char::from(b'0' + d)));
        f.write_str(&out)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(&self.digits, &other.digits),
            (true, true) => cmp_magnitude(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.digits.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(!self.negative, self.digits)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return BigInt::from_parts(self.negative, add_magnitude(&self.digits, &rhs.digits));
        }
        match cmp_magnitude(&self.digits, &rhs.digits) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_parts(self.negative, sub_magnitude(&self.digits, &rhs.digits))
            }
            Ordering::Less => {
                BigInt::from_parts(rhs.negative, sub_magnitude(&rhs.digits, &self.digits))
            }
        }
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_parts(
            self.negative != rhs.negative,
            mul_magnitude(&self.digits, &rhs.digits),
        )
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

// Magnitude helpers. All operate on little-endian digit slices.

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn trim(digits: &mut Vec<u8>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitude(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
        out.push(sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// `a - b` for `a >= b`.
fn sub_magnitude(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    for (i, &da) in a.iter().enumerate() {
        #[expect(
            clippy::cast_possible_wrap,
            reason = "decimal digits are at most 9"
        )]
        let mut diff = da as i8 - b.get(i).copied().unwrap_or(0) as i8 - borrow;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        #[expect(clippy::cast_sign_loss, reason = "diff is in 0..=9 here")]
        out.push(diff as u8);
    }
    trim(&mut out);
    out
}

/// Grade-school multiplication: digit convolution, then carry propagation.
fn mul_magnitude(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &da) in a.iter().enumerate() {
        for (j, &db) in b.iter().enumerate() {
            acc[i + j] += u64::from(da) * u64::from(db);
        }
    }
    let mut out = Vec::with_capacity(acc.len() + 1);
    let mut carry = 0u64;
    for slot in acc {
        let total = slot + carry;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "remainder of division by 10 fits in u8"
        )]
        out.push((total % 10) as u8);
        carry = total / 10;
    }
    while carry > 0 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "remainder of division by 10 fits in u8"
        )]
        out.push((carry % 10) as u8);
        carry /= 10;
    }
    trim(&mut out);
    out
}

/// Schoolbook long division on magnitudes; `b` must be non-zero.
///
/// For each quotient position from most to least significant, the divisor
/// shifted to that position is subtracted as many times as it fits.
fn div_rem_magnitude(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    if cmp_magnitude(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    let mut rem = a.to_vec();
    let top = a.len() - b.len();
    let mut quot = vec![0u8; top + 1];
    for shift in (0..=top).rev() {
        let mut shifted = vec![0u8; shift];
        shifted.extend_from_slice(b);
        while cmp_magnitude(&rem, &shifted) != Ordering::Less {
            rem = sub_magnitude(&rem, &shifted);
            quot[shift] += 1;
        }
    }
    trim(&mut quot);
    (quot, rem)
}
