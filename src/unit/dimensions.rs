//! SI dimension exponents of a quantity kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnitError;

/// Number of tracked base dimensions.
pub const NUMBER_DIMENSIONS: usize = 9;

/// Base symbols in exponent order.
pub const SI_ABBREVIATIONS: [&str; NUMBER_DIMENSIONS] =
    ["rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd"];

/// Exponents of (angle, solid angle, mass, length, time, current, temperature,
/// amount of substance, luminous intensity).
///
/// Angles are kept as explicit dimensions so that, e.g., angular speed and
/// frequency remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SiDimensions([i8; NUMBER_DIMENSIONS]);

impl SiDimensions {
    pub const DIMENSIONLESS: SiDimensions = SiDimensions([0; NUMBER_DIMENSIONS]);

    pub const fn from_exponents(exponents: [i8; NUMBER_DIMENSIONS]) -> Self {
        SiDimensions(exponents)
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        angle: i8,
        solid_angle: i8,
        mass: i8,
        length: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount_of_substance: i8,
        luminous_intensity: i8,
    ) -> Self {
        SiDimensions([
            angle,
            solid_angle,
            mass,
            length,
            time,
            current,
            temperature,
            amount_of_substance,
            luminous_intensity,
        ])
    }

    pub const fn exponents(&self) -> [i8; NUMBER_DIMENSIONS] {
        self.0
    }

    /// Dimensions of a product. Exponents saturate at the `i8` range; use
    /// [`checked_plus`](Self::checked_plus) to detect overflow.
    pub const fn plus(self, other: SiDimensions) -> SiDimensions {
        let mut out = [0i8; NUMBER_DIMENSIONS];
        let mut i = 0;
        while i < NUMBER_DIMENSIONS {
            out[i] = self.0[i].saturating_add(other.0[i]);
            i += 1;
        }
        SiDimensions(out)
    }

    /// Dimensions of a quotient, saturating like [`plus`](Self::plus).
    pub const fn minus(self, other: SiDimensions) -> SiDimensions {
        let mut out = [0i8; NUMBER_DIMENSIONS];
        let mut i = 0;
        while i < NUMBER_DIMENSIONS {
            out[i] = self.0[i].saturating_sub(other.0[i]);
            i += 1;
        }
        SiDimensions(out)
    }

    /// Dimensions of a product, or `None` when an exponent leaves the `i8` range.
    pub const fn checked_plus(self, other: SiDimensions) -> Option<SiDimensions> {
        let mut out = [0i8; NUMBER_DIMENSIONS];
        let mut i = 0;
        while i < NUMBER_DIMENSIONS {
            match self.0[i].checked_add(other.0[i]) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(SiDimensions(out))
    }

    pub const fn checked_minus(self, other: SiDimensions) -> Option<SiDimensions> {
        let mut out = [0i8; NUMBER_DIMENSIONS];
        let mut i = 0;
        while i < NUMBER_DIMENSIONS {
            match self.0[i].checked_sub(other.0[i]) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(SiDimensions(out))
    }

    pub const fn invert(self) -> SiDimensions {
        SiDimensions::DIMENSIONLESS.minus(self)
    }

    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < NUMBER_DIMENSIONS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Parse strings such as `"kgm2/s3"`, `"kg.m2.s-3"`, `"m^2"` or `"1"`.
    pub fn parse(text: &str) -> Result<Self, UnitError> {
        let text = text.trim();
        let mut parts = text.split('/');
        let numerator = parts.next().unwrap_or("");
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(UnitError::Parse(format!(
                "SI string `{text}` contains more than one division sign"
            )));
        }
        let dims = parse_product(numerator, text)?;
        match denominator {
            Some(den) => dims
                .checked_minus(parse_product(den, text)?)
                .ok_or_else(|| exponent_overflow(text)),
            None => Ok(dims),
        }
    }
}

/// Base symbols ordered longest first so `mol` wins over `m` and `sr` over `s`.
const MATCH_ORDER: [usize; NUMBER_DIMENSIONS] = [0, 7, 1, 2, 8, 3, 4, 5, 6];

fn parse_product(part: &str, whole: &str) -> Result<SiDimensions, UnitError> {
    let mut dims = [0i8; NUMBER_DIMENSIONS];
    let part = part.trim();
    if part.is_empty() || part == "1" {
        return Ok(SiDimensions(dims));
    }
    let mut rest = part;
    while !rest.is_empty() {
        rest = rest.trim_start_matches(['.', '*', ' ']);
        if rest.is_empty() {
            break;
        }
        let Some(slot) = MATCH_ORDER
            .iter()
            .copied()
            .find(|&i| rest.starts_with(SI_ABBREVIATIONS[i]))
        else {
            return Err(UnitError::Parse(format!(
                "unexpected `{rest}` in SI string `{whole}`"
            )));
        };
        rest = &rest[SI_ABBREVIATIONS[slot].len()..];
        rest = rest.strip_prefix('^').unwrap_or(rest);
        let negative = rest.starts_with('-');
        if negative {
            rest = &rest[1..];
        }
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        let exponent: i8 = if digits == 0 {
            if negative {
                return Err(UnitError::Parse(format!(
                    "SI string `{whole}` has a minus sign for {} but no exponent",
                    SI_ABBREVIATIONS[slot]
                )));
            }
            1
        } else {
            rest[..digits]
                .parse()
                .map_err(|_| UnitError::Parse(format!("bad exponent in SI string `{whole}`")))?
        };
        rest = &rest[digits..];
        let signed = if negative { -exponent } else { exponent };
        dims[slot] = dims[slot].checked_add(signed).ok_or_else(|| exponent_overflow(whole))?;
    }
    Ok(SiDimensions(dims))
}

fn exponent_overflow(whole: &str) -> UnitError {
    UnitError::Parse(format!("exponent out of range in SI string `{whole}`"))
}

impl FromStr for SiDimensions {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiDimensions::parse(s)
    }
}

impl fmt::Display for SiDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (i, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str(".")?;
            }
            first = false;
            f.write_str(SI_ABBREVIATIONS[i])?;
            if e != 1 {
                write!(f, "{e}")?;
            }
        }
        Ok(())
    }
}
