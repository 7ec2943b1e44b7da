//! Duration units, and the epoch-based units of [`Time`](crate::kind::Time).
//!
//! Time instants are stored as seconds since 1970-01-01T00:00:00Z. The `EPOCH_*`
//! units differ only in their factor; `EPOCH_YEAR_1` and `EPOCH_J2000` shift the
//! zero to 0001-01-01 (proleptic Gregorian) and to 2000-01-01T12:00:00Z.

use super::{linear, offset};
use crate::kind::{Duration, Time};
use crate::unit::{Unit, UnitSystem};

pub const SECOND: Unit<Duration> = Unit::si("s", "second");
pub const MILLISECOND: Unit<Duration> = SECOND.derive_linear(1.0e-3, "ms", "millisecond").in_system(UnitSystem::SiDerived);
pub const MICROSECOND: Unit<Duration> = SECOND.derive_linear(1.0e-6, "μs", "microsecond").in_system(UnitSystem::SiDerived);
pub const NANOSECOND: Unit<Duration> = SECOND.derive_linear(1.0e-9, "ns", "nanosecond").in_system(UnitSystem::SiDerived);
pub const MINUTE: Unit<Duration> = linear("min", "minute", 60.0, UnitSystem::SiAccepted);
pub const HOUR: Unit<Duration> = MINUTE.derive_linear(60.0, "h", "hour");
pub const DAY: Unit<Duration> = HOUR.derive_linear(24.0, "day", "day");
pub const WEEK: Unit<Duration> = DAY.derive_linear(7.0, "wk", "week").in_system(UnitSystem::Other);
pub const FORTNIGHT: Unit<Duration> = WEEK.derive_linear(2.0, "ftn", "fortnight");
/// Julian year of 365.25 days.
pub const YEAR: Unit<Duration> = DAY.derive_linear(365.25, "a", "year").in_system(UnitSystem::Other);

pub const STANDARD: Unit<Duration> = SECOND;
pub const ALL: &[Unit<Duration>] =
    &[SECOND, MILLISECOND, MICROSECOND, NANOSECOND, MINUTE, HOUR, DAY, WEEK, FORTNIGHT, YEAR];

/// Seconds from 0001-01-01T00:00:00Z to the Unix epoch, negated.
const YEAR_1_OFFSET: f64 = -62_135_596_800.0;
/// Seconds from the Unix epoch to 2000-01-01T12:00:00Z.
const J2000_OFFSET: f64 = 946_728_000.0;

pub const EPOCH_SECOND: Unit<Time> = Unit::si("s", "second since epoch").in_system(UnitSystem::Other);
pub const EPOCH_MILLISECOND: Unit<Time> = linear("ms", "millisecond since epoch", 1.0e-3, UnitSystem::Other);
pub const EPOCH_MINUTE: Unit<Time> = linear("min", "minute since epoch", 60.0, UnitSystem::Other);
pub const EPOCH_HOUR: Unit<Time> = linear("h", "hour since epoch", 3600.0, UnitSystem::Other);
pub const EPOCH_DAY: Unit<Time> = linear("day", "day since epoch", 86_400.0, UnitSystem::Other);
pub const EPOCH_WEEK: Unit<Time> = linear("wk", "week since epoch", 604_800.0, UnitSystem::Other);
pub const EPOCH_YEAR_1: Unit<Time> = offset("s(y1)", "second since year 1", 1.0, YEAR_1_OFFSET, UnitSystem::Other);
pub const EPOCH_J2000: Unit<Time> = offset("s(J2000)", "second since J2000", 1.0, J2000_OFFSET, UnitSystem::Other);

pub const STANDARD_ABS: Unit<Time> = EPOCH_SECOND;
pub const ALL_ABS: &[Unit<Time>] = &[
    EPOCH_SECOND,
    EPOCH_MILLISECOND,
    EPOCH_MINUTE,
    EPOCH_HOUR,
    EPOCH_DAY,
    EPOCH_WEEK,
    EPOCH_YEAR_1,
    EPOCH_J2000,
];
