//! Multiplication and division table between quantity kinds.
//!
//! `A: KindMul<B, Output = C>` says that a value of kind `A` times a value of kind
//! `B` is a value of kind `C`. Entries are declared with `mul_table!` and
//! `div_table!`; the tests check every entry against the SI exponents.

use super::*;

pub trait KindMul<Rhs: QuantityKind>: QuantityKind {
    type Output: QuantityKind;
}

pub trait KindDiv<Rhs: QuantityKind>: QuantityKind {
    type Output: QuantityKind;
}

/// A kind divided by itself is a pure number.
impl<K: RelativeKind> KindDiv<K> for K {
    type Output = Dimensionless;
}

/// Scaling by a pure number keeps the kind.
impl<K: RelativeKind> KindMul<Dimensionless> for K {
    type Output = K;
}

macro_rules! mul_table {
    ($($lhs:ident * $rhs:ident => $out:ident;)*) => {
        $(impl KindMul<$rhs> for $lhs {
            type Output = $out;
        })*

        #[cfg(test)]
        const MUL_ENTRIES: &[(&str, SiDimensions, SiDimensions, SiDimensions)] = &[
            $((
                concat!(stringify!($lhs), " * ", stringify!($rhs)),
                $lhs::DIMENSIONS,
                $rhs::DIMENSIONS,
                $out::DIMENSIONS,
            ),)*
        ];
    };
}

macro_rules! div_table {
    ($($lhs:ident / $rhs:ident => $out:ident;)*) => {
        $(impl KindDiv<$rhs> for $lhs {
            type Output = $out;
        })*

        #[cfg(test)]
        const DIV_ENTRIES: &[(&str, SiDimensions, SiDimensions, SiDimensions)] = &[
            $((
                concat!(stringify!($lhs), " / ", stringify!($rhs)),
                $lhs::DIMENSIONS,
                $rhs::DIMENSIONS,
                $out::DIMENSIONS,
            ),)*
        ];
    };
}

mul_table! {
    Length * Length => Area;
    Area * Length => Volume;
    Length * Area => Volume;
    Speed * Duration => Length;
    Duration * Speed => Length;
    Length * Frequency => Speed;
    Acceleration * Duration => Speed;
    Frequency * Duration => Dimensionless;
    Duration * Frequency => Dimensionless;
    Mass * Acceleration => Force;
    Acceleration * Mass => Force;
    Force * Length => Energy;
    Length * Force => Energy;
    Pressure * Area => Force;
    Pressure * Volume => Energy;
    Power * Duration => Energy;
    Duration * Power => Energy;
    Force * Speed => Power;
    Density * Volume => Mass;
    Volume * Density => Mass;
    LinearDensity * Length => Mass;
    FlowVolume * Duration => Volume;
    FlowMass * Duration => Mass;
    ElectricalCurrent * Duration => ElectricalCharge;
    ElectricalPotential * ElectricalCurrent => Power;
    ElectricalCurrent * ElectricalPotential => Power;
    ElectricalCurrent * ElectricalResistance => ElectricalPotential;
}

div_table! {
    Area / Length => Length;
    Volume / Length => Area;
    Volume / Area => Length;
    Length / Duration => Speed;
    Length / Speed => Duration;
    Speed / Duration => Acceleration;
    Dimensionless / Duration => Frequency;
    Dimensionless / Frequency => Duration;
    Force / Mass => Acceleration;
    Force / Acceleration => Mass;
    Force / Area => Pressure;
    Energy / Length => Force;
    Energy / Force => Length;
    Energy / Duration => Power;
    Energy / Power => Duration;
    Energy / Volume => Pressure;
    Torque / Length => Force;
    Torque / Force => Length;
    Power / Speed => Force;
    Mass / Volume => Density;
    Mass / Density => Volume;
    Mass / Length => LinearDensity;
    Volume / Duration => FlowVolume;
    Mass / Duration => FlowMass;
    ElectricalCharge / Duration => ElectricalCurrent;
    Power / ElectricalCurrent => ElectricalPotential;
    Power / ElectricalPotential => ElectricalCurrent;
    ElectricalPotential / ElectricalCurrent => ElectricalResistance;
    ElectricalPotential / ElectricalResistance => ElectricalCurrent;
}
