/*!
Exact conversion of a decimal fraction into smaller time units.

A fraction like `16.000001` hours is kept as the rational `1/1000000`
and expanded into whole minutes, seconds and microseconds with integer
quotient and remainder arithmetic. Floating point is never involved, so
values near the precision limit convert exactly.
*/

/// A unit of time that a fraction can be attached to or expanded into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Unit {
    Hour,
    Minute,
    Second,
    Microsecond,
}

impl Unit {
    /// Returns the number of units of the next smaller unit in one of
    /// this unit, along with that smaller unit. Microseconds are the
    /// smallest unit and return `None`.
    const fn conversion(self) -> Option<(i64, Unit)> {
        match self {
            Unit::Hour => Some((60, Unit::Minute)),
            Unit::Minute => Some((60, Unit::Second)),
            Unit::Second => Some((1_000_000, Unit::Microsecond)),
            Unit::Microsecond => None,
        }
    }
}

/// A decimal fraction of a unit of time, represented exactly.
///
/// The numerator is the parsed digits and the denominator is a power of
/// ten determined by how many digits there were. The invariant
/// `0 <= numerator < denominator` holds by construction, since the
/// digits came after a decimal point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Fraction {
    numerator: i64,
    denominator: i64,
    unit: Unit,
}

impl Fraction {
    pub(crate) fn new(
        numerator: i64,
        denominator: i64,
        unit: Unit,
    ) -> Fraction {
        debug_assert!(0 <= numerator && numerator < denominator);
        Fraction { numerator, denominator, unit }
    }

    /// Returns the unit this fraction is attached to.
    pub(crate) fn unit(&self) -> Unit {
        self.unit
    }

    /// Expands this fraction into whole amounts of each smaller unit.
    ///
    /// At each step, the fraction is multiplied by the conversion factor
    /// to the next smaller unit. The integer quotient is the whole
    /// amount of that unit and the remainder carries down as a new
    /// fraction of it. The descent stops as soon as the remainder is
    /// zero, or after microseconds, where any remainder left is beyond
    /// the supported precision and by construction there never is any.
    pub(crate) fn to_subunits(&self) -> Subunits {
        let mut subunits = Subunits::default();
        let Fraction { mut numerator, denominator, mut unit } = *self;
        while numerator != 0 {
            let Some((factor, smaller)) = unit.conversion() else { break };
            let scaled = numerator * factor;
            subunits.set(smaller, scaled / denominator);
            numerator = scaled % denominator;
            unit = smaller;
        }
        subunits
    }
}

/// Whole amounts of each unit a fraction expanded into.
///
/// Units smaller than the fraction's own unit that the descent never
/// reached are zero, which coincides with what an absent component
/// defaults to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Subunits {
    pub(crate) minute: i8,
    pub(crate) second: i8,
    pub(crate) microsecond: i32,
}

impl Subunits {
    fn set(&mut self, unit: Unit, value: i64) {
        match unit {
            // A whole amount is always less than the conversion factor
            // that produced it, so these casts cannot truncate.
            Unit::Minute => self.minute = value as i8,
            Unit::Second => self.second = value as i8,
            Unit::Microsecond => self.microsecond = value as i32,
            // The descent only ever moves to smaller units.
            Unit::Hour => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_units() {
        let sub = Fraction::new(5, 10, Unit::Hour).to_subunits();
        assert_eq!(sub, Subunits { minute: 30, second: 0, microsecond: 0 });

        let sub = Fraction::new(5, 10, Unit::Minute).to_subunits();
        assert_eq!(sub, Subunits { minute: 0, second: 30, microsecond: 0 });

        let sub = Fraction::new(5, 10, Unit::Second).to_subunits();
        assert_eq!(
            sub,
            Subunits { minute: 0, second: 0, microsecond: 500_000 },
        );
    }

    // One microsecond worth of an hour. A binary double cannot represent
    // 0.000001, so this is the case where exact arithmetic matters.
    #[test]
    fn smallest_hour_fraction_is_exact() {
        let sub = Fraction::new(1, 1_000_000, Unit::Hour).to_subunits();
        assert_eq!(sub, Subunits { minute: 0, second: 0, microsecond: 3600 });
    }

    #[test]
    fn remainder_carries_down() {
        // 0.333333 minutes is 19.99998 seconds.
        let sub = Fraction::new(333_333, 1_000_000, Unit::Minute).to_subunits();
        assert_eq!(
            sub,
            Subunits { minute: 0, second: 19, microsecond: 999_980 },
        );

        // 0.9999 hours is 59 minutes, 59 seconds and 640000 microseconds.
        let sub = Fraction::new(9_999, 10_000, Unit::Hour).to_subunits();
        assert_eq!(
            sub,
            Subunits { minute: 59, second: 59, microsecond: 640_000 },
        );
    }

    #[test]
    fn zero_stops_descent() {
        let sub = Fraction::new(0, 10, Unit::Hour).to_subunits();
        assert_eq!(sub, Subunits::default());
    }
}
