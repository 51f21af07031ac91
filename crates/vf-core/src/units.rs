use uom::si::f64::{Angle as UomAngle, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Time = UomTime;

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Value of a time quantity in seconds.
#[inline]
pub fn secs(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

/// Value of an angle in degrees, for status output.
#[inline]
pub fn degrees(a: Angle) -> f64 {
    use uom::si::angle::degree;
    a.get::<degree>()
}
