// pc-core/src/units.rs

use uom::si::f64::{
    Power as UomPower, Pressure as UomPressure, TemperatureInterval as UomTemperatureInterval,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

use crate::numeric::Real;

// Public canonical unit types (SI, f64)
pub type Power = UomPower;
/// Gauge pressure. Correlations are tabulated against barg (kPa rise for fans).
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn barg(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn delta_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

/// Magnitudes in the units the cost correlations are regressed against.
pub mod tabulated {
    use super::*;

    #[inline]
    pub fn kw(p: Power) -> Real {
        p.get::<uom::si::power::kilowatt>()
    }

    #[inline]
    pub fn m3(v: Volume) -> Real {
        v.get::<uom::si::volume::cubic_meter>()
    }

    #[inline]
    pub fn m3ps(q: VolumeRate) -> Real {
        q.get::<uom::si::volume_rate::cubic_meter_per_second>()
    }

    #[inline]
    pub fn barg(p: Pressure) -> Real {
        p.get::<uom::si::pressure::bar>()
    }

    #[inline]
    pub fn kpa(p: Pressure) -> Real {
        p.get::<uom::si::pressure::kilopascal>()
    }

    /// Superheat in K (identical to °C for an interval).
    #[inline]
    pub fn delta_k(dt: TempInterval) -> Real {
        dt.get::<uom::si::temperature_interval::kelvin>()
    }
}
