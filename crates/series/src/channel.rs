//! Physical quantities carried by an hourly series.

use std::fmt;
use std::str::FromStr;

use crate::error::SeriesError;

/// One named hourly channel of a weather series.
///
/// The column name of each variant is the name used in Parquet files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// Air temperature (°C).
    Tmp,
    /// Humidity ratio (g/kg dry air).
    Mr,
    /// Estimated global horizontal irradiance.
    DswrfEst,
    /// Model global horizontal irradiance.
    DswrfMsm,
    /// Downward long-wave radiation.
    Ld,
    /// North-south wind component (m/s).
    Vgrd,
    /// East-west wind component (m/s).
    Ugrd,
    /// Surface pressure.
    Pres,
    /// Hourly precipitation (mm/h).
    Apcp01,
    /// Relative humidity.
    Rh,
    /// Vapour pressure.
    Pw,
    /// Dew point temperature.
    Dt,
    /// Nocturnal radiation.
    Nr,
    /// Solar altitude.
    SolarAltitude,
    /// Solar azimuth.
    SolarAzimuth,
    /// Direct-normal irradiance, estimated basis.
    DnEst,
    /// Diffuse horizontal irradiance, estimated basis.
    ShEst,
    /// Total horizontal irradiance, estimated basis.
    DtEst,
    /// Direct-normal irradiance, model basis.
    DnMsm,
    /// Diffuse horizontal irradiance, model basis.
    ShMsm,
    /// Total horizontal irradiance, model basis.
    DtMsm,
    /// 16-point wind speed (m/s).
    WindSpeed,
    /// 16-point wind direction (degrees).
    WindDirection,
}

impl Channel {
    /// Every channel in column order.
    pub const ALL: [Channel; 23] = [
        Channel::Tmp,
        Channel::Mr,
        Channel::DswrfEst,
        Channel::DswrfMsm,
        Channel::Ld,
        Channel::Vgrd,
        Channel::Ugrd,
        Channel::Pres,
        Channel::Apcp01,
        Channel::Rh,
        Channel::Pw,
        Channel::Dt,
        Channel::Nr,
        Channel::SolarAltitude,
        Channel::SolarAzimuth,
        Channel::DnEst,
        Channel::ShEst,
        Channel::DtEst,
        Channel::DnMsm,
        Channel::ShMsm,
        Channel::DtMsm,
        Channel::WindSpeed,
        Channel::WindDirection,
    ];

    /// Column name used in files.
    pub fn column_name(self) -> &'static str {
        match self {
            Channel::Tmp => "TMP",
            Channel::Mr => "MR",
            Channel::DswrfEst => "DSWRF_est",
            Channel::DswrfMsm => "DSWRF_msm",
            Channel::Ld => "Ld",
            Channel::Vgrd => "VGRD",
            Channel::Ugrd => "UGRD",
            Channel::Pres => "PRES",
            Channel::Apcp01 => "APCP01",
            Channel::Rh => "RH",
            Channel::Pw => "Pw",
            Channel::Dt => "DT",
            Channel::Nr => "NR",
            Channel::SolarAltitude => "h",
            Channel::SolarAzimuth => "A",
            Channel::DnEst => "DN_est",
            Channel::ShEst => "SH_est",
            Channel::DtEst => "DT_est",
            Channel::DnMsm => "DN_msm",
            Channel::ShMsm => "SH_msm",
            Channel::DtMsm => "DT_msm",
            Channel::WindSpeed => "w_spd",
            Channel::WindDirection => "w_dir",
        }
    }

    /// Whether the channel is derived from the wind vector components.
    ///
    /// Derived wind channels are recomputed rather than blended.
    pub fn is_derived_wind(self) -> bool {
        matches!(self, Channel::WindSpeed | Channel::WindDirection)
    }

    /// Irradiance channels computed on the estimated basis.
    pub fn estimated_irradiance() -> [Channel; 4] {
        [
            Channel::DswrfEst,
            Channel::DnEst,
            Channel::ShEst,
            Channel::DtEst,
        ]
    }

    /// Irradiance channels computed on the model basis.
    pub fn model_irradiance() -> [Channel; 4] {
        [
            Channel::DswrfMsm,
            Channel::DnMsm,
            Channel::ShMsm,
            Channel::DtMsm,
        ]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Channel {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .iter()
            .copied()
            .find(|c| c.column_name() == s)
            .ok_or_else(|| SeriesError::UnknownChannel {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn column_names_are_unique() {
        let names: HashSet<&str> = Channel::ALL.iter().map(|c| c.column_name()).collect();
        assert_eq!(names.len(), Channel::ALL.len());
    }

    #[test]
    fn parse_every_column_name() {
        for c in Channel::ALL {
            assert_eq!(c.column_name().parse::<Channel>().unwrap(), c);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("tmp".parse::<Channel>().is_err());
        assert_eq!("h".parse::<Channel>().unwrap(), Channel::SolarAltitude);
    }

    #[test]
    fn derived_wind() {
        assert!(Channel::WindSpeed.is_derived_wind());
        assert!(Channel::WindDirection.is_derived_wind());
        assert!(!Channel::Ugrd.is_derived_wind());
        assert!(!Channel::Vgrd.is_derived_wind());
    }

    #[test]
    fn irradiance_groups_are_disjoint() {
        let est = Channel::estimated_irradiance();
        for c in Channel::model_irradiance() {
            assert!(!est.contains(&c));
        }
    }
}
