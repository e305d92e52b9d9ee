//! Tracked parameters, per-parameter containers and channel bindings.

use std::fmt;
use std::ops::{Index, IndexMut};

use smy_series::{Channel, HourlySeries};

use crate::error::ClassifyError;

/// A parameter judged by both typical-month tests.
///
/// Variant order is the priority order of the selection cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    /// Air temperature.
    Temperature,
    /// Global horizontal irradiance.
    Irradiance,
    /// Humidity ratio.
    HumidityRatio,
    /// Hourly precipitation.
    Precipitation,
    /// Wind speed.
    WindSpeed,
}

impl Parameter {
    /// All parameters in priority order.
    pub const ALL: [Parameter; 5] = [
        Parameter::Temperature,
        Parameter::Irradiance,
        Parameter::HumidityRatio,
        Parameter::Precipitation,
        Parameter::WindSpeed,
    ];

    /// Position in [`Parameter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Width of the confidence band in standard deviations.
    ///
    /// Precipitation and wind speed vary more from year to year and get a
    /// looser band.
    pub fn band_multiplier(self) -> f64 {
        match self {
            Parameter::Temperature | Parameter::Irradiance | Parameter::HumidityRatio => 1.0,
            Parameter::Precipitation | Parameter::WindSpeed => 1.5,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Irradiance => "irradiance",
            Parameter::HumidityRatio => "humidity ratio",
            Parameter::Precipitation => "precipitation",
            Parameter::WindSpeed => "wind speed",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per tracked parameter, indexable by [`Parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParamSet<T>([T; 5]);

impl<T> ParamSet<T> {
    /// Wrap values given in [`Parameter::ALL`] order.
    pub fn new(values: [T; 5]) -> Self {
        Self(values)
    }

    /// Build by evaluating `f` for every parameter.
    pub fn from_fn(f: impl FnMut(Parameter) -> T) -> Self {
        Self(Parameter::ALL.map(f))
    }

    /// Iterate over `(parameter, value)` in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &T)> {
        Parameter::ALL.into_iter().zip(self.0.iter())
    }

    /// Apply `f` to every value.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ParamSet<U> {
        ParamSet(self.0.map(f))
    }
}

impl<T> Index<Parameter> for ParamSet<T> {
    type Output = T;

    fn index(&self, p: Parameter) -> &T {
        &self.0[p.index()]
    }
}

impl<T> IndexMut<Parameter> for ParamSet<T> {
    fn index_mut(&mut self, p: Parameter) -> &mut T {
        &mut self.0[p.index()]
    }
}

/// Which series channel each parameter is read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedChannels {
    channels: ParamSet<Channel>,
}

impl TrackedChannels {
    /// Bindings with the given global irradiance channel.
    pub fn with_irradiance(irradiance: Channel) -> Self {
        Self {
            channels: ParamSet::new([
                Channel::Tmp,
                irradiance,
                Channel::Mr,
                Channel::Apcp01,
                Channel::WindSpeed,
            ]),
        }
    }

    /// Bindings on the estimated irradiance basis.
    pub fn estimated() -> Self {
        Self::with_irradiance(Channel::DswrfEst)
    }

    /// Bindings on the model irradiance basis.
    pub fn model() -> Self {
        Self::with_irradiance(Channel::DswrfMsm)
    }

    /// Channel bound to `parameter`.
    pub fn channel(&self, parameter: Parameter) -> Channel {
        self.channels[parameter]
    }

    /// Borrow the bound channel values out of `series`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MissingChannel`] for the first parameter
    /// whose channel is absent.
    pub fn resolve<'a>(
        &self,
        series: &'a HourlySeries,
    ) -> Result<ParamSet<&'a [f64]>, ClassifyError> {
        let mut slices: [&'a [f64]; 5] = [&[]; 5];
        for parameter in Parameter::ALL {
            let channel = self.channel(parameter);
            slices[parameter.index()] = series
                .channel(channel)
                .ok_or(ClassifyError::MissingChannel { parameter, channel })?;
        }
        Ok(ParamSet::new(slices))
    }
}

impl Default for TrackedChannels {
    fn default() -> Self {
        Self::estimated()
    }
}
