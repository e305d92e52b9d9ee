//! The ten ordered selection criteria.

use std::fmt;

use smy_calendar::MonthKey;
use smy_classify::{Classification, Parameter};

/// Which typical-month test a criterion reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Test {
    /// Mean/deviation test.
    Mean,
    /// Finkelstein-Schafer test.
    Fs,
}

/// One boolean filter of the cascade: a test applied to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Criterion {
    /// Test whose verdict is read.
    pub test: Test,
    /// Parameter whose verdict is read.
    pub parameter: Parameter,
}

const fn criterion(test: Test, parameter: Parameter) -> Criterion {
    Criterion { test, parameter }
}

/// Cascade order: all mean tests, then all FS tests, each in parameter
/// priority order.
pub const CRITERIA: [Criterion; 10] = [
    criterion(Test::Mean, Parameter::Temperature),
    criterion(Test::Mean, Parameter::Irradiance),
    criterion(Test::Mean, Parameter::HumidityRatio),
    criterion(Test::Mean, Parameter::Precipitation),
    criterion(Test::Mean, Parameter::WindSpeed),
    criterion(Test::Fs, Parameter::Temperature),
    criterion(Test::Fs, Parameter::Irradiance),
    criterion(Test::Fs, Parameter::HumidityRatio),
    criterion(Test::Fs, Parameter::Precipitation),
    criterion(Test::Fs, Parameter::WindSpeed),
];

impl Criterion {
    /// Whether `key` passes this criterion.
    pub fn passes(&self, key: &MonthKey, mean: &Classification, fs: &Classification) -> bool {
        let classification = match self.test {
            Test::Mean => mean,
            Test::Fs => fs,
        };
        classification.is_typical(key, self.parameter)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let test = match self.test {
            Test::Mean => "mean",
            Test::Fs => "FS",
        };
        write!(f, "{} {test}", self.parameter)
    }
}
