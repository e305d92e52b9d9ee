//! End-to-end synthesis entry points.

use std::borrow::Cow;

use smy_assemble::{assemble, wind16_channels};
use smy_classify::{aggregate, classify_by_fs, classify_by_mean};
use smy_select::select_representative_years;
use smy_series::{Channel, HourlySeries};
use tracing::{info, instrument, warn};

use crate::config::SynthesisConfig;
use crate::error::EngineError;
use crate::result::{SynthesizedYear, YearSelection};

/// Classify every (year, month) of the analysed range and pick the
/// representative years.
///
/// # Errors
///
/// Returns [`EngineError`] if the configuration is invalid, the analysed
/// years are not covered, a tracked channel is missing, or a month has no
/// candidate year.
#[instrument(skip_all, fields(start = config.start_year(), end = config.end_year()))]
pub fn select_years(
    series: &HourlySeries,
    config: &SynthesisConfig,
) -> Result<YearSelection, EngineError> {
    config.validate()?;
    let source = with_wind_speed(series)?;
    select_in_range(&source, config)
}

/// Synthesize the standard year from a multi-year hourly series.
///
/// Classification only sees the analysed years; splicing and smoothing
/// read from the whole series, so boundary windows may reach one year
/// outside the range.
///
/// # Errors
///
/// Returns [`EngineError`] on any failure of the underlying stages. There
/// is no partial output.
#[instrument(skip_all, fields(start = config.start_year(), end = config.end_year()))]
pub fn synthesize(
    series: &HourlySeries,
    config: &SynthesisConfig,
) -> Result<SynthesizedYear, EngineError> {
    config.validate()?;
    let source = with_wind_speed(series)?;
    let YearSelection {
        analysed_years,
        selection,
        ..
    } = select_in_range(&source, config)?;

    let mut assembly = assemble(&source, &selection.years)?;
    for channel in config.unused_irradiance_channels() {
        assembly.series.remove(channel)?;
    }

    info!(
        years = ?selection.years.as_array(),
        boundaries = assembly.plan.len(),
        "standard year synthesized"
    );

    Ok(SynthesizedYear {
        series: assembly.series,
        analysed_years,
        years: selection.years,
        months: selection.months,
        plan: assembly.plan,
    })
}

fn select_in_range(
    source: &HourlySeries,
    config: &SynthesisConfig,
) -> Result<YearSelection, EngineError> {
    let analysed_years = config.analysed_years();
    let extract = source.slice_years(*analysed_years.start(), *analysed_years.end())?;
    info!(
        first = extract.start_year(),
        last = extract.end_year(),
        irradiance = %config.irradiance_channel(),
        "classifying candidate years"
    );

    let tracked = config.tracked_channels();
    let mean_test = classify_by_mean(&aggregate(&extract, &tracked)?);
    let fs_test = classify_by_fs(&extract, &tracked)?;
    let selection = select_representative_years(&mean_test, &fs_test)?;

    Ok(YearSelection {
        analysed_years,
        mean_test,
        fs_test,
        selection,
    })
}

/// Borrow `series`, or copy it with `w_spd` derived from `UGRD`/`VGRD`
/// when the wind speed channel is absent.
fn with_wind_speed(series: &HourlySeries) -> Result<Cow<'_, HourlySeries>, EngineError> {
    if series.contains(Channel::WindSpeed) {
        return Ok(Cow::Borrowed(series));
    }
    let (Some(u), Some(v)) = (series.channel(Channel::Ugrd), series.channel(Channel::Vgrd)) else {
        warn!("w_spd absent and cannot be derived without UGRD/VGRD");
        return Ok(Cow::Borrowed(series));
    };
    let (speed, direction) = wind16_channels(u, v);
    let mut owned = series.clone();
    owned.insert(Channel::WindSpeed, speed)?;
    if !owned.contains(Channel::WindDirection) {
        owned.insert(Channel::WindDirection, direction)?;
    }
    info!("derived w_spd from UGRD/VGRD");
    Ok(Cow::Owned(owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_with_wind_speed_borrows_when_present() {
        let mut channels = BTreeMap::new();
        channels.insert(Channel::WindSpeed, vec![2.0; 8760]);
        let series = HourlySeries::new(2019, channels).unwrap();
        assert!(matches!(with_wind_speed(&series).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_with_wind_speed_derives_from_components() {
        let mut channels = BTreeMap::new();
        channels.insert(Channel::Ugrd, vec![0.0; 8760]);
        channels.insert(Channel::Vgrd, vec![-3.0; 8760]);
        let series = HourlySeries::new(2019, channels).unwrap();
        let derived = with_wind_speed(&series).unwrap();
        let speed = derived.channel(Channel::WindSpeed).unwrap();
        approx::assert_relative_eq!(speed[0], 3.0, epsilon = 1e-12);
        assert!(derived.contains(Channel::WindDirection));
    }
}
