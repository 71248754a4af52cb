//! The caching holiday calendar.
//!
//! Owns the only shared mutable state in the engine: a mutex-guarded map of
//! `"{country}-{subdivision}-{year}"` keys to computed holiday lists. The
//! async [`holidays`](HolidayCalendar::holidays) path optionally merges a
//! remote source; every failure there is logged and absorbed by falling
//! back to the local rules.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::models::{Region, StatHoliday};

use super::remote::{RemoteHoliday, RemoteHolidaySource};
use super::rules::stat_holidays;

/// Region-aware holiday calendar with an explicit, caller-purged cache.
///
/// # Example
///
/// ```
/// use timecard_engine::calendar::HolidayCalendar;
/// use timecard_engine::models::Region;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::local_only();
/// let region = Region::new("CA", "BC");
/// let canada_day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// assert!(calendar.is_stat_holiday(canada_day, &region));
/// ```
#[derive(Debug)]
pub struct HolidayCalendar {
    remote: Option<RemoteHolidaySource>,
    cache: Mutex<HashMap<String, Vec<StatHoliday>>>,
}

impl HolidayCalendar {
    /// Creates a calendar that only ever computes holidays locally.
    pub fn local_only() -> Self {
        Self {
            remote: None,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a calendar that merges the given remote source.
    pub fn with_remote(remote: RemoteHolidaySource) -> Self {
        Self {
            remote: Some(remote),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(region: &Region, year: i32) -> String {
        format!("{}-{}", region.key(), year)
    }

    fn cache(&self) -> MutexGuard<'_, HashMap<String, Vec<StatHoliday>>> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still usable.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns the holidays of a region for a year, remote-merged when a
    /// source is configured.
    ///
    /// Cache hits return immediately. Otherwise the local rules are
    /// computed, the remote source (if any) is fetched once, the two are
    /// merged by calendar day with the remote name winning, and the result
    /// is cached and returned. Remote failures of any kind are logged and
    /// the local-only list is cached instead; callers never observe an
    /// error.
    pub async fn holidays(&self, year: i32, region: &Region) -> Vec<StatHoliday> {
        let key = Self::cache_key(region, year);
        if let Some(hit) = self.cache().get(&key) {
            return hit.clone();
        }

        let local = stat_holidays(year, region);
        let merged = match &self.remote {
            Some(remote) => match remote.fetch(year, &region.country).await {
                Ok(remote_holidays) => merge_by_day(local, remote_holidays),
                Err(err) => {
                    warn!(
                        error = %err,
                        country = %region.country,
                        year,
                        "remote holiday fetch failed; using local holiday rules"
                    );
                    local
                }
            },
            None => local,
        };

        self.cache().insert(key, merged.clone());
        merged
    }

    /// Returns the region's holiday list for a year: the cached
    /// (possibly remote-merged) list when present, else the local rules.
    ///
    /// Never writes the cache: a local-only result stored from this sync
    /// path would mask a later remote merge.
    pub fn known_holidays(&self, year: i32, region: &Region) -> Vec<StatHoliday> {
        let key = Self::cache_key(region, year);
        if let Some(hit) = self.cache().get(&key) {
            return hit.clone();
        }
        stat_holidays(year, region)
    }

    /// Returns the holiday falling on `date`, if any.
    ///
    /// Consults the sets of the surrounding years as well, since an
    /// observed date computed from a year-end holiday can land in the
    /// following year.
    pub fn holiday_on(&self, date: NaiveDate, region: &Region) -> Option<StatHoliday> {
        let year = date.year();
        for y in (year - 1)..=(year + 1) {
            let found = self
                .known_holidays(y, region)
                .into_iter()
                .find(|h| h.date == date);
            if found.is_some() {
                return found;
            }
        }
        None
    }

    /// Returns `true` if `date` is a statutory holiday (or an observed
    /// variant) in the region.
    pub fn is_stat_holiday(&self, date: NaiveDate, region: &Region) -> bool {
        self.holiday_on(date, region).is_some()
    }

    /// Returns the name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate, region: &Region) -> Option<String> {
        self.holiday_on(date, region).map(|h| h.name)
    }

    /// Drops every cache entry not belonging to the given region.
    ///
    /// Callers invoke this explicitly after a region change; nothing is
    /// purged implicitly.
    pub fn purge_cache_except_region(&self, region: &Region) {
        let prefix = format!("{}-", region.key());
        self.cache().retain(|key, _| key.starts_with(&prefix));
    }

    /// Returns the number of cached region-year lists.
    pub fn cached_entries(&self) -> usize {
        self.cache().len()
    }
}

/// Merges local and remote holiday lists by calendar day.
///
/// The remote name wins for days both sides know about (an observed local
/// entry keeps its "(Observed)" suffix); remote-only days are appended as
/// plain holidays.
fn merge_by_day(local: Vec<StatHoliday>, remote: Vec<RemoteHoliday>) -> Vec<StatHoliday> {
    let mut remote_by_day: HashMap<NaiveDate, RemoteHoliday> = HashMap::new();
    for holiday in remote {
        remote_by_day.entry(holiday.date).or_insert(holiday);
    }

    let mut merged: Vec<StatHoliday> = local
        .into_iter()
        .map(|mut holiday| {
            if let Some(remote) = remote_by_day.get(&holiday.date) {
                holiday.name = if holiday.is_observed {
                    format!("{} (Observed)", remote.display_name())
                } else {
                    remote.display_name().to_string()
                };
            }
            holiday
        })
        .collect();

    let covered: HashSet<NaiveDate> = merged.iter().map(|h| h.date).collect();
    for (date, holiday) in remote_by_day {
        if !covered.contains(&date) {
            merged.push(StatHoliday::new(holiday.display_name(), date));
        }
    }

    merged.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.is_observed.cmp(&b.is_observed))
            .then(a.name.cmp(&b.name))
    });
    merged
}
