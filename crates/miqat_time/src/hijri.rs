//! Umm al-Qura (tabulated Hijri) calendar conversion.
//!
//! Month lengths come from a table covering 1420-01 .. 1450-12 AH
//! (1999-04-17 .. 2029-05-14). Dates outside it are rejected.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::julian::{GregorianDate, gregorian_to_jd, jd_to_gregorian};

/// First Hijri year in the table.
pub const FIRST_YEAR: i32 = 1420;

/// Julian Day number (noon) of 1420-01-01 AH = 1999-04-17.
const TABLE_START_JDN: i64 = 2_451_286;

/// Month-length flags from 1420-01 onwards: 0 = 29 days, 1 = 30 days.
const MONTH_LENGTH_FLAGS: [u8; 372] = [
    0, 1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 1, // 1420
    0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 1, // 1421
    1, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1, // 1422
    1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, // 1423
    1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, 0, // 1424
    1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, // 1425
    0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, // 1426
    0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, // 1427
    1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, // 1428
    0, 1, 0, 0, 1, 0, 0, 1, 1, 0, 1, 1, // 1429
    0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, // 1430
    0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1, // 1431
    0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, // 1432
    1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 0, // 1433
    0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 0, // 1434
    1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, // 1435
    0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, // 1436
    1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, // 1437
    1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 1, 0, // 1438
    1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, // 1439
    0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, // 1440
    1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, // 1441
    0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, // 1442
    1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, // 1443
    0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, // 1444
    0, 1, 1, 1, 0, 1, 0, 0, 1, 0, 0, 1, // 1445
    0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, // 1446
    1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, // 1447
    0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, // 1448
    0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, // 1449
    1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1, // 1450
];

/// A date in the Umm al-Qura calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriDate {
    pub year: i32,
    /// Month 1..=12 (1 = Muharram).
    pub month: u32,
    /// Day of month 1..=30.
    pub day: u32,
    /// Number of days in this month (29 or 30).
    pub month_length: u32,
}

impl HijriDate {
    pub fn to_gregorian(self) -> Result<GregorianDate, TimeError> {
        hijri_to_gregorian(self.year, self.month, self.day)
    }
}

impl Display for HijriDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

fn month_length(index: usize) -> u32 {
    29 + MONTH_LENGTH_FLAGS[index] as u32
}

/// Convert a Gregorian date to Umm al-Qura.
///
/// # Errors
/// [`TimeError::HijriOutOfRange`] outside 1999-04-17 .. 2029-05-14, or the
/// calendar error from [`gregorian_to_jd`].
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate, TimeError> {
    let jdn = (gregorian_to_jd(year, month, day)? + 0.5).floor() as i64;
    if jdn < TABLE_START_JDN {
        return Err(TimeError::HijriOutOfRange);
    }

    let mut month_start = TABLE_START_JDN;
    for index in 0..MONTH_LENGTH_FLAGS.len() {
        let len = month_length(index);
        if jdn < month_start + len as i64 {
            return Ok(HijriDate {
                year: FIRST_YEAR + (index / 12) as i32,
                month: (index % 12) as u32 + 1,
                day: (jdn - month_start) as u32 + 1,
                month_length: len,
            });
        }
        month_start += len as i64;
    }
    Err(TimeError::HijriOutOfRange)
}

/// Convert an Umm al-Qura date to the Gregorian calendar.
///
/// # Errors
/// [`TimeError::HijriOutOfRange`] when the year/month is outside the table
/// or the day exceeds the month length.
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> Result<GregorianDate, TimeError> {
    if year < FIRST_YEAR || !(1..=12).contains(&month) || day == 0 {
        return Err(TimeError::HijriOutOfRange);
    }
    let index = (year - FIRST_YEAR) as usize * 12 + (month - 1) as usize;
    if index >= MONTH_LENGTH_FLAGS.len() || day > month_length(index) {
        return Err(TimeError::HijriOutOfRange);
    }
    let elapsed: u32 = (0..index).map(month_length).sum();
    let jd = TABLE_START_JDN as f64 - 0.5 + elapsed as f64 + (day - 1) as f64;
    jd_to_gregorian(jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_start() {
        let h = gregorian_to_hijri(1999, 4, 17).unwrap();
        assert_eq!((h.year, h.month, h.day, h.month_length), (1420, 1, 1, 29));
        assert_eq!(
            hijri_to_gregorian(1420, 1, 1).unwrap(),
            GregorianDate::new(1999, 4, 17)
        );
    }

    #[test]
    fn new_year_2015() {
        let h = gregorian_to_hijri(2015, 1, 1).unwrap();
        assert_eq!((h.year, h.month, h.day, h.month_length), (1436, 3, 10, 29));
    }

    #[test]
    fn muharram_1436() {
        assert_eq!(
            hijri_to_gregorian(1436, 1, 1).unwrap(),
            GregorianDate::new(2014, 10, 25)
        );
    }

    #[test]
    fn table_end() {
        let h = gregorian_to_hijri(2029, 5, 14).unwrap();
        assert_eq!((h.year, h.month, h.day, h.month_length), (1450, 12, 30, 30));
        assert_eq!(gregorian_to_hijri(2029, 5, 15), Err(TimeError::HijriOutOfRange));
    }

    #[test]
    fn before_table() {
        assert_eq!(gregorian_to_hijri(1999, 4, 16), Err(TimeError::HijriOutOfRange));
        assert_eq!(hijri_to_gregorian(1419, 12, 1), Err(TimeError::HijriOutOfRange));
    }

    #[test]
    fn day_beyond_month_length() {
        // 1420-01 has 29 days.
        assert_eq!(hijri_to_gregorian(1420, 1, 30), Err(TimeError::HijriOutOfRange));
        assert_eq!(hijri_to_gregorian(1451, 1, 1), Err(TimeError::HijriOutOfRange));
    }

    #[test]
    fn roundtrip_every_month_start() {
        for year in 1420..=1450 {
            for month in 1..=12 {
                let g = hijri_to_gregorian(year, month, 1).unwrap();
                let h = gregorian_to_hijri(g.year, g.month, g.day).unwrap();
                assert_eq!((h.year, h.month, h.day), (year, month, 1));
            }
        }
    }

    #[test]
    fn display() {
        let h = gregorian_to_hijri(2015, 1, 1).unwrap();
        assert_eq!(h.to_string(), "1436-03-10 AH");
    }
}
