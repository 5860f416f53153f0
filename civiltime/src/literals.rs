//! Month literals for writing dates in month/day/year order.
//!
//! ```
//! use civiltime::{literals::AUG, Date};
//!
//! assert_eq!(AUG / 11 / 2009, Date::from_ymd(2009, 8, 11));
//! ```

use std::ops::Div;

use crate::Date;

/// A month of the year, 1 to 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u32);

impl Month {
    pub const fn number(self) -> u32 {
        self.0
    }
}

pub const JAN: Month = Month(1);
pub const FEB: Month = Month(2);
pub const MAR: Month = Month(3);
pub const APR: Month = Month(4);
pub const MAY: Month = Month(5);
pub const JUN: Month = Month(6);
pub const JUL: Month = Month(7);
pub const AUG: Month = Month(8);
pub const SEP: Month = Month(9);
pub const OCT: Month = Month(10);
pub const NOV: Month = Month(11);
pub const DEC: Month = Month(12);

/// A month and a day, waiting for a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u32,
}

impl Div<u32> for Month {
    type Output = MonthDay;

    fn div(self, day: u32) -> Self::Output {
        MonthDay { month: self, day }
    }
}

impl Div<i32> for MonthDay {
    type Output = Date;

    /// # Panics
    ///
    /// Panics if the day does not exist in that month and year.
    fn div(self, year: i32) -> Self::Output {
        Date::from_ymd(year, self.month.0, self.day)
    }
}
