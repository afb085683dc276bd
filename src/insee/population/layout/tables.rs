//! Cell geometry of the INSEE "estimations de population" workbooks
//! (series 1975-2019).
//!
//! Rows and column letters refer to the published `.xls` files and must not
//! be renumbered.

use super::{AgeColumn, Zone};

const fn zone(row: u32, code: &'static str) -> Zone {
    Zone { row, code }
}

const fn band(column: &'static str, band: u8) -> AgeColumn {
    AgeColumn { column, band }
}

/// Regions: thirteen metropolitan rows, then the overseas regions.
#[rustfmt::skip]
pub(super) static REGIONAL_ZONES: &[Zone] = &[
    zone(6, "84"), zone(7, "27"), zone(8, "53"), zone(9, "24"), zone(10, "94"), zone(11, "44"),
    zone(12, "32"), zone(13, "11"), zone(14, "28"), zone(15, "75"), zone(16, "76"),
    zone(17, "52"), zone(18, "93"),
    zone(20, "01"), zone(21, "02"), zone(22, "03"), zone(23, "04"), zone(24, "06"),
];

/// The 1998 sheet of the quinquennial regional file: overseas regions sit
/// four rows lower and Mayotte is absent.
#[rustfmt::skip]
pub(super) static REGIONAL_ZONES_QUINQUENNIAL_1998: &[Zone] = &[
    zone(6, "84"), zone(7, "27"), zone(8, "53"), zone(9, "24"), zone(10, "94"), zone(11, "44"),
    zone(12, "32"), zone(13, "11"), zone(14, "28"), zone(15, "75"), zone(16, "76"),
    zone(17, "52"), zone(18, "93"),
    zone(23, "01"), zone(24, "02"), zone(25, "03"), zone(26, "04"),
];

/// Departments: ninety-six metropolitan rows, then the overseas departments.
#[rustfmt::skip]
pub(super) static DEPARTMENTAL_ZONES: &[Zone] = &[
    zone(6, "01"), zone(7, "02"), zone(8, "03"), zone(9, "04"), zone(10, "05"), zone(11, "06"),
    zone(12, "07"), zone(13, "08"), zone(14, "09"), zone(15, "10"), zone(16, "11"),
    zone(17, "12"), zone(18, "13"), zone(19, "14"), zone(20, "15"), zone(21, "16"),
    zone(22, "17"), zone(23, "18"), zone(24, "19"), zone(25, "2A"), zone(26, "2B"),
    zone(27, "21"), zone(28, "22"), zone(29, "23"), zone(30, "24"), zone(31, "25"),
    zone(32, "26"), zone(33, "27"), zone(34, "28"), zone(35, "29"), zone(36, "30"),
    zone(37, "31"), zone(38, "32"), zone(39, "33"), zone(40, "34"), zone(41, "35"),
    zone(42, "36"), zone(43, "37"), zone(44, "38"), zone(45, "39"), zone(46, "40"),
    zone(47, "41"), zone(48, "42"), zone(49, "43"), zone(50, "44"), zone(51, "45"),
    zone(52, "46"), zone(53, "47"), zone(54, "48"), zone(55, "49"), zone(56, "50"),
    zone(57, "51"), zone(58, "52"), zone(59, "53"), zone(60, "54"), zone(61, "55"),
    zone(62, "56"), zone(63, "57"), zone(64, "58"), zone(65, "59"), zone(66, "60"),
    zone(67, "61"), zone(68, "62"), zone(69, "63"), zone(70, "64"), zone(71, "65"),
    zone(72, "66"), zone(73, "67"), zone(74, "68"), zone(75, "69"), zone(76, "70"),
    zone(77, "71"), zone(78, "72"), zone(79, "73"), zone(80, "74"), zone(81, "75"),
    zone(82, "76"), zone(83, "77"), zone(84, "78"), zone(85, "79"), zone(86, "80"),
    zone(87, "81"), zone(88, "82"), zone(89, "83"), zone(90, "84"), zone(91, "85"),
    zone(92, "86"), zone(93, "87"), zone(94, "88"), zone(95, "89"), zone(96, "90"),
    zone(97, "91"), zone(98, "92"), zone(99, "93"), zone(100, "94"), zone(101, "95"),
    zone(103, "971"), zone(104, "972"), zone(105, "973"), zone(106, "974"), zone(107, "976"),
];

/// The 1998 sheet of the quinquennial departmental file.
#[rustfmt::skip]
pub(super) static DEPARTMENTAL_ZONES_QUINQUENNIAL_1998: &[Zone] = &[
    zone(6, "01"), zone(7, "02"), zone(8, "03"), zone(9, "04"), zone(10, "05"), zone(11, "06"),
    zone(12, "07"), zone(13, "08"), zone(14, "09"), zone(15, "10"), zone(16, "11"),
    zone(17, "12"), zone(18, "13"), zone(19, "14"), zone(20, "15"), zone(21, "16"),
    zone(22, "17"), zone(23, "18"), zone(24, "19"), zone(25, "2A"), zone(26, "2B"),
    zone(27, "21"), zone(28, "22"), zone(29, "23"), zone(30, "24"), zone(31, "25"),
    zone(32, "26"), zone(33, "27"), zone(34, "28"), zone(35, "29"), zone(36, "30"),
    zone(37, "31"), zone(38, "32"), zone(39, "33"), zone(40, "34"), zone(41, "35"),
    zone(42, "36"), zone(43, "37"), zone(44, "38"), zone(45, "39"), zone(46, "40"),
    zone(47, "41"), zone(48, "42"), zone(49, "43"), zone(50, "44"), zone(51, "45"),
    zone(52, "46"), zone(53, "47"), zone(54, "48"), zone(55, "49"), zone(56, "50"),
    zone(57, "51"), zone(58, "52"), zone(59, "53"), zone(60, "54"), zone(61, "55"),
    zone(62, "56"), zone(63, "57"), zone(64, "58"), zone(65, "59"), zone(66, "60"),
    zone(67, "61"), zone(68, "62"), zone(69, "63"), zone(70, "64"), zone(71, "65"),
    zone(72, "66"), zone(73, "67"), zone(74, "68"), zone(75, "69"), zone(76, "70"),
    zone(77, "71"), zone(78, "72"), zone(79, "73"), zone(80, "74"), zone(81, "75"),
    zone(82, "76"), zone(83, "77"), zone(84, "78"), zone(85, "79"), zone(86, "80"),
    zone(87, "81"), zone(88, "82"), zone(89, "83"), zone(90, "84"), zone(91, "85"),
    zone(92, "86"), zone(93, "87"), zone(94, "88"), zone(95, "89"), zone(96, "90"),
    zone(97, "91"), zone(98, "92"), zone(99, "93"), zone(100, "94"), zone(101, "95"),
    zone(106, "971"), zone(107, "972"), zone(108, "973"), zone(109, "974"),
];

// Class bands: 0-19, 20-39, 40-59, 60-74, 75+.

#[rustfmt::skip]
pub(super) static REGIONAL_CLASS_MALE: &[AgeColumn] = &[
    band("H", 1), band("I", 2), band("J", 3), band("K", 4), band("L", 5),
];

#[rustfmt::skip]
pub(super) static REGIONAL_CLASS_FEMALE: &[AgeColumn] = &[
    band("N", 1), band("O", 2), band("P", 3), band("Q", 4), band("R", 5),
];

#[rustfmt::skip]
pub(super) static DEPARTMENTAL_CLASS_MALE: &[AgeColumn] = &[
    band("I", 1), band("J", 2), band("K", 3), band("L", 4), band("M", 5),
];

#[rustfmt::skip]
pub(super) static DEPARTMENTAL_CLASS_FEMALE: &[AgeColumn] = &[
    band("O", 1), band("P", 2), band("Q", 3), band("R", 4), band("S", 5),
];

// Quinquennial bands: 0-4, 5-9, ..., 90-94, 95+.

#[rustfmt::skip]
pub(super) static REGIONAL_QUINQUENNIAL_MALE: &[AgeColumn] = &[
    band("W", 1), band("X", 2), band("Y", 3), band("Z", 4), band("AA", 5),
    band("AB", 6), band("AC", 7), band("AD", 8), band("AE", 9), band("AF", 10),
    band("AG", 11), band("AH", 12), band("AI", 13), band("AJ", 14), band("AK", 15),
    band("AL", 16), band("AM", 17), band("AN", 18), band("AO", 19), band("AP", 20),
];

#[rustfmt::skip]
pub(super) static REGIONAL_QUINQUENNIAL_FEMALE: &[AgeColumn] = &[
    band("AR", 1), band("AS", 2), band("AT", 3), band("AU", 4), band("AV", 5),
    band("AW", 6), band("AX", 7), band("AY", 8), band("AZ", 9), band("BA", 10),
    band("BB", 11), band("BC", 12), band("BD", 13), band("BE", 14), band("BF", 15),
    band("BG", 16), band("BH", 17), band("BI", 18), band("BJ", 19), band("BK", 20),
];

#[rustfmt::skip]
pub(super) static DEPARTMENTAL_QUINQUENNIAL_MALE: &[AgeColumn] = &[
    band("X", 1), band("Y", 2), band("Z", 3), band("AA", 4), band("AB", 5),
    band("AC", 6), band("AD", 7), band("AE", 8), band("AF", 9), band("AG", 10),
    band("AH", 11), band("AI", 12), band("AJ", 13), band("AK", 14), band("AL", 15),
    band("AM", 16), band("AN", 17), band("AO", 18), band("AP", 19), band("AQ", 20),
];

#[rustfmt::skip]
pub(super) static DEPARTMENTAL_QUINQUENNIAL_FEMALE: &[AgeColumn] = &[
    band("AS", 1), band("AT", 2), band("AU", 3), band("AV", 4), band("AW", 5),
    band("AX", 6), band("AY", 7), band("AZ", 8), band("BA", 9), band("BB", 10),
    band("BC", 11), band("BD", 12), band("BE", 13), band("BF", 14), band("BG", 15),
    band("BH", 16), band("BI", 17), band("BJ", 18), band("BK", 19), band("BL", 20),
];
