//! Published nationwide population totals used as ground truth when checking
//! an import.

/// Year → expected population, most recent year first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTotals<'a> {
    entries: &'a [(i32, i64)],
}

#[rustfmt::skip]
static NATIONAL_TOTALS: &[(i32, i64)] = &[
    (2019, 66_992_699), (2018, 66_890_699), (2017, 66_768_420), (2016, 66_602_645),
    (2015, 66_422_469), (2014, 66_130_873), (2013, 65_564_756), (2012, 65_241_241),
    (2011, 64_933_400), (2010, 64_612_939), (2009, 64_304_500), (2008, 63_961_859),
    (2007, 63_600_690), (2006, 63_186_117), (2005, 62_730_537), (2004, 62_251_062),
    (2003, 61_824_030), (2002, 61_385_070), (2001, 60_941_410), (2000, 60_508_150),
    (1999, 60_122_665), (1998, 59_899_347), (1997, 59_691_177), (1996, 59_487_413),
    (1995, 59_280_577), (1994, 59_070_077), (1993, 58_852_002), (1992, 58_571_237),
    (1991, 58_280_135), (1990, 57_998_429), (1989, 56_269_810), (1988, 55_966_142),
    (1987, 55_681_780), (1986, 55_411_238), (1985, 55_157_303), (1984, 54_894_854),
    (1983, 54_649_984), (1982, 54_335_000), (1981, 54_028_630), (1980, 53_731_387),
    (1979, 53_481_073), (1978, 53_271_566), (1977, 53_019_005), (1976, 52_798_338),
    (1975, 52_600_000),
];

impl ReferenceTotals<'static> {
    /// INSEE estimates for France, 1975-2019.
    pub fn national() -> Self {
        Self {
            entries: NATIONAL_TOTALS,
        }
    }
}

impl<'a> ReferenceTotals<'a> {
    pub fn new(entries: &'a [(i32, i64)]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i64)> + 'a {
        self.entries.iter().copied()
    }
}
