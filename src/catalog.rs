//! Curated listings backing the countries/indicators commands.

use serde::Serialize;

/// A code/name pair as exposed by the listing commands.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub name: &'static str,
}

/// Common countries available for snapshots.
pub const COUNTRIES: &[CatalogEntry] = &[
    CatalogEntry { code: "USA", name: "United States" },
    CatalogEntry { code: "CHN", name: "China" },
    CatalogEntry { code: "DEU", name: "Germany" },
    CatalogEntry { code: "JPN", name: "Japan" },
    CatalogEntry { code: "GBR", name: "United Kingdom" },
    CatalogEntry { code: "IND", name: "India" },
    CatalogEntry { code: "BRA", name: "Brazil" },
    CatalogEntry { code: "FRA", name: "France" },
    CatalogEntry { code: "ITA", name: "Italy" },
    CatalogEntry { code: "CAN", name: "Canada" },
];

/// Common World Bank economic indicators.
pub const INDICATORS: &[CatalogEntry] = &[
    CatalogEntry { code: "NY.GDP.MKTP.CD", name: "GDP (current US$)" },
    CatalogEntry { code: "NY.GDP.MKTP.KD.ZG", name: "GDP growth (annual %)" },
    CatalogEntry { code: "NY.GDP.PCAP.CD", name: "GDP per capita (current US$)" },
    CatalogEntry { code: "FP.CPI.TOTL.ZG", name: "Inflation, consumer prices (annual %)" },
    CatalogEntry { code: "SL.UEM.TOTL.ZS", name: "Unemployment, total (% of total labor force)" },
    CatalogEntry { code: "NE.EXP.GNFS.ZS", name: "Exports of goods and services (% of GDP)" },
    CatalogEntry { code: "NE.IMP.GNFS.ZS", name: "Imports of goods and services (% of GDP)" },
    CatalogEntry { code: "GC.DOD.TOTL.GD.ZS", name: "Central government debt, total (% of GDP)" },
    CatalogEntry { code: "SE.ADT.LITR.ZS", name: "Literacy rate, adult total (% of people ages 15 and above)" },
    CatalogEntry { code: "SH.DYN.MORT", name: "Under-5 mortality rate, per 1,000 live births" },
];
