//! Where the four INSEE population workbooks are published.

use crate::insee::population::model::{AgeAggregation, Scope, Table};

/// Page listing the "Estimation de la population au 1er janvier" files.
pub const PUBLICATION_PAGE: &str = "https://www.insee.fr/fr/statistiques/1893198";

const BASE_URL: &str = "https://www.insee.fr/fr/statistiques/fichier/1893198";

/// Published download URL of the workbook feeding `table`.
pub fn download_url(table: Table) -> String {
    let scope = match table.scope {
        Scope::Regional => "nreg",
        Scope::Departmental => "dep",
    };
    let aggregation = match table.aggregation {
        AgeAggregation::Class => "gca",
        AgeAggregation::Quinquennial => "aq",
    };
    format!("{BASE_URL}/estim-pop-{scope}-sexe-{aggregation}-1975-2019.xls")
}
