/// Spreadsheet document identifier as it appears in a share URL.
/// Example: `1YXkrgV7Y6zShiPeyw4Y5_19QOfu5I6CyH5sGnbkEyiI`
pub type SheetId = String;
/// Name of one sheet tab inside a spreadsheet document.
/// Examples: `Radar`, `Vol 27`
pub type SheetName = String;
/// Column header text taken from the first row of a sheet.
/// Examples: `name`, `ring`, `isNew`
pub type ColumnName = String;
/// Raw cell text before trimming and normalization.
/// Examples: `  Adopt `, `TRUE`
pub type CellValue = String;
/// Adoption-stage ring label taken from the `ring` column.
/// Examples: `Adopt`, `Trial`, `Hold`
pub type RingName = String;
/// Quadrant label, capitalized during assembly.
/// Examples: `Tools`, `Techniques`
pub type QuadrantName = String;
/// Identity of the account a protected document granted or denied.
/// Example: `a@x.com`
pub type AccountId = String;
