/// Constants describing the sheet schema contract.
pub mod schema {
    /// Column holding the entry name.
    pub const NAME_COLUMN: &str = "name";
    /// Column holding the ring label.
    pub const RING_COLUMN: &str = "ring";
    /// Column holding the quadrant label.
    pub const QUADRANT_COLUMN: &str = "quadrant";
    /// Column holding the novelty flag.
    pub const IS_NEW_COLUMN: &str = "isNew";
    /// Column holding the entry description.
    pub const DESCRIPTION_COLUMN: &str = "description";
    /// Optional column carried through to entries when present.
    pub const TOPIC_COLUMN: &str = "topic";
    /// Columns every radar sheet must provide, in reporting order.
    pub const REQUIRED_COLUMNS: [&str; 5] = [
        NAME_COLUMN,
        RING_COLUMN,
        QUADRANT_COLUMN,
        IS_NEW_COLUMN,
        DESCRIPTION_COLUMN,
    ];
    /// Token (compared case-insensitively) marking an entry as new.
    pub const IS_NEW_TOKEN: &str = "true";
}

/// Constants governing radar assembly.
pub mod radar {
    /// Maximum number of distinct rings a radar may declare.
    pub const MAX_RINGS: usize = 4;
    /// Failure message emitted when the ring cap is exceeded.
    pub const TOO_MANY_RINGS_MSG: &str = "too many rings";
}

/// Constants for the renderer size hint.
pub mod canvas {
    /// Smallest canvas edge the renderer is ever asked to draw.
    pub const MIN_SIZE: u32 = 620;
    /// Vertical page chrome subtracted from the viewport before sizing.
    pub const VIEWPORT_INSET: u32 = 133;
}

/// Constants used by the CSV source.
pub mod csv_source {
    /// Suffix stripped (case-sensitively) from CSV display titles.
    pub const CSV_SUFFIX: &str = ".csv";
}

/// User-facing guidance paired with classified failures.
pub mod guidance {
    /// Guidance shown when the referenced document or tab does not exist.
    pub const NOT_FOUND: &str =
        "Check the sheet reference and that the document is published, then try again.";
    /// Guidance shown for schema violations.
    pub const MALFORMED: &str = "Fix the source data and resubmit.";
    /// Guidance shown when a protected document denies the account.
    pub const UNAUTHORIZED: &str = "Switch to an account that can read this document.";
    /// Generic text shown for failures outside the closed taxonomy.
    pub const UNKNOWN: &str = "Something went wrong building the radar. Please try again.";
}
