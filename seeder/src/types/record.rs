/// One entry of the expanded problem-type catalog.
///
/// [`CatalogRecord`] is the unit of work of the whole pipeline: it is produced by the
/// legacy-file normalizer or supplied pre-shaped by an in-memory catalog generation,
/// merged by `code`, and written to the destination in chunks. Records are treated as
/// immutable once produced; merging decides which record occupies a key, it never
/// rewrites fields.
///
/// `code` is the only identity: two records with an equal `code` are the same logical
/// catalog entry, and it doubles as the upsert conflict key at the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Globally unique business key, never empty.
    pub code: String,
    pub name: String,
    pub description: String,
    pub solution_method: String,
    pub subject: String,
    pub area: String,
    pub standard_code: String,
    pub standard_content: String,
    pub cognitive_tag: String,
    /// Lower difficulty bound, clamped into `[1, 5]` by the normalizer.
    pub difficulty_min: i32,
    /// Upper difficulty bound, clamped into `[1, 5]` by the normalizer.
    ///
    /// The pipeline does not enforce `difficulty_min <= difficulty_max`; an inverted
    /// pair from the source is preserved as-is.
    pub difficulty_max: i32,
    pub keywords: Vec<String>,
    pub school_level: String,
    pub level_code: String,
    pub domain_code: String,
    /// Stamped `true` at the write boundary for every upserted row.
    pub is_active: bool,
}

impl Default for CatalogRecord {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            description: String::new(),
            solution_method: String::new(),
            subject: String::new(),
            area: String::new(),
            standard_code: String::new(),
            standard_content: String::new(),
            cognitive_tag: String::new(),
            difficulty_min: 1,
            difficulty_max: 3,
            keywords: Vec::new(),
            school_level: String::new(),
            level_code: String::new(),
            domain_code: String::new(),
            is_active: true,
        }
    }
}
