//! First authored generation of the expanded catalog, covering the middle-school core.

use seeder::types::CatalogRecord;

pub fn records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord {
            code: "ALG1-LEQ-001".to_string(),
            name: "One-step linear equations".to_string(),
            description: "Solve equations of the form x + p = q and px = q over the rationals."
                .to_string(),
            solution_method: "Apply the inverse operation to both sides and verify by substitution."
                .to_string(),
            subject: "Algebra".to_string(),
            area: "Linear equations".to_string(),
            standard_code: "CCSS.MATH.6.EE.B.7".to_string(),
            standard_content: "Solve real-world and mathematical problems by writing and solving \
                               equations of the form x + p = q and px = q."
                .to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 1,
            difficulty_max: 2,
            keywords: vec!["equation".to_string(), "one-step".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-1".to_string(),
            domain_code: "EE".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "ALG1-LEQ-002".to_string(),
            name: "Two-step linear equations".to_string(),
            description: "Solve equations of the form px + q = r, including negative rational \
                          coefficients."
                .to_string(),
            solution_method: "Undo addition or subtraction first, then division, checking the \
                              sign at each step."
                .to_string(),
            subject: "Algebra".to_string(),
            area: "Linear equations".to_string(),
            standard_code: "CCSS.MATH.7.EE.B.4".to_string(),
            standard_content: "Use variables to represent quantities and construct simple \
                               equations to solve problems."
                .to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 2,
            difficulty_max: 3,
            keywords: vec!["equation".to_string(), "two-step".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-2".to_string(),
            domain_code: "EE".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "NUM-FRC-002".to_string(),
            name: "Fraction division".to_string(),
            description: "Interpret and compute quotients of fractions in measurement and \
                          partitive contexts."
                .to_string(),
            solution_method: "Multiply by the reciprocal after rewriting the quotient as a \
                              missing-factor problem."
                .to_string(),
            subject: "Number".to_string(),
            area: "Fractions".to_string(),
            standard_code: "CCSS.MATH.6.NS.A.1".to_string(),
            standard_content: "Interpret and compute quotients of fractions, and solve word \
                               problems involving division of fractions by fractions."
                .to_string(),
            cognitive_tag: "conceptual".to_string(),
            difficulty_min: 2,
            difficulty_max: 4,
            keywords: vec!["fraction".to_string(), "division".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-1".to_string(),
            domain_code: "NS".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "NUM-RAT-001".to_string(),
            name: "Ratios and unit rates".to_string(),
            description: "Use ratio and rate reasoning with tables, tape diagrams, and double \
                          number lines."
                .to_string(),
            solution_method: "Scale the ratio to a unit rate, then multiply up to the target \
                              quantity."
                .to_string(),
            subject: "Number".to_string(),
            area: "Ratios and proportional relationships".to_string(),
            standard_code: "CCSS.MATH.6.RP.A.3".to_string(),
            standard_content: "Use ratio and rate reasoning to solve real-world and mathematical \
                               problems."
                .to_string(),
            cognitive_tag: "application".to_string(),
            difficulty_min: 1,
            difficulty_max: 3,
            keywords: vec![
                "ratio".to_string(),
                "rate".to_string(),
                "proportion".to_string(),
            ],
            school_level: "middle".to_string(),
            level_code: "MS-1".to_string(),
            domain_code: "RP".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "GEO-ANG-001".to_string(),
            name: "Angle relationships".to_string(),
            description: "Find unknown angles using complementary, supplementary, vertical, and \
                          adjacent angle facts."
                .to_string(),
            solution_method: "Write an equation from the angle relationship and solve for the \
                              unknown measure."
                .to_string(),
            subject: "Geometry".to_string(),
            area: "Angles".to_string(),
            standard_code: "CCSS.MATH.7.G.B.5".to_string(),
            standard_content: "Use facts about supplementary, complementary, vertical, and \
                               adjacent angles in a multi-step problem."
                .to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 2,
            difficulty_max: 3,
            keywords: vec!["angle".to_string(), "vertical angles".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-2".to_string(),
            domain_code: "G".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "STA-DAT-001".to_string(),
            name: "Reading data displays".to_string(),
            description: "Summarize and interpret dot plots, histograms, and box plots."
                .to_string(),
            solution_method: "Identify center, spread, and shape before answering comparison \
                              questions."
                .to_string(),
            subject: "Statistics".to_string(),
            area: "Data displays".to_string(),
            standard_code: "CCSS.MATH.6.SP.B.4".to_string(),
            standard_content: "Display numerical data in plots on a number line, including dot \
                               plots, histograms, and box plots."
                .to_string(),
            cognitive_tag: "conceptual".to_string(),
            difficulty_min: 1,
            difficulty_max: 2,
            keywords: vec!["histogram".to_string(), "box plot".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-1".to_string(),
            domain_code: "SP".to_string(),
            ..CatalogRecord::default()
        },
    ]
}
