//! 2025 refresh generation.
//!
//! Revises a few earlier entries (same codes, so this batch wins the merge) and adds
//! the first calculus and regression content.

use seeder::types::CatalogRecord;

pub fn records() -> Vec<CatalogRecord> {
    vec![
        // Revision of the foundations entry: tighter description, calibrated difficulty.
        CatalogRecord {
            code: "ALG1-LEQ-001".to_string(),
            name: "One-step equations with rational coefficients".to_string(),
            description: "Solve x + p = q and px = q where p and q are rational, including \
                          negative solutions."
                .to_string(),
            solution_method: "Apply the inverse operation to both sides and verify by \
                              substitution."
                .to_string(),
            subject: "Algebra".to_string(),
            area: "Linear equations".to_string(),
            standard_code: "CCSS.MATH.6.EE.B.7".to_string(),
            standard_content: "Solve real-world and mathematical problems by writing and solving \
                               equations of the form x + p = q and px = q."
                .to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 1,
            difficulty_max: 3,
            keywords: vec![
                "equation".to_string(),
                "one-step".to_string(),
                "rational coefficients".to_string(),
            ],
            school_level: "middle".to_string(),
            level_code: "MS-1".to_string(),
            domain_code: "EE".to_string(),
            ..CatalogRecord::default()
        },
        // Revision of the foundations angle entry with transversal content folded in.
        CatalogRecord {
            code: "GEO-ANG-001".to_string(),
            name: "Angle relationships and transversals".to_string(),
            description: "Find unknown angles from intersecting lines and parallel lines cut by \
                          a transversal."
                .to_string(),
            solution_method: "Name the angle pair relationship, write the equation it implies, \
                              and solve."
                .to_string(),
            subject: "Geometry".to_string(),
            area: "Angles".to_string(),
            standard_code: "CCSS.MATH.8.G.A.5".to_string(),
            standard_content: "Use informal arguments to establish facts about the angle sum of \
                               triangles and angles created when parallel lines are cut by a \
                               transversal."
                .to_string(),
            cognitive_tag: "reasoning".to_string(),
            difficulty_min: 2,
            difficulty_max: 4,
            keywords: vec!["angle".to_string(), "transversal".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-3".to_string(),
            domain_code: "G".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "CAL-LIM-001".to_string(),
            name: "Limits from tables and graphs".to_string(),
            description: "Estimate one-sided and two-sided limits numerically and graphically."
                .to_string(),
            solution_method: "Evaluate the function on both sides of the point and compare the \
                              one-sided trends."
                .to_string(),
            subject: "Calculus".to_string(),
            area: "Limits".to_string(),
            standard_code: "AP.CALC.LIM-1.A".to_string(),
            standard_content: "Represent limits analytically using correct notation and estimate \
                               limits from tables and graphs."
                .to_string(),
            cognitive_tag: "conceptual".to_string(),
            difficulty_min: 3,
            difficulty_max: 5,
            keywords: vec!["limit".to_string(), "one-sided".to_string()],
            school_level: "high".to_string(),
            level_code: "HS-3".to_string(),
            domain_code: "LIM".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "STA-REG-001".to_string(),
            name: "Linear regression and residuals".to_string(),
            description: "Fit a line to bivariate data and assess the fit with residual plots."
                .to_string(),
            solution_method: "Compute the least-squares line, then inspect residuals for \
                              structure before interpreting the slope."
                .to_string(),
            subject: "Statistics".to_string(),
            area: "Bivariate data".to_string(),
            standard_code: "CCSS.MATH.HSS.ID.B.6".to_string(),
            standard_content: "Represent data on two quantitative variables on a scatter plot, \
                               and describe how the variables are related."
                .to_string(),
            cognitive_tag: "application".to_string(),
            difficulty_min: 3,
            difficulty_max: 5,
            keywords: vec!["regression".to_string(), "residual".to_string()],
            school_level: "high".to_string(),
            level_code: "HS-2".to_string(),
            domain_code: "ID".to_string(),
            ..CatalogRecord::default()
        },
    ]
}
