//! 2024 expansion generation: high-school algebra, functions, and counting.

use seeder::types::CatalogRecord;

pub fn records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord {
            code: "ALG2-QDR-001".to_string(),
            name: "Factoring quadratics".to_string(),
            description: "Factor trinomials with leading coefficient one and solve by the zero \
                          product property."
                .to_string(),
            solution_method: "Find the factor pair of c summing to b, then set each factor to \
                              zero."
                .to_string(),
            subject: "Algebra".to_string(),
            area: "Quadratic equations".to_string(),
            standard_code: "CCSS.MATH.HSA.SSE.B.3".to_string(),
            standard_content: "Choose and produce an equivalent form of an expression to reveal \
                               and explain properties of the quantity it represents."
                .to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 2,
            difficulty_max: 4,
            keywords: vec!["quadratic".to_string(), "factoring".to_string()],
            school_level: "high".to_string(),
            level_code: "HS-1".to_string(),
            domain_code: "SSE".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "ALG2-QDR-002".to_string(),
            name: "Quadratic formula".to_string(),
            description: "Solve arbitrary quadratics and classify roots by the discriminant."
                .to_string(),
            solution_method: "Compute the discriminant first, then substitute into the formula \
                              and simplify the radical."
                .to_string(),
            subject: "Algebra".to_string(),
            area: "Quadratic equations".to_string(),
            standard_code: "CCSS.MATH.HSA.REI.B.4".to_string(),
            standard_content: "Solve quadratic equations in one variable.".to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 3,
            difficulty_max: 5,
            keywords: vec!["quadratic".to_string(), "discriminant".to_string()],
            school_level: "high".to_string(),
            level_code: "HS-1".to_string(),
            domain_code: "REI".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "FUN-LIN-001".to_string(),
            name: "Slope and linear functions".to_string(),
            description: "Interpret slope and intercept of a linear function in modeling \
                          contexts."
                .to_string(),
            solution_method: "Read two points from the context, compute the rate of change, and \
                              anchor the intercept."
                .to_string(),
            subject: "Functions".to_string(),
            area: "Linear functions".to_string(),
            standard_code: "CCSS.MATH.8.F.B.4".to_string(),
            standard_content: "Construct a function to model a linear relationship between two \
                               quantities."
                .to_string(),
            cognitive_tag: "application".to_string(),
            difficulty_min: 2,
            difficulty_max: 4,
            keywords: vec!["slope".to_string(), "linear function".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-3".to_string(),
            domain_code: "F".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "GEO-TRI-001".to_string(),
            name: "Triangle congruence".to_string(),
            description: "Prove triangles congruent with SSS, SAS, ASA, and AAS criteria."
                .to_string(),
            solution_method: "Mark given congruences on the diagram and match them to a \
                              congruence criterion."
                .to_string(),
            subject: "Geometry".to_string(),
            area: "Congruence".to_string(),
            standard_code: "CCSS.MATH.HSG.CO.B.8".to_string(),
            standard_content: "Explain how the criteria for triangle congruence follow from the \
                               definition of congruence in terms of rigid motions."
                .to_string(),
            cognitive_tag: "reasoning".to_string(),
            difficulty_min: 3,
            difficulty_max: 5,
            keywords: vec!["congruence".to_string(), "proof".to_string()],
            school_level: "high".to_string(),
            level_code: "HS-1".to_string(),
            domain_code: "CO".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "PRB-CNT-001".to_string(),
            name: "Counting principles".to_string(),
            description: "Count outcomes with the multiplication principle, permutations, and \
                          combinations."
                .to_string(),
            solution_method: "Decide whether order matters before choosing between permutation \
                              and combination counts."
                .to_string(),
            subject: "Probability".to_string(),
            area: "Counting".to_string(),
            standard_code: "CCSS.MATH.HSS.CP.B.9".to_string(),
            standard_content: "Use permutations and combinations to compute probabilities of \
                               compound events and solve problems."
                .to_string(),
            cognitive_tag: "conceptual".to_string(),
            difficulty_min: 3,
            difficulty_max: 5,
            keywords: vec!["permutation".to_string(), "combination".to_string()],
            school_level: "high".to_string(),
            level_code: "HS-2".to_string(),
            domain_code: "CP".to_string(),
            ..CatalogRecord::default()
        },
        CatalogRecord {
            code: "NUM-EXP-001".to_string(),
            name: "Integer exponents".to_string(),
            description: "Apply the product, quotient, and power rules for integer exponents."
                .to_string(),
            solution_method: "Rewrite each factor with a common base, then combine exponents \
                              rule by rule."
                .to_string(),
            subject: "Number".to_string(),
            area: "Exponents".to_string(),
            standard_code: "CCSS.MATH.8.EE.A.1".to_string(),
            standard_content: "Know and apply the properties of integer exponents to generate \
                               equivalent numerical expressions."
                .to_string(),
            cognitive_tag: "procedural".to_string(),
            difficulty_min: 1,
            difficulty_max: 3,
            keywords: vec!["exponent".to_string(), "power rule".to_string()],
            school_level: "middle".to_string(),
            level_code: "MS-3".to_string(),
            domain_code: "EE".to_string(),
            ..CatalogRecord::default()
        },
    ]
}
