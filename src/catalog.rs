// Compiled-in category/keyword catalog. High-CPC niches, fixed per build.

/// A named group of curated keywords
///
/// The catalog is a constant: category names are unique and every keyword
/// list is non-empty. Iteration order is declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl Category {
    /// The keyword actually submitted to the provider for this category
    ///
    /// Only the lead keyword is ever queried; the whole list is scored off
    /// its outcome.
    #[must_use]
    pub fn lead_keyword(&self) -> &'static str {
        self.keywords[0]
    }
}

/// All tracked categories, in output order
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "AI & Tech",
        keywords: &[
            "Generative AI",
            "LLM Fine Tuning",
            "AI Agents",
            "Nvidia GPU Cloud",
        ],
    },
    Category {
        name: "Finance",
        keywords: &[
            "Crypto Arbitrage",
            "Options Trading",
            "Mortgage Rates",
            "Stock Portfolio AI",
        ],
    },
    Category {
        name: "SaaS",
        keywords: &[
            "CRM Automation",
            "HR Software",
            "Cloud Hosting",
            "Cybersecurity Tools",
        ],
    },
];
