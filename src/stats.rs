use crate::parser::labels::{FRAMEWORKS, ROLE_RULES};
use crate::parser::record::JobRecord;

pub struct RunStats {
    pub total: usize,
    pub priced: usize,
    pub roles: Vec<(String, usize)>,
    pub frameworks: Vec<(String, usize)>,
    pub price_types: Vec<(String, usize)>,
    pub currencies: Vec<(String, usize)>,
}

pub fn collect(records: &[JobRecord]) -> RunStats {
    let count = |pred: &dyn Fn(&JobRecord) -> bool| records.iter().filter(|r| pred(r)).count();

    let mut roles: Vec<(String, usize)> = ROLE_RULES
        .iter()
        .map(|(_, role)| (role.to_string(), count(&|r| r.role == *role)))
        .collect();
    roles.push(("(none)".to_string(), count(&|r| r.role.is_empty())));

    // Frameworks are stored joined; split back on the separator.
    let frameworks = FRAMEWORKS
        .iter()
        .map(|fw| {
            let n = count(&|r| r.frameworks.split(", ").any(|f| f == *fw));
            (fw.to_string(), n)
        })
        .filter(|(_, n)| *n > 0)
        .collect();

    let price_types = ["fixed", "hourly", ""]
        .iter()
        .map(|t| {
            let label = if t.is_empty() { "(unknown)" } else { *t };
            (label.to_string(), count(&|r| r.price_type == *t))
        })
        .collect();

    let mut currencies: Vec<(String, usize)> = Vec::new();
    for r in records.iter().filter(|r| !r.currency.is_empty()) {
        match currencies.iter().position(|(c, _)| *c == r.currency) {
            Some(i) => currencies[i].1 += 1,
            None => currencies.push((r.currency.clone(), 1)),
        }
    }

    RunStats {
        total: records.len(),
        priced: count(&|r| !r.price_min.is_empty()),
        roles,
        frameworks,
        price_types,
        currencies,
    }
}

pub fn render_markdown(stats: &RunStats) -> String {
    let mut out = String::new();
    out.push_str("## Job Stats\n");
    out.push_str(&format!(
        "- Total postings: {}\n- Postings with a price: {} ({:.1}%)\n",
        stats.total,
        stats.priced,
        percent(stats.priced, stats.total)
    ));

    out.push_str("\n### Roles\n");
    for (role, n) in &stats.roles {
        out.push_str(&format!("- {}: {}\n", role, n));
    }

    out.push_str("\n### Framework mentions\n");
    if stats.frameworks.is_empty() {
        out.push_str("- none\n");
    }
    for (fw, n) in &stats.frameworks {
        out.push_str(&format!("- {}: {}\n", fw, n));
    }

    out.push_str("\n### Price types\n");
    for (t, n) in &stats.price_types {
        out.push_str(&format!("- {}: {}\n", t, n));
    }

    out.push_str("\n### Currencies\n");
    if stats.currencies.is_empty() {
        out.push_str("- none\n");
    }
    for (c, n) in &stats.currencies {
        out.push_str(&format!("- {}: {}\n", c, n));
    }

    out
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
