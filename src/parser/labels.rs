/// Known technologies, in output order.
pub const FRAMEWORKS: &[&str] = &[
    "Python",
    "Scrapy",
    "Selenium",
    "BeautifulSoup",
    "Requests",
    "Pandas",
    "NumPy",
    "Power BI",
    "Tableau",
    "Google Maps API",
    "LinkedIn",
    "GitHub",
    "JavaScript",
    "Node.js",
    "Playwright",
    "Excel",
    "Regex",
    "API",
    "ETL",
    "Airflow",
];

/// Role rules in priority order: the first rule with any matching keyword wins.
pub const ROLE_RULES: &[(&[&str], &str)] = &[
    (&["power bi"], "Power BI Developer"),
    (&["data analyst", "data analysis"], "Data Analyst"),
    (&["web scraping", "scraping"], "Web Scraping Specialist"),
    (&["python"], "Python Developer"),
    (&["etl"], "ETL Engineer"),
];

pub fn infer_role(text: &str, skills: &[String]) -> String {
    let text = text.to_lowercase();
    let skills = skills.join(" ").to_lowercase();

    ROLE_RULES
        .iter()
        .find(|(needles, _)| {
            needles
                .iter()
                .any(|n| text.contains(n) || skills.contains(n))
        })
        .map(|(_, role)| role.to_string())
        .unwrap_or_default()
}

/// Dictionary entries mentioned anywhere in `text` or `skills`, joined with ", ".
pub fn extract_frameworks(text: &str, skills: &[String]) -> String {
    frameworks_in(text, skills).join(", ")
}

pub fn frameworks_in(text: &str, skills: &[String]) -> Vec<&'static str> {
    let blob = format!("{} {}", text, skills.join(" ")).to_lowercase();
    let mut found: Vec<&'static str> = Vec::new();
    for &fw in FRAMEWORKS {
        if blob.contains(&fw.to_lowercase()) && !found.contains(&fw) {
            found.push(fw);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn role_priority_first_match_wins() {
        assert_eq!(
            infer_role("Python script feeding a Power BI dashboard", &[]),
            "Power BI Developer"
        );
    }

    #[test]
    fn role_from_skills_only() {
        assert_eq!(infer_role("Need help", &skills(&["Python"])), "Python Developer");
        assert_eq!(infer_role("", &skills(&["ETL Pipelines"])), "ETL Engineer");
    }

    #[test]
    fn role_each_rule() {
        assert_eq!(infer_role("Senior Data Analyst", &[]), "Data Analyst");
        assert_eq!(infer_role("exploratory data analysis", &[]), "Data Analyst");
        assert_eq!(infer_role("Web Scraping of listings", &[]), "Web Scraping Specialist");
        assert_eq!(infer_role("scraping job", &[]), "Web Scraping Specialist");
    }

    #[test]
    fn role_analysis_beats_scraping() {
        assert_eq!(
            infer_role("scraping plus data analysis", &skills(&["Python"])),
            "Data Analyst"
        );
    }

    #[test]
    fn no_role() {
        assert_eq!(infer_role("Logo design", &skills(&["Illustrator"])), "");
    }

    #[test]
    fn frameworks_dictionary_order() {
        assert_eq!(
            extract_frameworks("", &skills(&["Python", "Scrapy", "Unrelated"])),
            "Python, Scrapy"
        );
        assert_eq!(
            extract_frameworks("Use pandas then python", &[]),
            "Python, Pandas"
        );
    }

    #[test]
    fn frameworks_never_repeat() {
        let out = extract_frameworks(
            "python Python PYTHON excel",
            &skills(&["Python", "Excel", "python"]),
        );
        assert_eq!(out, "Python, Excel");
    }

    #[test]
    fn frameworks_case_insensitive_multiword() {
        assert_eq!(
            extract_frameworks("GOOGLE MAPS API scraping with node.js", &[]),
            "Google Maps API, Node.js, API"
        );
    }

    #[test]
    fn frameworks_empty() {
        assert_eq!(extract_frameworks("", &[]), "");
    }
}
