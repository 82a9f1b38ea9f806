/// Static registry of ATS job boards and geo presets

/// One known ATS platform: display name plus the `site:` dork that
/// restricts a search to its job-board domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteEntry {
    pub name: &'static str,
    pub fragment: &'static str,
}

/// A geo preset: display name plus a pre-formatted location expression
/// (already quoted / OR-grouped, injected into the location field verbatim).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoEntry {
    pub name: &'static str,
    pub fragment: &'static str,
}

/// The known ATS platforms, in declaration order. Display order is
/// produced by [`ordered_sites`].
pub const ATS_SITES: &[SiteEntry] = &[
    SiteEntry { name: "Ashby", fragment: "site:jobs.ashbyhq.com" },
    SiteEntry { name: "AvaHR", fragment: "site:jobs.avahr.com/*" },
    SiteEntry { name: "Avature", fragment: "site:*avature.net" },
    SiteEntry { name: "Greenhouse", fragment: "site:boards.greenhouse.io/*" },
    SiteEntry { name: "Gem", fragment: "site:jobs.gem.com/*" },
    SiteEntry { name: "iCIMS", fragment: "site:*.icims.com/*" },
    SiteEntry { name: "Jobvite", fragment: "site:jobs.jobvite.com/*" },
    SiteEntry { name: "Lever", fragment: "site:jobs.lever.co/*" },
    SiteEntry { name: "Personio", fragment: "site:*.jobs.personio.com" },
    SiteEntry { name: "Pinpoint", fragment: "site:*.pinpointhq.com" },
    SiteEntry { name: "Recruitee", fragment: "site:*.recruitee.com" },
    SiteEntry { name: "Rippling", fragment: "site:ats.rippling.com/*" },
    SiteEntry {
        name: "SmartRecruiters",
        fragment: "site:careers.smartrecruiters.com/* OR site:jobs.smartrecruiters.com/*",
    },
    SiteEntry { name: "Taleo", fragment: "site:*.taleo.net" },
    SiteEntry { name: "Teamtailor", fragment: "site:*.teamtailor.com" },
    SiteEntry { name: "Trakstar Hire", fragment: "site:*.hire.trakstar.com" },
    SiteEntry { name: "Workable", fragment: "site:apply.workable.com/*" },
    SiteEntry { name: "Workday", fragment: "site:*.myworkdayjobs.com/*" },
    SiteEntry { name: "Breezy HR", fragment: "site:breezy.hr" },
    SiteEntry { name: "Zoho Recruit", fragment: "site:*.zohorecruit.com/*" },
    SiteEntry { name: "ADP Workforce Now", fragment: "site:adp.com/careers" },
    SiteEntry { name: "UltiPro (UKG Pro)", fragment: "site:*.ultipro.com/*" },
    SiteEntry { name: "Comeet", fragment: "site:www.comeet.com/jobs/*" },
    SiteEntry { name: "ApplicantStack", fragment: "site:*.applicantstack.com/*" },
];

/// Platforms shown first, in exactly this order, ahead of the
/// alphabetical remainder.
pub const PRIORITY_SITES: &[&str] = &["Lever", "Greenhouse", "Ashby", "Rippling"];

/// Geo presets, displayed in declaration order.
pub const GEO_PRESETS: &[GeoEntry] = &[
    GeoEntry { name: "United States / USA", fragment: r#"("United States" OR "USA" OR "US")"# },
    GeoEntry { name: "United Kingdom / UK", fragment: r#"("United Kingdom" OR "UK")"# },
    GeoEntry { name: "Canada", fragment: r#""Canada""# },
    GeoEntry { name: "Europe", fragment: r#"("Europe" OR "European Union" OR "EU")"# },
    GeoEntry { name: "Germany", fragment: r#""Germany""# },
    GeoEntry { name: "France", fragment: r#""France""# },
    GeoEntry {
        name: "LATAM",
        fragment: r#"(LATAM OR "Latin America" OR "South America" OR "Central America")"#,
    },
    GeoEntry { name: "Brazil", fragment: r#""Brazil""# },
    GeoEntry { name: "Mexico", fragment: r#""Mexico""# },
    GeoEntry { name: "Asia-Pacific / APAC", fragment: r#"(APAC OR "Asia-Pacific")"# },
    GeoEntry { name: "India", fragment: r#""India""# },
    GeoEntry { name: "China", fragment: r#""China""# },
    GeoEntry { name: "Australia", fragment: r#""Australia""# },
    GeoEntry { name: "ANZ", fragment: r#"(ANZ OR "Australia and New Zealand")"# },
];

/// Order sites for display: members of `priority` first, in priority
/// order, followed by the rest sorted case-insensitively by name.
pub fn ordered_sites(raw: &[SiteEntry], priority: &[&str]) -> Vec<SiteEntry> {
    let (mut first, mut rest): (Vec<SiteEntry>, Vec<SiteEntry>) = raw
        .iter()
        .copied()
        .partition(|site| priority.contains(&site.name));

    first.sort_by_key(|site| priority.iter().position(|name| *name == site.name));
    rest.sort_by_key(|site| site.name.to_ascii_lowercase());

    first.extend(rest);
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sites: &[SiteEntry]) -> Vec<&'static str> {
        sites.iter().map(|site| site.name).collect()
    }

    #[test]
    fn test_priority_sites_come_first_in_priority_order() {
        let ordered = ordered_sites(ATS_SITES, PRIORITY_SITES);
        assert_eq!(
            &names(&ordered)[..4],
            &["Lever", "Greenhouse", "Ashby", "Rippling"]
        );
    }

    #[test]
    fn test_remainder_is_alphabetical_case_insensitive() {
        let ordered = ordered_sites(ATS_SITES, PRIORITY_SITES);
        let rest: Vec<String> = ordered[4..]
            .iter()
            .map(|site| site.name.to_ascii_lowercase())
            .collect();

        let mut sorted = rest.clone();
        sorted.sort();
        assert_eq!(rest, sorted);

        // "iCIMS" must land between Gem and Jobvite despite its lowercase "i"
        let all = names(&ordered);
        let gem = all.iter().position(|n| *n == "Gem").unwrap();
        let icims = all.iter().position(|n| *n == "iCIMS").unwrap();
        let jobvite = all.iter().position(|n| *n == "Jobvite").unwrap();
        assert!(gem < icims && icims < jobvite);
    }

    #[test]
    fn test_ordering_is_stable_under_input_permutation() {
        let baseline = ordered_sites(ATS_SITES, PRIORITY_SITES);

        let mut reversed: Vec<SiteEntry> = ATS_SITES.to_vec();
        reversed.reverse();
        assert_eq!(ordered_sites(&reversed, PRIORITY_SITES), baseline);

        let mut rotated: Vec<SiteEntry> = ATS_SITES.to_vec();
        rotated.rotate_left(7);
        assert_eq!(ordered_sites(&rotated, PRIORITY_SITES), baseline);
    }

    #[test]
    fn test_output_keeps_every_entry_exactly_once() {
        let ordered = ordered_sites(ATS_SITES, PRIORITY_SITES);
        assert_eq!(ordered.len(), ATS_SITES.len());
        for site in ATS_SITES {
            assert!(ordered.contains(site));
        }
    }

    #[test]
    fn test_empty_priority_list_means_fully_alphabetical() {
        let ordered = ordered_sites(ATS_SITES, &[]);
        let all: Vec<String> = ordered
            .iter()
            .map(|site| site.name.to_ascii_lowercase())
            .collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }
}
