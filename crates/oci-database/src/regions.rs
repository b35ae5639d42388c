//! Region and realm table used to derive service endpoints.

use tracing::warn;

/// Endpoint template of the Database service.
pub const ENDPOINT_TEMPLATE: &str = "https://database.{region}.{secondLevelDomain}";

/// An isolated set of regions sharing a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Realm {
    /// Realm identifier, e.g. `oc1`
    pub id: &'static str,
    /// Second level domain of every endpoint in the realm
    pub second_level_domain: &'static str,
}

/// A known region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Region identifier, e.g. `us-phoenix-1`
    pub id: &'static str,
    /// Three letter short code, e.g. `phx`
    pub short_code: &'static str,
    /// Realm identifier
    pub realm: &'static str,
}

/// Known realms.
pub const REALMS: &[Realm] = &[
    Realm { id: "oc1", second_level_domain: "oraclecloud.com" },
    Realm { id: "oc2", second_level_domain: "oraclegovcloud.com" },
    Realm { id: "oc3", second_level_domain: "oraclegovcloud.com" },
    Realm { id: "oc4", second_level_domain: "oraclegovcloud.uk" },
    Realm { id: "oc8", second_level_domain: "oraclecloud8.com" },
    Realm { id: "oc9", second_level_domain: "oraclecloud9.com" },
];

/// Known regions.
pub const REGIONS: &[Region] = &[
    Region { id: "ap-chuncheon-1", short_code: "yny", realm: "oc1" },
    Region { id: "ap-hyderabad-1", short_code: "hyd", realm: "oc1" },
    Region { id: "ap-melbourne-1", short_code: "mel", realm: "oc1" },
    Region { id: "ap-mumbai-1", short_code: "bom", realm: "oc1" },
    Region { id: "ap-osaka-1", short_code: "kix", realm: "oc1" },
    Region { id: "ap-seoul-1", short_code: "icn", realm: "oc1" },
    Region { id: "ap-sydney-1", short_code: "syd", realm: "oc1" },
    Region { id: "ap-tokyo-1", short_code: "nrt", realm: "oc1" },
    Region { id: "ca-montreal-1", short_code: "yul", realm: "oc1" },
    Region { id: "ca-toronto-1", short_code: "yyz", realm: "oc1" },
    Region { id: "eu-amsterdam-1", short_code: "ams", realm: "oc1" },
    Region { id: "eu-frankfurt-1", short_code: "fra", realm: "oc1" },
    Region { id: "eu-zurich-1", short_code: "zrh", realm: "oc1" },
    Region { id: "me-jeddah-1", short_code: "jed", realm: "oc1" },
    Region { id: "sa-saopaulo-1", short_code: "gru", realm: "oc1" },
    Region { id: "uk-london-1", short_code: "lhr", realm: "oc1" },
    Region { id: "us-ashburn-1", short_code: "iad", realm: "oc1" },
    Region { id: "us-phoenix-1", short_code: "phx", realm: "oc1" },
    Region { id: "us-sanjose-1", short_code: "sjc", realm: "oc1" },
    Region { id: "us-langley-1", short_code: "lfi", realm: "oc2" },
    Region { id: "us-luke-1", short_code: "luf", realm: "oc2" },
    Region { id: "us-gov-ashburn-1", short_code: "ric", realm: "oc3" },
    Region { id: "us-gov-chicago-1", short_code: "pia", realm: "oc3" },
    Region { id: "us-gov-phoenix-1", short_code: "tus", realm: "oc3" },
    Region { id: "uk-gov-london-1", short_code: "ltn", realm: "oc4" },
    Region { id: "uk-gov-cardiff-1", short_code: "brs", realm: "oc4" },
    Region { id: "ap-chiyoda-1", short_code: "nja", realm: "oc8" },
    Region { id: "ap-ibaraki-1", short_code: "ukb", realm: "oc8" },
    Region { id: "me-dcc-muscat-1", short_code: "mct", realm: "oc9" },
];

/// Look up a region by identifier or short code, case-insensitively.
pub fn find(region: &str) -> Option<&'static Region> {
    let region = region.trim();
    REGIONS
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(region) || r.short_code.eq_ignore_ascii_case(region))
}

/// Look up a realm by identifier.
pub fn realm(id: &str) -> Option<&'static Realm> {
    REALMS.iter().find(|r| r.id == id)
}

/// Canonical region identifier: short codes expand, unknown names are lower-cased.
pub fn canonical_name(region: &str) -> String {
    match find(region) {
        Some(known) => known.id.to_string(),
        None => region.trim().to_ascii_lowercase(),
    }
}

/// Second level domain for `region`.
///
/// Regions missing from the table are assumed to live in `oc1`.
pub fn second_level_domain(region: &str) -> &'static str {
    let realm_id = match find(region) {
        Some(known) => known.realm,
        None => {
            warn!(region, "Unknown region, assuming realm oc1");
            "oc1"
        }
    };
    realm(realm_id)
        .map(|r| r.second_level_domain)
        .unwrap_or("oraclecloud.com")
}

/// Substitute `{region}` and `{secondLevelDomain}` in `template`.
pub fn endpoint_for_template(region: &str, template: &str) -> String {
    template
        .replace("{region}", &canonical_name(region))
        .replace("{secondLevelDomain}", second_level_domain(region))
}
