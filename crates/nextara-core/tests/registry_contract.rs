use nextara_core::cta::{self, resolve_ctas};
use nextara_core::registry::EMBEDDED_SERVICES;
use nextara_core::service::Cta;
use nextara_core::{RegistryError, ServicePage, ServiceRegistry, ServiceSlug};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn embedded_pages() -> BTreeMap<ServiceSlug, ServicePage> {
    let registry = ServiceRegistry::load_embedded().unwrap();
    ServiceSlug::ALL
        .iter()
        .map(|&slug| (slug, registry.get_service(slug).clone()))
        .collect()
}

#[test]
fn test_embedded_content_is_valid() {
    let registry = ServiceRegistry::load_embedded().unwrap();
    assert_eq!(registry.len(), ServiceSlug::ALL.len());
    for slug in ServiceSlug::ALL {
        assert_eq!(registry.get_service(slug).slug, slug);
    }
}

#[test]
fn test_service_slugs_are_the_closed_set_in_order() {
    let registry = ServiceRegistry::load_embedded().unwrap();
    let slugs = registry.get_service_slugs();
    assert_eq!(slugs, ServiceSlug::ALL.to_vec());

    let names: Vec<&str> = slugs.iter().map(|s| s.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "growth-blocker-audit",
            "dcs-audits",
            "tracking-governance",
            "seo-indexing",
            "conversion-architecture",
            "paid-media-systems",
            "automation-ecc",
        ]
    );
}

#[test]
fn test_get_all_services_sorts_by_order() {
    let mut pages = embedded_pages();
    pages
        .get_mut(&ServiceSlug::GrowthBlockerAudit)
        .unwrap()
        .order = 10;
    let registry = ServiceRegistry::from_pages(pages).unwrap();

    let all = registry.get_all_services();
    assert_eq!(all.len(), 7);
    assert_eq!(all[0].slug, ServiceSlug::DcsAudits);
    assert_eq!(all[6].slug, ServiceSlug::GrowthBlockerAudit);
    assert!(all.windows(2).all(|w| w[0].order < w[1].order));
}

#[test]
fn test_related_services_data_keeps_order_and_duplicates() {
    let registry = ServiceRegistry::load_embedded().unwrap();
    let slugs = [
        ServiceSlug::SeoIndexing,
        ServiceSlug::DcsAudits,
        ServiceSlug::SeoIndexing,
    ];
    let related = registry.get_related_services_data(&slugs);
    let got: Vec<ServiceSlug> = related.iter().map(|p| p.slug).collect();
    assert_eq!(got, slugs.to_vec());
}

#[test]
fn test_related_services_of_record_resolve() {
    let registry = ServiceRegistry::load_embedded().unwrap();
    let page = registry.get_service(ServiceSlug::GrowthBlockerAudit);
    let related = registry.get_related_services_data(&page.related_services);
    let names: Vec<&str> = related.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DCS Audits", "Tracking Governance", "SEO + Indexing Systems"]
    );
}

#[test]
fn test_cta_defaults_without_override() {
    let registry = ServiceRegistry::load_embedded().unwrap();
    let page = registry.get_service(ServiceSlug::DcsAudits);
    assert!(page.primary_cta.is_none());

    let ctas = resolve_ctas(page);
    assert_eq!(
        ctas.primary,
        Cta::new("Request a Consultation", "/contact/?service=dcs-audits")
    );
    assert_eq!(ctas.secondary, cta::default_secondary());
}

#[test]
fn test_cta_override_wins() {
    let registry = ServiceRegistry::load_embedded().unwrap();
    let ctas = resolve_ctas(registry.get_service(ServiceSlug::GrowthBlockerAudit));
    assert_eq!(ctas.primary.label, "Book Your Growth Blocker Audit — $297");
    assert_eq!(ctas.primary.href, "/contact/?service=growth-blocker-audit");
    assert_eq!(ctas.secondary.href, "/services/dcs-audits/");
}

#[test]
fn test_cta_partial_override() {
    let mut page = embedded_pages()
        .remove(&ServiceSlug::SeoIndexing)
        .unwrap();
    page.secondary_cta = Some(Cta::new("Read the guide", "/resources/indexing/"));

    let ctas = resolve_ctas(&page);
    assert_eq!(ctas.primary, cta::default_primary(ServiceSlug::SeoIndexing));
    assert_eq!(ctas.secondary.href, "/resources/indexing/");
}

#[test]
fn test_load_path_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("services.toml");
    std::fs::write(&path, EMBEDDED_SERVICES).unwrap();

    let registry = ServiceRegistry::load_path(&path).unwrap();
    assert_eq!(
        registry.get_service(ServiceSlug::AutomationEcc).name,
        "Automation (ECC)"
    );
}

#[test]
fn test_load_path_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = ServiceRegistry::load_path(&tmp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_unknown_registry_key_rejected() {
    let content = EMBEDDED_SERVICES
        .replace("[services.automation-ecc]", "[services.web-design]")
        .replace("services.automation-ecc.", "services.web-design.");
    let err = ServiceRegistry::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownKey(ref key) if key == "web-design"));
}

#[test]
fn test_unknown_related_slug_rejected_while_parsing() {
    let content = EMBEDDED_SERVICES.replacen("\"seo-indexing\",\n]", "\"web-design\",\n]", 1);
    assert_ne!(content, EMBEDDED_SERVICES);

    let err = ServiceRegistry::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
    assert!(err.to_string().contains("web-design"));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = ServiceRegistry::from_toml_str("services = 3").unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
}

#[test]
fn test_misspelled_cta_table_rejected() {
    let content = EMBEDDED_SERVICES.replace(
        "[services.growth-blocker-audit.primary_cta]",
        "[services.growth-blocker-audit.primary_cat]",
    );
    assert_ne!(content, EMBEDDED_SERVICES);

    let err = ServiceRegistry::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
    assert!(err.to_string().contains("primary_cat"));
}

#[test]
fn test_misspelled_nested_field_rejected() {
    let content = EMBEDDED_SERVICES.replacen("question = ", "qestion = ", 1);
    let err = ServiceRegistry::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
    assert!(err.to_string().contains("qestion"));
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let content = format!("version = 2\n{}", EMBEDDED_SERVICES);
    let err = ServiceRegistry::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, RegistryError::Parse(_)));
}

#[test]
fn test_from_pages_rejects_repeated_slug() {
    let pages = embedded_pages();
    let extra = pages[&ServiceSlug::DcsAudits].clone();
    let err = ServiceRegistry::from_pages(pages.into_iter().chain([(ServiceSlug::DcsAudits, extra)]))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateEntry(ServiceSlug::DcsAudits)));
    assert_eq!(err.slug(), Some(ServiceSlug::DcsAudits));
    assert_eq!(
        err.to_string(),
        "[services] dcs-audits: duplicate registry entry"
    );
}
