use super::products::{Product, PRODUCTS};

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub slug: String,
    pub name: &'static str,
    pub products: Vec<&'static Product>,
}

/// Lower-case ASCII alphanumerics joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Companies derived from the catalog, in first-seen order.
pub fn directory_from(products: &'static [Product]) -> Vec<Company> {
    let mut companies: Vec<Company> = Vec::new();
    for product in products {
        let slug = slugify(product.company);
        match companies.iter_mut().find(|company| company.slug == slug) {
            Some(company) => company.products.push(product),
            None => companies.push(Company {
                slug,
                name: product.company,
                products: vec![product],
            }),
        }
    }
    companies
}

pub fn directory() -> Vec<Company> {
    directory_from(PRODUCTS)
}

pub fn find_company(slug: &str) -> Option<Company> {
    directory().into_iter().find(|company| company.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Withings & Co."), "withings-co");
        assert_eq!(slugify("  Orbit   Audio "), "orbit-audio");
        assert_eq!(slugify("Aster & Vale"), "aster-vale");
        assert_eq!(slugify("Ünïcode Labs"), "n-code-labs");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn directory_groups_products_by_company() {
        let companies = directory();
        let pebblestone = companies
            .iter()
            .find(|c| c.slug == "pebblestone-home")
            .expect("pebblestone listed");
        assert_eq!(pebblestone.products.len(), 2);
        assert_eq!(companies.first().map(|c| c.name), Some("Aster & Vale"));
    }

    #[test]
    fn every_product_has_a_company_page() {
        let companies = directory();
        for product in PRODUCTS {
            let slug = slugify(product.company);
            assert!(companies.iter().any(|c| c.slug == slug), "{}", product.company);
        }
        assert!(find_company("quanta-works").is_some());
        assert!(find_company("nobody").is_none());
    }
}
