use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog, term: &str) -> Result<CmdResult> {
    let matches: Vec<_> = catalog.search(term).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No customers match '{}'.",
            term
        )));
    }
    Ok(result.with_listed_customers(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    fn catalog() -> Catalog {
        CatalogFixture::new()
            .with_customer("Alice", "a@b.com", "12345")
            .with_customer("Bob", "bob@example.org", "999")
            .with_customer("Carla", "carla@alicorp.de", "42")
            .build()
    }

    #[test]
    fn matches_name_case_insensitively() {
        let result = run(&catalog(), "alice").unwrap();
        assert_eq!(result.listed_customers.len(), 1);
        assert_eq!(result.listed_customers[0].name, "Alice");
    }

    #[test]
    fn matches_email_and_keeps_order() {
        let result = run(&catalog(), "ALI").unwrap();
        let names: Vec<_> = result
            .listed_customers
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Carla"]);
    }

    #[test]
    fn phone_is_not_searched() {
        let result = run(&catalog(), "999").unwrap();
        assert!(result.listed_customers.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_term_matches_everything() {
        let result = run(&catalog(), "").unwrap();
        assert_eq!(result.listed_customers.len(), 3);
    }
}
